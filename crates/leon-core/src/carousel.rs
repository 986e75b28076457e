// crates/leon-core/src/carousel.rs
// Carousel state machine: slide position, autoplay lifecycle

use std::time::Duration;

use serde::Serialize;

use crate::error::{LeonError, Result};
use crate::surface::{SlideSurface, track_offset_percent};
use crate::timer::{ManualTimer, Timer};

/// Autoplay delay used when none is configured
pub const DEFAULT_AUTOPLAY_DELAY: Duration = Duration::from_millis(5000);

/// Longest delay a browser interval honours; larger values wrap to zero
pub const MAX_AUTOPLAY_DELAY_MS: u64 = i32::MAX as u64;

/// Validated construction inputs for a carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselSettings {
    images: Vec<String>,
    delay: Duration,
}

impl CarouselSettings {
    /// Check the image list and delay. `delay_ms = None` means the default.
    pub fn new(images: Vec<String>, delay_ms: Option<u64>) -> Result<Self> {
        if images.is_empty() {
            return Err(LeonError::NoImages);
        }
        let delay = match delay_ms {
            Some(0) => return Err(LeonError::ZeroDelay),
            Some(ms) if ms > MAX_AUTOPLAY_DELAY_MS => {
                return Err(LeonError::DelayTooLong {
                    ms,
                    max: MAX_AUTOPLAY_DELAY_MS,
                });
            }
            Some(ms) => Duration::from_millis(ms),
            None => DEFAULT_AUTOPLAY_DELAY,
        };
        Ok(Self { images, delay })
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Serializable view of one carousel, for diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarouselSnapshot {
    pub current: usize,
    pub len: usize,
    pub autoplaying: bool,
    pub timer_live: bool,
}

/// An image carousel bound to a rendering surface.
///
/// Invariant: `current < images.len()` after construction, and the timer is
/// the only scheduled autoplay source.
#[derive(Debug)]
pub struct Carousel<S, T> {
    images: Vec<String>,
    delay: Duration,
    current: usize,
    autoplaying: bool,
    torn_down: bool,
    surface: S,
    timer: T,
}

impl<S: SlideSurface, T: Timer> Carousel<S, T> {
    /// Render slides and dots into `surface`, show slide 0, start autoplay.
    pub fn mount(settings: CarouselSettings, mut surface: S, timer: T) -> Self {
        let CarouselSettings { images, delay } = settings;
        surface.populate_slides(&images);
        surface.populate_dots(images.len());

        let mut carousel = Self {
            images,
            delay,
            current: 0,
            autoplaying: true,
            torn_down: false,
            surface,
            timer,
        };
        carousel.render();
        carousel.start();
        log::debug!(
            "Mounted carousel with {} slides, autoplay every {}ms",
            carousel.len(),
            carousel.delay.as_millis()
        );
        carousel
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always false: construction rejects empty image lists
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplaying
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            current: self.current,
            len: self.len(),
            autoplaying: self.autoplaying,
            timer_live: self.timer.is_scheduled(),
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Move to the next slide, wrapping to the first.
    pub fn advance(&mut self) {
        self.step_forward();
        self.reset();
    }

    /// Move to the previous slide, wrapping to the last.
    pub fn retreat(&mut self) {
        let len = self.len();
        self.current = (self.current + len - 1) % len;
        self.render();
        self.reset();
    }

    /// Jump to `index`. Out-of-range indices are rejected without changing
    /// the current slide or the autoplay cadence.
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        let len = self.len();
        if index >= len {
            return Err(LeonError::IndexOutOfRange { index, len });
        }
        self.current = index;
        self.render();
        self.reset();
        Ok(())
    }

    fn step_forward(&mut self) {
        self.current = (self.current + 1) % self.len();
        self.render();
    }

    fn render(&mut self) {
        self.surface.set_track_offset(track_offset_percent(self.current));
        self.surface.highlight_dot(self.current);
    }

    // ========================================================================
    // Autoplay
    // ========================================================================

    /// Replace any running timer with a fresh repeating one.
    pub fn start(&mut self) {
        if self.torn_down {
            log::warn!("Ignoring autoplay start on a torn-down carousel");
            return;
        }
        self.timer.schedule(self.delay);
    }

    /// Turn autoplay off and cancel the timer.
    pub fn stop(&mut self) {
        self.autoplaying = false;
        self.timer.cancel();
    }

    /// Restart the autoplay cadence from zero after manual navigation.
    pub fn reset(&mut self) {
        self.enable_autoplay();
    }

    /// Suspend autoplay while the pointer is over the carousel.
    /// The timer keeps running; its firings are ignored until `resume`.
    pub fn pause(&mut self) {
        self.autoplaying = false;
    }

    /// Re-enable autoplay with a full fresh interval.
    pub fn resume(&mut self) {
        self.enable_autoplay();
    }

    fn enable_autoplay(&mut self) {
        if self.torn_down {
            return;
        }
        self.autoplaying = true;
        self.start();
    }

    /// Timer callback. Advances one slide when autoplay is on; the repeating
    /// schedule is left as is.
    pub fn tick(&mut self) {
        if self.autoplaying && !self.torn_down {
            self.step_forward();
        }
    }

    /// Cancel the timer for good. Navigation still works afterwards but
    /// never schedules a new timer.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.stop();
        self.torn_down = true;
        log::debug!("Carousel torn down at slide {}", self.current);
    }
}

impl<S: SlideSurface> Carousel<S, ManualTimer> {
    /// Let `by` pass on the manual timer, delivering every firing that falls due.
    pub fn elapse(&mut self, by: Duration) {
        let fired = self.timer.advance(by);
        for _ in 0..fired {
            self.tick();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    fn images(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("img{i}.jpeg")).collect()
    }

    fn mount(n: usize, delay_ms: u64) -> Carousel<MemorySurface, ManualTimer> {
        let settings = CarouselSettings::new(images(n), Some(delay_ms)).unwrap();
        Carousel::mount(settings, MemorySurface::with_dots(), ManualTimer::new())
    }

    // ============================================================================
    // Settings
    // ============================================================================

    #[test]
    fn test_settings_reject_empty_images() {
        assert_eq!(CarouselSettings::new(vec![], None), Err(LeonError::NoImages));
    }

    #[test]
    fn test_settings_reject_zero_delay() {
        assert_eq!(
            CarouselSettings::new(images(2), Some(0)),
            Err(LeonError::ZeroDelay)
        );
    }

    #[test]
    fn test_settings_reject_delay_past_timer_limit() {
        assert_eq!(
            CarouselSettings::new(images(1), Some(3_000_000_000)),
            Err(LeonError::DelayTooLong {
                ms: 3_000_000_000,
                max: MAX_AUTOPLAY_DELAY_MS,
            })
        );
        let longest = CarouselSettings::new(images(1), Some(MAX_AUTOPLAY_DELAY_MS)).unwrap();
        assert_eq!(longest.delay(), Duration::from_millis(2_147_483_647));
    }

    #[test]
    fn test_settings_default_delay() {
        let settings = CarouselSettings::new(images(1), None).unwrap();
        assert_eq!(settings.delay(), Duration::from_millis(5000));
    }

    // ============================================================================
    // Mounting
    // ============================================================================

    #[test]
    fn test_mount_renders_initial_state() {
        let carousel = mount(3, 1000);
        let surface = carousel.surface();
        assert_eq!(surface.slides, images(3));
        assert_eq!(surface.dots, vec![true, false, false]);
        assert_eq!(surface.offset_percent, 0);
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.is_autoplaying());
        assert_eq!(carousel.timer().live_count(), 1);
        assert_eq!(carousel.timer().period(), Some(Duration::from_millis(1000)));
    }

    #[test]
    fn test_mount_without_dot_host() {
        let settings = CarouselSettings::new(images(3), Some(1000)).unwrap();
        let carousel = Carousel::mount(settings, MemorySurface::new(), ManualTimer::new());
        assert!(carousel.surface().dots.is_empty());
        assert_eq!(carousel.surface().slides.len(), 3);
    }

    // ============================================================================
    // Navigation
    // ============================================================================

    #[test]
    fn test_advance_wraps() {
        let mut carousel = mount(3, 1000);
        carousel.advance();
        carousel.advance();
        assert_eq!(carousel.current_index(), 2);
        carousel.advance();
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_retreat_from_first_goes_to_last() {
        let mut carousel = mount(3, 1000);
        carousel.retreat();
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(carousel.surface().offset_percent, -200);
        assert_eq!(carousel.surface().active_dot(), Some(2));
    }

    #[test]
    fn test_single_image_stays_put() {
        let mut carousel = mount(1, 1000);
        carousel.advance();
        assert_eq!(carousel.current_index(), 0);
        carousel.retreat();
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_go_to_marks_only_that_dot() {
        let mut carousel = mount(5, 1000);
        carousel.go_to(3).unwrap();
        assert_eq!(carousel.current_index(), 3);
        assert_eq!(carousel.surface().dots, vec![false, false, false, true, false]);
        assert_eq!(carousel.surface().offset_percent, -300);
    }

    #[test]
    fn test_go_to_out_of_range_is_rejected() {
        let mut carousel = mount(3, 1000);
        carousel.go_to(1).unwrap();
        let schedules = carousel.timer().schedule_count();

        let err = carousel.go_to(3).unwrap_err();
        assert_eq!(err, LeonError::IndexOutOfRange { index: 3, len: 3 });
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.surface().offset_percent, -100);
        assert_eq!(carousel.timer().schedule_count(), schedules);
    }

    #[test]
    fn test_navigation_restarts_cadence() {
        let mut carousel = mount(4, 1000);
        carousel.elapse(Duration::from_millis(800));
        carousel.advance();
        // 800ms after the manual advance is still inside the fresh interval
        carousel.elapse(Duration::from_millis(800));
        assert_eq!(carousel.current_index(), 1);
        carousel.elapse(Duration::from_millis(200));
        assert_eq!(carousel.current_index(), 2);
    }

    // ============================================================================
    // Autoplay
    // ============================================================================

    #[test]
    fn test_autoplay_advances_each_delay() {
        let mut carousel = mount(3, 1000);
        carousel.elapse(Duration::from_millis(1000));
        assert_eq!(carousel.current_index(), 1);
        carousel.elapse(Duration::from_millis(2000));
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_autoplay_tick_keeps_single_schedule() {
        let mut carousel = mount(3, 1000);
        carousel.elapse(Duration::from_millis(5000));
        assert_eq!(carousel.timer().schedule_count(), 1);
        assert_eq!(carousel.timer().live_count(), 1);
    }

    #[test]
    fn test_stop_freezes_slide() {
        let mut carousel = mount(3, 1000);
        carousel.stop();
        carousel.elapse(Duration::from_millis(3500));
        assert_eq!(carousel.current_index(), 0);
        assert!(!carousel.is_autoplaying());
        assert_eq!(carousel.timer().live_count(), 0);
    }

    #[test]
    fn test_pause_keeps_timer_but_ignores_firings() {
        let mut carousel = mount(3, 1000);
        carousel.pause();
        carousel.elapse(Duration::from_millis(3000));
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.timer().live_count(), 1);
    }

    #[test]
    fn test_resume_waits_full_interval() {
        let mut carousel = mount(3, 1000);
        carousel.pause();
        carousel.elapse(Duration::from_millis(900));
        carousel.resume();
        carousel.elapse(Duration::from_millis(900));
        assert_eq!(carousel.current_index(), 0);
        carousel.elapse(Duration::from_millis(100));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_navigation_re_enables_autoplay() {
        let mut carousel = mount(3, 1000);
        carousel.stop();
        carousel.advance();
        assert!(carousel.is_autoplaying());
        assert_eq!(carousel.timer().live_count(), 1);
    }

    // ============================================================================
    // Teardown
    // ============================================================================

    #[test]
    fn test_teardown_cancels_and_blocks_restart() {
        let mut carousel = mount(3, 1000);
        carousel.teardown();
        assert!(carousel.is_torn_down());
        assert_eq!(carousel.timer().live_count(), 0);

        carousel.resume();
        carousel.advance();
        assert!(!carousel.is_autoplaying());
        assert_eq!(carousel.timer().live_count(), 0);
        carousel.elapse(Duration::from_millis(5000));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_snapshot() {
        let mut carousel = mount(4, 1000);
        carousel.go_to(2).unwrap();
        carousel.pause();
        assert_eq!(
            carousel.snapshot(),
            CarouselSnapshot {
                current: 2,
                len: 4,
                autoplaying: false,
                timer_live: true,
            }
        );
    }
}
