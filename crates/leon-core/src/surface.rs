// crates/leon-core/src/surface.rs
// Rendering surface contract for carousels, plus an in-memory implementation

/// Everything the carousel state machine needs from the thing it draws into.
///
/// A DOM adapter implements this over a container element; tests use
/// [`MemorySurface`]. Implementations treat missing sub-elements as absent
/// optional features: the corresponding call is a no-op.
pub trait SlideSurface {
    /// Replace the slide track contents with one slide per image, in order.
    fn populate_slides(&mut self, images: &[String]);

    /// Create `count` dot indicators with the first one active.
    /// Surfaces without a dot host ignore this.
    fn populate_dots(&mut self, count: usize);

    /// Shift the slide track horizontally by `percent` of one slide width.
    fn set_track_offset(&mut self, percent: i64);

    /// Mark the dot at `active` and clear every other dot.
    fn highlight_dot(&mut self, active: usize);
}

/// Track offset for a slide index: each slide is one container width.
pub fn track_offset_percent(index: usize) -> i64 {
    -(index as i64) * 100
}

/// Surface that keeps its rendered state in plain fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySurface {
    pub slides: Vec<String>,
    pub dots: Vec<bool>,
    pub offset_percent: i64,
    has_dot_host: bool,
}

impl MemorySurface {
    /// A surface without dot indicators (service and tour carousels)
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface with a dot host (the hero carousel)
    pub fn with_dots() -> Self {
        Self {
            has_dot_host: true,
            ..Self::default()
        }
    }

    /// Index of the single active dot, if exactly one is active
    pub fn active_dot(&self) -> Option<usize> {
        let mut active = self.dots.iter().enumerate().filter(|(_, on)| **on);
        match (active.next(), active.next()) {
            (Some((i, _)), None) => Some(i),
            _ => None,
        }
    }
}

impl SlideSurface for MemorySurface {
    fn populate_slides(&mut self, images: &[String]) {
        self.slides = images.to_vec();
    }

    fn populate_dots(&mut self, count: usize) {
        if !self.has_dot_host {
            return;
        }
        self.dots = (0..count).map(|i| i == 0).collect();
    }

    fn set_track_offset(&mut self, percent: i64) {
        self.offset_percent = percent;
    }

    fn highlight_dot(&mut self, active: usize) {
        for (i, dot) in self.dots.iter_mut().enumerate() {
            *dot = i == active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_offset_percent() {
        assert_eq!(track_offset_percent(0), 0);
        assert_eq!(track_offset_percent(1), -100);
        assert_eq!(track_offset_percent(4), -400);
    }

    #[test]
    fn test_memory_surface_without_dot_host_ignores_dots() {
        let mut surface = MemorySurface::new();
        surface.populate_dots(3);
        assert!(surface.dots.is_empty());
        surface.highlight_dot(1);
        assert_eq!(surface.active_dot(), None);
    }

    #[test]
    fn test_memory_surface_first_dot_active() {
        let mut surface = MemorySurface::with_dots();
        surface.populate_dots(3);
        assert_eq!(surface.dots, vec![true, false, false]);
        assert_eq!(surface.active_dot(), Some(0));
    }

    #[test]
    fn test_highlight_out_of_range_clears_all() {
        let mut surface = MemorySurface::with_dots();
        surface.populate_dots(2);
        surface.highlight_dot(5);
        assert_eq!(surface.dots, vec![false, false]);
    }
}
