// crates/leon-core/src/registry.rs
// Named carousel instances for external control

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::carousel::{Carousel, CarouselSnapshot};
use crate::error::Result;
use crate::surface::SlideSurface;
use crate::timer::Timer;

/// String identifier of a registered carousel ("hero", "service-0", "tour-2")
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CarouselId(String);

impl CarouselId {
    pub fn hero() -> Self {
        Self("hero".to_string())
    }

    pub fn service(index: usize) -> Self {
        Self(format!("service-{index}"))
    }

    pub fn tour(index: usize) -> Self {
        Self(format!("tour-{index}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CarouselId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CarouselId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The operations the registry forwards to a registered carousel.
///
/// Implemented directly by [`Carousel`], and by frontend wrappers that also
/// own event listeners.
pub trait CarouselHandle {
    fn go_to(&mut self, index: usize) -> Result<()>;
    fn stop(&mut self);
    fn resume(&mut self);
    fn teardown(&mut self);
    fn snapshot(&self) -> CarouselSnapshot;
}

impl<S: SlideSurface, T: Timer> CarouselHandle for Carousel<S, T> {
    fn go_to(&mut self, index: usize) -> Result<()> {
        Carousel::go_to(self, index)
    }

    fn stop(&mut self) {
        Carousel::stop(self);
    }

    fn resume(&mut self) {
        Carousel::resume(self);
    }

    fn teardown(&mut self) {
        Carousel::teardown(self);
    }

    fn snapshot(&self) -> CarouselSnapshot {
        Carousel::snapshot(self)
    }
}

/// Registry entry as reported by [`CarouselRegistry::snapshot`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryEntry {
    pub id: CarouselId,
    #[serde(flatten)]
    pub state: CarouselSnapshot,
}

/// Mapping from identifiers to carousel handles, owned by the page bootstrap.
#[derive(Debug)]
pub struct CarouselRegistry<H> {
    entries: BTreeMap<CarouselId, H>,
}

impl<H> Default for CarouselRegistry<H> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<H: CarouselHandle> CarouselRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handle` under `id`. A previous entry with the same id is
    /// torn down first.
    pub fn insert(&mut self, id: CarouselId, handle: H) {
        if let Some(mut previous) = self.entries.insert(id.clone(), handle) {
            log::warn!("Replacing carousel '{}'", id);
            previous.teardown();
        }
    }

    pub fn get(&self, id: &CarouselId) -> Option<&H> {
        self.entries.get(id)
    }

    pub fn get_mut(&mut self, id: &CarouselId) -> Option<&mut H> {
        self.entries.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &CarouselId> {
        self.entries.keys()
    }

    /// Show slide `index` on the named carousel. Returns `Ok(false)` when no
    /// carousel is registered under `id`.
    pub fn set_slide(&mut self, id: &CarouselId, index: usize) -> Result<bool> {
        match self.entries.get_mut(id) {
            Some(handle) => {
                handle.go_to(index)?;
                Ok(true)
            }
            None => {
                log::debug!("set_slide: no carousel named '{}'", id);
                Ok(false)
            }
        }
    }

    /// Stop every carousel (`paused = true`) or restart all of them.
    pub fn set_autoplay_for_all(&mut self, paused: bool) {
        for handle in self.entries.values_mut() {
            if paused {
                handle.stop();
            } else {
                handle.resume();
            }
        }
        log::info!(
            "Autoplay {} for {} carousels",
            if paused { "stopped" } else { "resumed" },
            self.entries.len()
        );
    }

    /// Tear down and drop the named carousel.
    pub fn remove(&mut self, id: &CarouselId) -> Option<H> {
        let mut handle = self.entries.remove(id)?;
        handle.teardown();
        Some(handle)
    }

    pub fn teardown_all(&mut self) {
        for (_, mut handle) in std::mem::take(&mut self.entries) {
            handle.teardown();
        }
    }

    /// Current state of every carousel, ordered by id
    pub fn snapshot(&self) -> Vec<RegistryEntry> {
        self.entries
            .iter()
            .map(|(id, handle)| RegistryEntry {
                id: id.clone(),
                state: handle.snapshot(),
            })
            .collect()
    }
}
