//! Where snapshots live between page loads.
//!
//! Saving never fails from the caller's point of view: the primary store is
//! tried first, then a more ephemeral fallback, and if both refuse the save is
//! dropped with a warning. The in-memory scene stays the source of truth.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use instant::Instant;

use crate::codec::{decode, encode};
use crate::constants::AUTOSAVE_INTERVAL;
use crate::error::PersistError;
use crate::scene::Scene;

/// A size-limited key/value slot holding one snapshot.
pub trait SnapshotStore {
    fn name(&self) -> &str;
    fn read(&self) -> Result<Option<String>, PersistError>;
    fn write(&mut self, data: &str) -> Result<(), PersistError>;
    fn clear(&mut self) -> Result<(), PersistError>;
}

#[derive(Debug, Default)]
struct MemorySlot {
    data: Option<String>,
    quota: Option<usize>,
    available: bool,
}

/// In-process store. Clones share the same slot, so a test can keep a handle
/// after boxing one into [`Persistence`].
#[derive(Clone, Debug)]
pub struct MemoryStore {
    name: String,
    slot: Rc<RefCell<MemorySlot>>,
}

impl MemoryStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slot: Rc::new(RefCell::new(MemorySlot {
                available: true,
                ..MemorySlot::default()
            })),
        }
    }

    /// Reject writes larger than `bytes`.
    pub fn with_quota(self, bytes: usize) -> Self {
        self.slot.borrow_mut().quota = Some(bytes);
        self
    }

    pub fn set_available(&self, available: bool) {
        self.slot.borrow_mut().available = available;
    }

    pub fn contents(&self) -> Option<String> {
        self.slot.borrow().data.clone()
    }

    pub fn put(&self, data: impl Into<String>) {
        self.slot.borrow_mut().data = Some(data.into());
    }

    fn check_available(&self) -> Result<(), PersistError> {
        if self.slot.borrow().available {
            Ok(())
        } else {
            Err(PersistError::Unavailable {
                store: self.name.clone(),
            })
        }
    }
}

impl SnapshotStore for MemoryStore {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> Result<Option<String>, PersistError> {
        self.check_available()?;
        Ok(self.contents())
    }

    fn write(&mut self, data: &str) -> Result<(), PersistError> {
        self.check_available()?;
        let mut slot = self.slot.borrow_mut();
        if let Some(limit) = slot.quota {
            if data.len() > limit {
                return Err(PersistError::QuotaExceeded {
                    store: self.name.clone(),
                    needed: data.len(),
                    limit,
                });
            }
        }
        slot.data = Some(data.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), PersistError> {
        self.check_available()?;
        self.slot.borrow_mut().data = None;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Primary,
    Fallback,
    Dropped,
}

pub struct Persistence {
    primary: Box<dyn SnapshotStore>,
    fallback: Box<dyn SnapshotStore>,
}

impl Persistence {
    pub fn new(primary: Box<dyn SnapshotStore>, fallback: Box<dyn SnapshotStore>) -> Self {
        Self { primary, fallback }
    }

    /// Write the scene out. Never fails; see [`SaveOutcome`].
    pub fn save(&mut self, scene: &mut Scene) -> SaveOutcome {
        let json = match encode(scene) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("[persist] encode failed, save dropped: {}", e);
                return SaveOutcome::Dropped;
            }
        };
        let outcome = match self.primary.write(&json) {
            Ok(()) => SaveOutcome::Primary,
            Err(e) => {
                log::warn!("[persist] {}; trying {}", e, self.fallback.name());
                match self.fallback.write(&json) {
                    Ok(()) => {
                        // A stale primary copy would shadow the fresher fallback on load.
                        if let Err(e) = self.primary.clear() {
                            log::debug!("[persist] could not clear stale primary: {}", e);
                        }
                        SaveOutcome::Fallback
                    }
                    Err(e) => {
                        log::warn!("[persist] {}; save dropped", e);
                        SaveOutcome::Dropped
                    }
                }
            }
        };
        if outcome != SaveOutcome::Dropped {
            scene.mark_saved();
        }
        outcome
    }

    /// Restore the newest readable snapshot into `scene`. Returns whether a
    /// snapshot was applied; on `false` the scene is left as it was.
    pub fn load_into(&self, scene: &mut Scene) -> bool {
        for store in [&self.primary, &self.fallback] {
            let json = match store.read() {
                Ok(Some(json)) => json,
                Ok(None) => continue,
                Err(e) => {
                    log::warn!("[persist] read failed: {}", e);
                    continue;
                }
            };
            match decode(&json) {
                Ok(snapshot) => {
                    log::info!(
                        "[persist] restored {} strokes, {} drips from {} (skipped {}, saved at {:?}, now {:?})",
                        snapshot.strokes.len(),
                        snapshot.drips.len(),
                        store.name(),
                        snapshot.skipped,
                        snapshot.saved,
                        scene.viewport()
                    );
                    scene.restore(snapshot.strokes, snapshot.drips);
                    return true;
                }
                Err(e) => log::warn!("[persist] {} snapshot unreadable: {}", store.name(), e),
            }
        }
        false
    }

    /// Remove the snapshot from every store.
    pub fn clear(&mut self) {
        for store in [&mut self.primary, &mut self.fallback] {
            if let Err(e) = store.clear() {
                log::warn!("[persist] clear failed: {}", e);
            }
        }
    }

    /// Wipe the wall and everything saved of it.
    pub fn reset(&mut self, scene: &mut Scene) {
        scene.reset();
        self.clear();
        scene.mark_saved();
    }
}

/// Fixed-interval save trigger driven from the frame loop.
#[derive(Clone, Debug)]
pub struct AutosaveClock {
    interval: Duration,
    last: Option<Instant>,
}

impl Default for AutosaveClock {
    fn default() -> Self {
        Self::new(AUTOSAVE_INTERVAL)
    }
}

impl AutosaveClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// True once per elapsed interval. The first call only arms the clock.
    pub fn due(&mut self, now: Instant) -> bool {
        match self.last {
            None => {
                self.last = Some(now);
                false
            }
            Some(last) if now >= last && now - last >= self.interval => {
                self.last = Some(now);
                true
            }
            Some(_) => false,
        }
    }
}
