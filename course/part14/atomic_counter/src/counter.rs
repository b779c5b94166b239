use std::sync::atomic::{AtomicU32, Ordering::SeqCst};

#[derive(Debug, Default)]
pub struct Counter(AtomicU32);

impl Counter {
    pub fn new(start: u32) -> Self {
        Self(AtomicU32::new(start))
    }

    /// Atomically adds `step` and returns the value after the add.
    pub fn increment(&self, step: u32) -> u32 {
        self.0.fetch_add(step, SeqCst).wrapping_add(step)
    }

    pub fn get(&self) -> u32 {
        self.0.load(SeqCst)
    }

    pub fn into_inner(self) -> u32 {
        self.0.into_inner()
    }
}
