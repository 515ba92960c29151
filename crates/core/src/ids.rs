use serde::{Deserialize, Serialize};

/// Issues every identifier used by the store.
///
/// One allocator per venue keeps ids unique across entity kinds; constructing
/// it from a known starting value makes ids deterministic in tests. The
/// high-water mark is persisted with snapshots so reloaded stores never
/// re-issue an id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(next: u64) -> Self {
        IdAllocator { next }
    }

    pub fn issue(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Advance past an id that arrived from outside, e.g. a loaded snapshot.
    pub fn reserve_through(&mut self, id: u64) {
        if id >= self.next {
            self.next = id + 1;
        }
    }

    pub fn next_id(&self) -> u64 {
        self.next
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
