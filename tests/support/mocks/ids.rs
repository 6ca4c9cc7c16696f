// tests/support/mocks/ids.rs
use quill_core::{application::ports::id::IdGenerator, domain::identifier::Identifier};
use std::sync::atomic::{AtomicU64, Ordering};

/// Predictable v4-shaped ids: `00000000-0000-4000-8000-000000000001`, `...02`, ...
#[derive(Default)]
pub struct CountingIdGenerator {
    next: AtomicU64,
}

impl CountingIdGenerator {
    pub fn id(n: u64) -> Identifier {
        Identifier::new(format!("00000000-0000-4000-8000-{n:012x}")).expect("valid counting id")
    }
}

impl IdGenerator for CountingIdGenerator {
    fn next_id(&self) -> Identifier {
        Self::id(self.next.fetch_add(1, Ordering::SeqCst) + 1)
    }
}
