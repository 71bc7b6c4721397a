// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Clone)]
pub struct FixedClock;

impl knowledgebase::application::ports::time::Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        crate::support::mocks::time::fixed_now()
    }
}

/// Produces `article-1`, `article-2`, ...
#[derive(Default)]
pub struct SequentialIds {
    counter: AtomicU64,
}

impl knowledgebase::application::ports::id::IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("article-{n}")
    }
}

/// Always hands out a blank id, which the domain refuses.
pub struct BlankIds;

impl knowledgebase::application::ports::id::IdGenerator for BlankIds {
    fn next_id(&self) -> String {
        "  ".into()
    }
}
