//! Fresh node-id generation

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use uuid::Uuid;

use crate::domain::node::NodeId;

/// Source of fresh node ids.
///
/// Implementations must return ids that are unique within the process lifetime
/// with overwhelming probability.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> NodeId;
}

/// Default generator: `node-{unix_millis}-{counter}-{random}`.
///
/// The counter alone separates ids created within the same millisecond;
/// the random suffix separates ids across processes.
#[derive(Debug, Default)]
pub struct TimestampIdGenerator {
    counter: AtomicU64,
}

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&self) -> NodeId {
        let millis = Utc::now().timestamp_millis();
        let seq = self.counter.fetch_add(1, Ordering::Relaxed);
        let random = Uuid::new_v4().simple().to_string();
        NodeId::new(format!("node-{}-{}-{}", millis, seq, &random[..8]))
    }
}

/// Deterministic generator: `{prefix}-1`, `{prefix}-2`, ...
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("node")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> NodeId {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        NodeId::new(format!("{}-{}", self.prefix, n))
    }
}
