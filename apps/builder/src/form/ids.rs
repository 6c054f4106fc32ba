//! Fresh entry ids.

use uuid::Uuid;

use crate::models::EntryId;

/// Source of entry ids. Every id handed out must be new for the lifetime of
/// the document, so a removed entry's id never comes back.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> EntryId;
}

/// Production id source: random UUIDv4 strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&self) -> EntryId {
        EntryId(Uuid::new_v4().to_string())
    }
}

/// Deterministic ids (`prefix-1`, `prefix-2`, ...) for tests.
#[cfg(test)]
pub struct SequentialIds {
    prefix: String,
    next: std::sync::atomic::AtomicU64,
}

#[cfg(test)]
impl SequentialIds {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            next: std::sync::atomic::AtomicU64::new(1),
        }
    }
}

#[cfg(test)]
impl IdSource for SequentialIds {
    fn next_id(&self) -> EntryId {
        let n = self.next.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        EntryId(format!("{}-{}", self.prefix, n))
    }
}
