// src/application/ports/id.rs

/// Source of fresh, unique article identifiers.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}
