// src/application/ports/mod.rs
pub mod id;
pub mod time;
