// src/core/mod.rs

pub mod engine;
pub mod prime;
pub mod scorer;
pub mod table;
pub mod types;
