// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod persistence;
pub mod session;

pub use crate::config::ExportConfig;
pub use crate::core::engine::GematriaEngine;
pub use crate::core::prime::is_prime;
pub use crate::core::scorer::score;
pub use crate::core::table::value_of;
pub use crate::core::types::{PrimeLabel, ScoreRecord};
pub use crate::error::ExportError;
pub use crate::session::SessionLog;
