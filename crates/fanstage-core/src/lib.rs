//! Core domain models for FAN:STAGE
//!
//! This crate contains:
//! - Domain models (Track, Letter, PlatformId, PlatformHistoryEntry)
//! - Query types for the inbox (SortOption, FilterCriteria)
//! - Lenient date parsing shared by sorting and filtering
//! - JSON loading helpers for letter collections and platform history

pub mod date;
pub mod error;
pub mod letter;
pub mod load;
pub mod platform;
pub mod query;

pub use error::{CoreError, Result};
pub use letter::{Letter, Track};
pub use load::{load_history, load_letter, load_letters};
pub use platform::{PlatformHistoryEntry, PlatformId};
pub use query::{FilterCriteria, SortOption};
