//! Signals that each hold an opinion about which platform to open

pub mod history;
pub mod tracks;
