pub mod config;
pub mod inbox;
pub mod names;
pub mod recommend;
