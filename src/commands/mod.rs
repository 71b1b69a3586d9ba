//! Command implementations for logbook

pub mod config;
pub mod dispatch;
pub mod finalize;
pub mod log;
pub mod review;
