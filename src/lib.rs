#![forbid(unsafe_code)]

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
