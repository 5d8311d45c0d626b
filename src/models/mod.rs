// Module exports for models

pub mod config;
pub mod holiday;
pub mod mode;
