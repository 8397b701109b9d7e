pub mod config;
pub mod error;
pub mod experiment;
pub mod providers;
