pub mod chooser;
pub mod driver;
pub mod executor;
pub mod registry;
pub mod resolver;
