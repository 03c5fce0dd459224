//! Configuration loading

pub mod loader;

pub use loader::load_from_env;
