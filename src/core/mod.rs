pub mod config;
pub mod decorators;
pub mod dictionary;
pub mod engine;
pub mod filter;
pub mod morphology;
pub mod providers;
