pub mod cli;
pub mod engine;
pub mod error;
pub mod read;
pub mod write;
