pub mod config;
pub mod directory;
pub mod handler;
pub mod reaction;
