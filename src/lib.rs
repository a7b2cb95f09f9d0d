pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod interactive;
pub mod notify;
pub mod render;
pub mod search;
