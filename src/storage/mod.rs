//! Storage modules: persistence backends, history, config

pub mod config;
pub mod history;
pub mod persistence;
