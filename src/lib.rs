pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod report;
pub mod security;
pub mod template;
