// src/lib.rs
pub mod api;
pub mod banner;
pub mod config;
pub mod errors;
pub mod extract;
pub mod models;
pub mod prompts;
pub mod providers;
pub mod runner;
pub mod storage;
