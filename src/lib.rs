//! Connecto — icebreaker prompts and conversation tips.

pub mod app;
pub mod channels;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod navigation;
pub mod prompt;
pub mod render;
pub mod session;
pub mod situation;
