// src/lib.rs

pub mod api;
pub mod comments;
pub mod config;
pub mod error;
pub mod generation;
pub mod llm;
pub mod menu;
pub mod state;
pub mod storage;
pub mod wheel;
pub mod widgets;

pub use error::{FunError, Result};
pub use state::AppState;
