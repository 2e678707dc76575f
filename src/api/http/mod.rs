// src/api/http/mod.rs

pub mod comments;
pub mod handlers;
pub mod router;
pub mod wheel;
