//! Query Handlers

mod chapter_handlers;

pub use chapter_handlers::*;
