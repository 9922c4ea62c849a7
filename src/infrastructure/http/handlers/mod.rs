//! HTTP Handlers

mod chapter;

pub use chapter::*;
