//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod path;
pub mod story;
pub mod template;

pub use path::*;
pub use story::*;
pub use template::*;
