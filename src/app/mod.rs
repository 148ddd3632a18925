pub mod commands;
pub mod render;

pub use commands::{answer, Query, QueryEngine, Settings};
pub use render::OutputFormat;
