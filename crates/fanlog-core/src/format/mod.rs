//! Typed arguments and message rendering

mod args;
mod render;

pub use args::FormatArg;
pub use render::{format_template, render, RenderFlags};
