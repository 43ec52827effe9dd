//! Per-breakpoint sizing configuration and the resolution engine.

mod config;
mod engine;
mod props;

pub use config::{SizingConfig, fill_forward_configs};
pub use engine::TextStyleEngine;
pub use props::TextProps;
