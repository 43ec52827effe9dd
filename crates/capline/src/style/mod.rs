//! The computed style result handed to the rendering layer.

mod result;

pub use result::{ResponsiveStyle, StyleEntry, StyleResult};
