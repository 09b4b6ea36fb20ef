//! Typed CSS values and their canonical encodings.
//!
//! Every value implements [`std::fmt::Display`]; the rendered string is the only form the
//! value ever takes in a style object.

mod angle;
mod color;
mod gradient;
mod grid;
mod length;
mod named_colors;
mod shadow;
mod time;
mod timing;
mod transform;

pub use angle::*;
pub use color::*;
pub use gradient::*;
pub use grid::*;
pub use length::*;
pub use named_colors::*;
pub use shadow::*;
pub use time::*;
pub use timing::*;
pub use transform::*;
