//! One constructor per CSS property, each returning a [`crate::Rule`].
//!
//! Keys are camelCase except for a few properties whose kebab spelling consumers depend on:
//! `float`, `clear`, `user-select`, `pointer-events` and `background-origin`. See
//! [`crate::KeyCase`] to normalize them.

mod animation;
mod background;
mod border;
mod flex;
mod grid;
mod layout;
mod misc;
mod shadow;
mod text;
mod transform;
mod transition;

pub use animation::*;
pub use background::*;
pub use border::*;
pub use flex::*;
pub use grid::*;
pub use layout::*;
pub use misc::*;
pub use shadow::*;
pub use text::*;
pub use transform::*;
pub use transition::*;
