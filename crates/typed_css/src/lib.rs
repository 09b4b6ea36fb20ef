//! Typed CSS rules for CSS-in-JS runtimes.
//!
//! Values are built from typed constructors (`px(10)`, `rgb(255, 0, 0)`, ...), wrapped into
//! [`Rule`]s by one constructor per property, and flattened into an ordered
//! [`StyleObject`] ready to be serialized as a style object literal.
//!
//! ```
//! use typed_css::*;
//!
//! let style = flatten(&[
//!   display(DisplayType::Flex),
//!   padding2(px(4), px(8)),
//!   hover(vec![color(Color::from(NamedColor::Red))]),
//! ]);
//! assert_eq!(style.get_str("padding"), Some("4px 8px"));
//! ```

mod config;
mod error;
mod hash;
mod keyframes;
mod keywords;
mod properties;
mod rule;
mod selector;
mod style;
mod utils;
pub mod values;

pub use config::*;
pub use error::*;
pub use keyframes::*;
pub use keywords::*;
pub use properties::*;
pub use rule::*;
pub use selector::*;
pub use style::*;
pub use values::*;
