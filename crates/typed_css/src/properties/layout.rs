use crate::keywords::{
  BoxSizing, Clear, DisplayType, Float, Overflow, Position, VerticalAlign, Visibility,
};
use crate::utils::num_to_string;
use crate::values::Length;
use crate::Rule;

pub fn display(value: DisplayType) -> Rule {
  Rule::declaration("display", value)
}

pub fn position(value: Position) -> Rule {
  Rule::declaration("position", value)
}

pub fn top(value: Length) -> Rule {
  Rule::declaration("top", value)
}

pub fn right(value: Length) -> Rule {
  Rule::declaration("right", value)
}

pub fn bottom(value: Length) -> Rule {
  Rule::declaration("bottom", value)
}

pub fn left(value: Length) -> Rule {
  Rule::declaration("left", value)
}

pub fn width(value: Length) -> Rule {
  Rule::declaration("width", value)
}

pub fn height(value: Length) -> Rule {
  Rule::declaration("height", value)
}

pub fn min_width(value: Length) -> Rule {
  Rule::declaration("minWidth", value)
}

pub fn max_width(value: Length) -> Rule {
  Rule::declaration("maxWidth", value)
}

pub fn min_height(value: Length) -> Rule {
  Rule::declaration("minHeight", value)
}

pub fn max_height(value: Length) -> Rule {
  Rule::declaration("maxHeight", value)
}

pub fn margin(all: Length) -> Rule {
  Rule::declaration("margin", all)
}

pub fn margin2(vertical: Length, horizontal: Length) -> Rule {
  Rule::declaration("margin", format!("{vertical} {horizontal}"))
}

pub fn margin3(top: Length, horizontal: Length, bottom: Length) -> Rule {
  Rule::declaration("margin", format!("{top} {horizontal} {bottom}"))
}

pub fn margin4(top: Length, right: Length, bottom: Length, left: Length) -> Rule {
  Rule::declaration("margin", format!("{top} {right} {bottom} {left}"))
}

pub fn margin_top(value: Length) -> Rule {
  Rule::declaration("marginTop", value)
}

pub fn margin_right(value: Length) -> Rule {
  Rule::declaration("marginRight", value)
}

pub fn margin_bottom(value: Length) -> Rule {
  Rule::declaration("marginBottom", value)
}

pub fn margin_left(value: Length) -> Rule {
  Rule::declaration("marginLeft", value)
}

pub fn padding(all: Length) -> Rule {
  Rule::declaration("padding", all)
}

pub fn padding2(vertical: Length, horizontal: Length) -> Rule {
  Rule::declaration("padding", format!("{vertical} {horizontal}"))
}

pub fn padding3(top: Length, horizontal: Length, bottom: Length) -> Rule {
  Rule::declaration("padding", format!("{top} {horizontal} {bottom}"))
}

pub fn padding4(top: Length, right: Length, bottom: Length, left: Length) -> Rule {
  Rule::declaration("padding", format!("{top} {right} {bottom} {left}"))
}

pub fn padding_top(value: Length) -> Rule {
  Rule::declaration("paddingTop", value)
}

pub fn padding_right(value: Length) -> Rule {
  Rule::declaration("paddingRight", value)
}

pub fn padding_bottom(value: Length) -> Rule {
  Rule::declaration("paddingBottom", value)
}

pub fn padding_left(value: Length) -> Rule {
  Rule::declaration("paddingLeft", value)
}

pub fn box_sizing(value: BoxSizing) -> Rule {
  Rule::declaration("boxSizing", value)
}

pub fn overflow(value: Overflow) -> Rule {
  Rule::declaration("overflow", value)
}

pub fn overflow_x(value: Overflow) -> Rule {
  Rule::declaration("overflowX", value)
}

pub fn overflow_y(value: Overflow) -> Rule {
  Rule::declaration("overflowY", value)
}

pub fn z_index(value: i32) -> Rule {
  Rule::declaration("zIndex", value)
}

pub fn float(value: Float) -> Rule {
  Rule::declaration("float", value)
}

pub fn clear(value: Clear) -> Rule {
  Rule::declaration("clear", value)
}

pub fn visibility(value: Visibility) -> Rule {
  Rule::declaration("visibility", value)
}

pub fn opacity(value: f64) -> Rule {
  Rule::declaration("opacity", num_to_string(value))
}

pub fn vertical_align(value: VerticalAlign) -> Rule {
  Rule::declaration("verticalAlign", value)
}
