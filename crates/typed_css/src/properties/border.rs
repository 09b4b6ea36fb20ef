use crate::keywords::{BorderCollapse, BorderStyle};
use crate::values::{Color, Length};
use crate::Rule;

fn shorthand(property: &str, width: Length, style: BorderStyle, color: Color) -> Rule {
  Rule::declaration(property, format!("{width} {style} {color}"))
}

/// `border: <width> <style> <color>`.
pub fn border(width: Length, style: BorderStyle, color: Color) -> Rule {
  shorthand("border", width, style, color)
}

pub fn border_top(width: Length, style: BorderStyle, color: Color) -> Rule {
  shorthand("borderTop", width, style, color)
}

pub fn border_right(width: Length, style: BorderStyle, color: Color) -> Rule {
  shorthand("borderRight", width, style, color)
}

pub fn border_bottom(width: Length, style: BorderStyle, color: Color) -> Rule {
  shorthand("borderBottom", width, style, color)
}

pub fn border_left(width: Length, style: BorderStyle, color: Color) -> Rule {
  shorthand("borderLeft", width, style, color)
}

pub fn border_width(value: Length) -> Rule {
  Rule::declaration("borderWidth", value)
}

pub fn border_style(value: BorderStyle) -> Rule {
  Rule::declaration("borderStyle", value)
}

pub fn border_color(value: Color) -> Rule {
  Rule::declaration("borderColor", value)
}

pub fn border_top_color(value: Color) -> Rule {
  Rule::declaration("borderTopColor", value)
}

pub fn border_bottom_color(value: Color) -> Rule {
  Rule::declaration("borderBottomColor", value)
}

pub fn border_top_width(value: Length) -> Rule {
  Rule::declaration("borderTopWidth", value)
}

pub fn border_bottom_width(value: Length) -> Rule {
  Rule::declaration("borderBottomWidth", value)
}

pub fn border_radius(value: Length) -> Rule {
  Rule::declaration("borderRadius", value)
}

pub fn border_top_left_radius(value: Length) -> Rule {
  Rule::declaration("borderTopLeftRadius", value)
}

pub fn border_top_right_radius(value: Length) -> Rule {
  Rule::declaration("borderTopRightRadius", value)
}

pub fn border_bottom_left_radius(value: Length) -> Rule {
  Rule::declaration("borderBottomLeftRadius", value)
}

pub fn border_bottom_right_radius(value: Length) -> Rule {
  Rule::declaration("borderBottomRightRadius", value)
}

pub fn border_collapse(value: BorderCollapse) -> Rule {
  Rule::declaration("borderCollapse", value)
}

/// `outline: <width> <style> <color>`.
pub fn outline(width: Length, style: BorderStyle, color: Color) -> Rule {
  shorthand("outline", width, style, color)
}

pub fn outline_width(value: Length) -> Rule {
  Rule::declaration("outlineWidth", value)
}

pub fn outline_style(value: BorderStyle) -> Rule {
  Rule::declaration("outlineStyle", value)
}

pub fn outline_color(value: Color) -> Rule {
  Rule::declaration("outlineColor", value)
}

pub fn outline_offset(value: Length) -> Rule {
  Rule::declaration("outlineOffset", value)
}
