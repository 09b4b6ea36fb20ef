//! The closed catalogue of CSS named colors.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;

use crate::CssError;

macro_rules! named_colors {
  ($($variant:ident => $name:literal, $hex:literal,)+) => {
    /// One of the CSS named colors. Each name resolves to a fixed hex literal.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub enum NamedColor {
      $($variant),+
    }

    impl NamedColor {
      pub const ALL: &'static [NamedColor] = &[$(NamedColor::$variant),+];

      /// The CSS name, e.g. `rebeccapurple`.
      pub fn name(&self) -> &'static str {
        match self {
          $(NamedColor::$variant => $name),+
        }
      }

      /// The literal this color encodes to, e.g. `#663399`.
      pub fn literal(&self) -> &'static str {
        match self {
          $(NamedColor::$variant => $hex),+
        }
      }
    }
  };
}

named_colors! {
  AliceBlue => "aliceblue", "#f0f8ff",
  AntiqueWhite => "antiquewhite", "#faebd7",
  Aqua => "aqua", "#00ffff",
  Aquamarine => "aquamarine", "#7fffd4",
  Azure => "azure", "#f0ffff",
  Beige => "beige", "#f5f5dc",
  Bisque => "bisque", "#ffe4c4",
  Black => "black", "#000000",
  BlanchedAlmond => "blanchedalmond", "#ffebcd",
  Blue => "blue", "#0000ff",
  BlueViolet => "blueviolet", "#8a2be2",
  Brown => "brown", "#a52a2a",
  BurlyWood => "burlywood", "#deb887",
  CadetBlue => "cadetblue", "#5f9ea0",
  Chartreuse => "chartreuse", "#7fff00",
  Chocolate => "chocolate", "#d2691e",
  Coral => "coral", "#ff7f50",
  CornflowerBlue => "cornflowerblue", "#6495ed",
  Cornsilk => "cornsilk", "#fff8dc",
  Crimson => "crimson", "#dc143c",
  Cyan => "cyan", "#00ffff",
  DarkBlue => "darkblue", "#00008b",
  DarkCyan => "darkcyan", "#008b8b",
  DarkGoldenrod => "darkgoldenrod", "#b8860b",
  DarkGray => "darkgray", "#a9a9a9",
  DarkGreen => "darkgreen", "#006400",
  DarkGrey => "darkgrey", "#a9a9a9",
  DarkKhaki => "darkkhaki", "#bdb76b",
  DarkMagenta => "darkmagenta", "#8b008b",
  DarkOliveGreen => "darkolivegreen", "#556b2f",
  DarkOrange => "darkorange", "#ff8c00",
  DarkOrchid => "darkorchid", "#9932cc",
  DarkRed => "darkred", "#8b0000",
  DarkSalmon => "darksalmon", "#e9967a",
  DarkSeaGreen => "darkseagreen", "#8fbc8f",
  DarkSlateBlue => "darkslateblue", "#483d8b",
  DarkSlateGray => "darkslategray", "#2f4f4f",
  DarkSlateGrey => "darkslategrey", "#2f4f4f",
  DarkTurquoise => "darkturquoise", "#00ced1",
  DarkViolet => "darkviolet", "#9400d3",
  DeepPink => "deeppink", "#ff1493",
  DeepSkyBlue => "deepskyblue", "#00bfff",
  DimGray => "dimgray", "#696969",
  DimGrey => "dimgrey", "#696969",
  DodgerBlue => "dodgerblue", "#1e90ff",
  FireBrick => "firebrick", "#b22222",
  FloralWhite => "floralwhite", "#fffaf0",
  ForestGreen => "forestgreen", "#228b22",
  Fuchsia => "fuchsia", "#ff00ff",
  Gainsboro => "gainsboro", "#dcdcdc",
  GhostWhite => "ghostwhite", "#f8f8ff",
  Gold => "gold", "#ffd700",
  Goldenrod => "goldenrod", "#daa520",
  Gray => "gray", "#808080",
  Green => "green", "#008000",
  GreenYellow => "greenyellow", "#adff2f",
  Grey => "grey", "#808080",
  Honeydew => "honeydew", "#f0fff0",
  HotPink => "hotpink", "#ff69b4",
  IndianRed => "indianred", "#cd5c5c",
  Indigo => "indigo", "#4b0082",
  Ivory => "ivory", "#fffff0",
  Khaki => "khaki", "#f0e68c",
  Lavender => "lavender", "#e6e6fa",
  LavenderBlush => "lavenderblush", "#fff0f5",
  LawnGreen => "lawngreen", "#7cfc00",
  LemonChiffon => "lemonchiffon", "#fffacd",
  LightBlue => "lightblue", "#add8e6",
  LightCoral => "lightcoral", "#f08080",
  LightCyan => "lightcyan", "#e0ffff",
  LightGoldenrodYellow => "lightgoldenrodyellow", "#fafad2",
  LightGray => "lightgray", "#d3d3d3",
  LightGreen => "lightgreen", "#90ee90",
  LightGrey => "lightgrey", "#d3d3d3",
  LightPink => "lightpink", "#ffb6c1",
  LightSalmon => "lightsalmon", "#ffa07a",
  LightSeaGreen => "lightseagreen", "#20b2aa",
  LightSkyBlue => "lightskyblue", "#87cefa",
  LightSlateGray => "lightslategray", "#778899",
  LightSlateGrey => "lightslategrey", "#778899",
  LightSteelBlue => "lightsteelblue", "#b0c4de",
  LightYellow => "lightyellow", "#ffffe0",
  Lime => "lime", "#00ff00",
  LimeGreen => "limegreen", "#32cd32",
  Linen => "linen", "#faf0e6",
  Magenta => "magenta", "#ff00ff",
  Maroon => "maroon", "#800000",
  MediumAquamarine => "mediumaquamarine", "#66cdaa",
  MediumBlue => "mediumblue", "#0000cd",
  MediumOrchid => "mediumorchid", "#ba55d3",
  MediumPurple => "mediumpurple", "#9370db",
  MediumSeaGreen => "mediumseagreen", "#3cb371",
  MediumSlateBlue => "mediumslateblue", "#7b68ee",
  MediumSpringGreen => "mediumspringgreen", "#00fa9a",
  MediumTurquoise => "mediumturquoise", "#48d1cc",
  MediumVioletRed => "mediumvioletred", "#c71585",
  MidnightBlue => "midnightblue", "#191970",
  MintCream => "mintcream", "#f5fffa",
  MistyRose => "mistyrose", "#ffe4e1",
  Moccasin => "moccasin", "#ffe4b5",
  NavajoWhite => "navajowhite", "#ffdead",
  Navy => "navy", "#000080",
  OldLace => "oldlace", "#fdf5e6",
  Olive => "olive", "#808000",
  OliveDrab => "olivedrab", "#6b8e23",
  Orange => "orange", "#ffa500",
  OrangeRed => "orangered", "#ff4500",
  Orchid => "orchid", "#da70d6",
  PaleGoldenrod => "palegoldenrod", "#eee8aa",
  PaleGreen => "palegreen", "#98fb98",
  PaleTurquoise => "paleturquoise", "#afeeee",
  PaleVioletRed => "palevioletred", "#db7093",
  PapayaWhip => "papayawhip", "#ffefd5",
  PeachPuff => "peachpuff", "#ffdab9",
  Peru => "peru", "#cd853f",
  Pink => "pink", "#ffc0cb",
  Plum => "plum", "#dda0dd",
  PowderBlue => "powderblue", "#b0e0e6",
  Purple => "purple", "#800080",
  RebeccaPurple => "rebeccapurple", "#663399",
  Red => "red", "#ff0000",
  RosyBrown => "rosybrown", "#bc8f8f",
  RoyalBlue => "royalblue", "#4169e1",
  SaddleBrown => "saddlebrown", "#8b4513",
  Salmon => "salmon", "#fa8072",
  SandyBrown => "sandybrown", "#f4a460",
  SeaGreen => "seagreen", "#2e8b57",
  SeaShell => "seashell", "#fff5ee",
  Sienna => "sienna", "#a0522d",
  Silver => "silver", "#c0c0c0",
  SkyBlue => "skyblue", "#87ceeb",
  SlateBlue => "slateblue", "#6a5acd",
  SlateGray => "slategray", "#708090",
  SlateGrey => "slategrey", "#708090",
  Snow => "snow", "#fffafa",
  SpringGreen => "springgreen", "#00ff7f",
  SteelBlue => "steelblue", "#4682b4",
  Tan => "tan", "#d2b48c",
  Teal => "teal", "#008080",
  Thistle => "thistle", "#d8bfd8",
  Tomato => "tomato", "#ff6347",
  Turquoise => "turquoise", "#40e0d0",
  Violet => "violet", "#ee82ee",
  Wheat => "wheat", "#f5deb3",
  White => "white", "#ffffff",
  WhiteSmoke => "whitesmoke", "#f5f5f5",
  Yellow => "yellow", "#ffff00",
  YellowGreen => "yellowgreen", "#9acd32",
}

lazy_static! {
  static ref NAMED_COLORS_BY_NAME: HashMap<&'static str, NamedColor> = NamedColor::ALL
    .iter()
    .map(|color| (color.name(), *color))
    .collect();
}

impl fmt::Display for NamedColor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.literal())
  }
}

impl FromStr for NamedColor {
  type Err = CssError;

  /// Looks up a color by its CSS name, ignoring ASCII case.
  fn from_str(name: &str) -> Result<Self, Self::Err> {
    NAMED_COLORS_BY_NAME
      .get(name.to_ascii_lowercase().as_str())
      .copied()
      .ok_or_else(|| CssError::UnknownNamedColor(name.to_string()))
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn test_catalogue_is_complete() {
    assert_eq!(NamedColor::ALL.len(), 148);
    for color in NamedColor::ALL {
      let literal = color.literal();
      assert_eq!(literal.len(), 7, "{} has a malformed literal", color.name());
      assert!(literal.starts_with('#'));
      assert_eq!(color.name().parse::<NamedColor>().unwrap(), *color);
    }
  }

  #[test]
  fn test_lookup() {
    assert_eq!("RebeccaPurple".parse::<NamedColor>().unwrap(), NamedColor::RebeccaPurple);
    assert_eq!(NamedColor::Red.to_string(), "#ff0000");
    assert_eq!(NamedColor::Gray.literal(), NamedColor::Grey.literal());
  }

  #[test]
  fn test_unknown_color_is_an_error() {
    let err = "blurple".parse::<NamedColor>().unwrap_err();
    assert!(matches!(err, CssError::UnknownNamedColor(ref name) if name == "blurple"));
  }
}
