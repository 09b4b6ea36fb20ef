//! Closed keyword sets for properties that only accept identifiers.
//!
//! Each enum encodes through an exhaustive match, so a keyword outside the set cannot be
//! constructed. String input goes through `FromStr` and fails with
//! [`CssError::UnknownKeyword`].

use crate::CssError;

macro_rules! css_keyword {
  ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
    $(#[$meta])*
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub enum $name {
      $($variant),+
    }

    impl $name {
      pub const ALL: &'static [$name] = &[$($name::$variant),+];

      pub fn as_str(&self) -> &'static str {
        match self {
          $($name::$variant => $text),+
        }
      }
    }

    impl std::fmt::Display for $name {
      fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
      }
    }

    impl std::str::FromStr for $name {
      type Err = CssError;

      fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
          $($text => Ok($name::$variant),)+
          _ => Err(CssError::UnknownKeyword {
            kind: stringify!($name),
            keyword: s.to_string(),
          }),
        }
      }
    }
  };
}

css_keyword!(
  /// Values of `display`.
  DisplayType {
    Block => "block",
    Inline => "inline",
    InlineBlock => "inline-block",
    Flex => "flex",
    InlineFlex => "inline-flex",
    Grid => "grid",
    InlineGrid => "inline-grid",
    Contents => "contents",
    ListItem => "list-item",
    Table => "table",
    TableRow => "table-row",
    TableCell => "table-cell",
    None => "none",
  }
);

css_keyword!(
  Position {
    Static => "static",
    Relative => "relative",
    Absolute => "absolute",
    Fixed => "fixed",
    Sticky => "sticky",
  }
);

css_keyword!(
  BorderStyle {
    None => "none",
    Hidden => "hidden",
    Dotted => "dotted",
    Dashed => "dashed",
    Solid => "solid",
    Double => "double",
    Groove => "groove",
    Ridge => "ridge",
    Inset => "inset",
    Outset => "outset",
  }
);

css_keyword!(
  BorderCollapse {
    Collapse => "collapse",
    Separate => "separate",
  }
);

css_keyword!(
  BoxSizing {
    ContentBox => "content-box",
    BorderBox => "border-box",
  }
);

css_keyword!(
  Overflow {
    Visible => "visible",
    Hidden => "hidden",
    Scroll => "scroll",
    Auto => "auto",
  }
);

css_keyword!(
  Float {
    Left => "left",
    Right => "right",
    None => "none",
  }
);

css_keyword!(
  Clear {
    Left => "left",
    Right => "right",
    Both => "both",
    None => "none",
  }
);

css_keyword!(
  Visibility {
    Visible => "visible",
    Hidden => "hidden",
    Collapse => "collapse",
  }
);

css_keyword!(
  VerticalAlign {
    Baseline => "baseline",
    Sub => "sub",
    Super => "super",
    Top => "top",
    TextTop => "text-top",
    Middle => "middle",
    Bottom => "bottom",
    TextBottom => "text-bottom",
  }
);

css_keyword!(
  BackgroundRepeat {
    Repeat => "repeat",
    NoRepeat => "no-repeat",
    RepeatX => "repeat-x",
    RepeatY => "repeat-y",
    Space => "space",
    Round => "round",
  }
);

css_keyword!(
  BackgroundAttachment {
    Scroll => "scroll",
    Fixed => "fixed",
    Local => "local",
  }
);

css_keyword!(
  /// Shared by `background-clip` and `background-origin`.
  BackgroundBox {
    BorderBox => "border-box",
    PaddingBox => "padding-box",
    ContentBox => "content-box",
  }
);

css_keyword!(
  FontStyle {
    Normal => "normal",
    Italic => "italic",
    Oblique => "oblique",
  }
);

css_keyword!(
  TextAlign {
    Left => "left",
    Right => "right",
    Center => "center",
    Justify => "justify",
    Start => "start",
    End => "end",
  }
);

css_keyword!(
  TextDecoration {
    None => "none",
    Underline => "underline",
    Overline => "overline",
    LineThrough => "line-through",
  }
);

css_keyword!(
  TextTransform {
    None => "none",
    Capitalize => "capitalize",
    Uppercase => "uppercase",
    Lowercase => "lowercase",
  }
);

css_keyword!(
  WhiteSpace {
    Normal => "normal",
    Nowrap => "nowrap",
    Pre => "pre",
    PreWrap => "pre-wrap",
    PreLine => "pre-line",
    BreakSpaces => "break-spaces",
  }
);

css_keyword!(
  WordBreak {
    Normal => "normal",
    BreakAll => "break-all",
    KeepAll => "keep-all",
    BreakWord => "break-word",
  }
);

css_keyword!(
  Cursor {
    Auto => "auto",
    Default => "default",
    None => "none",
    Pointer => "pointer",
    Text => "text",
    Move => "move",
    Wait => "wait",
    Help => "help",
    Progress => "progress",
    Crosshair => "crosshair",
    NotAllowed => "not-allowed",
    Grab => "grab",
    Grabbing => "grabbing",
    ColResize => "col-resize",
    RowResize => "row-resize",
    ZoomIn => "zoom-in",
    ZoomOut => "zoom-out",
  }
);

css_keyword!(
  UserSelect {
    None => "none",
    Auto => "auto",
    Text => "text",
    All => "all",
    Contain => "contain",
  }
);

css_keyword!(
  PointerEvents {
    Auto => "auto",
    None => "none",
  }
);

css_keyword!(
  ListStyleType {
    Disc => "disc",
    Circle => "circle",
    Square => "square",
    Decimal => "decimal",
    LowerAlpha => "lower-alpha",
    UpperAlpha => "upper-alpha",
    LowerRoman => "lower-roman",
    UpperRoman => "upper-roman",
    None => "none",
  }
);

css_keyword!(
  FlexDirection {
    Row => "row",
    RowReverse => "row-reverse",
    Column => "column",
    ColumnReverse => "column-reverse",
  }
);

css_keyword!(
  FlexWrap {
    Nowrap => "nowrap",
    Wrap => "wrap",
    WrapReverse => "wrap-reverse",
  }
);

css_keyword!(
  AlignItems {
    FlexStart => "flex-start",
    FlexEnd => "flex-end",
    Center => "center",
    Baseline => "baseline",
    Stretch => "stretch",
    Start => "start",
    End => "end",
  }
);

css_keyword!(
  AlignSelf {
    Auto => "auto",
    FlexStart => "flex-start",
    FlexEnd => "flex-end",
    Center => "center",
    Baseline => "baseline",
    Stretch => "stretch",
  }
);

css_keyword!(
  AlignContent {
    FlexStart => "flex-start",
    FlexEnd => "flex-end",
    Center => "center",
    Stretch => "stretch",
    SpaceBetween => "space-between",
    SpaceAround => "space-around",
    SpaceEvenly => "space-evenly",
  }
);

css_keyword!(
  JustifyContent {
    FlexStart => "flex-start",
    FlexEnd => "flex-end",
    Center => "center",
    SpaceBetween => "space-between",
    SpaceAround => "space-around",
    SpaceEvenly => "space-evenly",
    Start => "start",
    End => "end",
    Stretch => "stretch",
  }
);

css_keyword!(
  GridAutoFlow {
    Row => "row",
    Column => "column",
    Dense => "dense",
    RowDense => "row dense",
    ColumnDense => "column dense",
  }
);

css_keyword!(
  BackfaceVisibility {
    Visible => "visible",
    Hidden => "hidden",
  }
);

css_keyword!(
  AnimationDirection {
    Normal => "normal",
    Reverse => "reverse",
    Alternate => "alternate",
    AlternateReverse => "alternate-reverse",
  }
);

css_keyword!(
  AnimationFillMode {
    None => "none",
    Forwards => "forwards",
    Backwards => "backwards",
    Both => "both",
  }
);

css_keyword!(
  AnimationPlayState {
    Running => "running",
    Paused => "paused",
  }
);

css_keyword!(
  /// Jump position of `steps()`.
  StepPosition {
    Start => "start",
    End => "end",
  }
);
