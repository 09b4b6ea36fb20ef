use pretty_assertions::assert_eq;
use serde_json::json;
use typed_css::*;

fn red() -> Color {
  Color::from(NamedColor::Red)
}

fn blue() -> Color {
  Color::from(NamedColor::Blue)
}

#[test]
fn encoders_are_deterministic() {
  let build = || {
    vec![
      width(calc_sub(calc_add(px(20), pct(20.0)), px(5))),
      background(linear_gradient(deg(45.0), [(zero(), red()), (pct(100.0), blue())])),
      box_shadow(shadow(px(1), px(2), zero(), zero(), false, rgb(255, 0, 0))),
    ]
  };
  assert_eq!(build(), build());
  assert_eq!(flatten(&build()), flatten(&build()));
}

#[test]
fn flat_declarations_flatten_in_order() {
  let style = flatten(&[
    display(DisplayType::Block),
    margin(zero()),
    color(hex("333")),
  ]);
  assert_eq!(
    serde_json::to_string(&style).unwrap(),
    r##"{"display":"block","margin":"0","color":"#333"}"##
  );
}

#[test]
fn last_write_wins() {
  let style = flatten(&[color(red()), padding(px(4)), color(blue())]);
  assert_eq!(
    style.to_json(),
    json!({ "color": "#0000ff", "padding": "4px" })
  );
}

#[test]
fn repeated_selectors_replace() {
  let style = flatten(&[
    hover(vec![color(red()), opacity(0.5)]),
    hover(vec![background_color(blue())]),
  ]);
  assert_eq!(
    style.to_json(),
    json!({ ":hover": { "backgroundColor": "#0000ff" } })
  );
}

#[test]
fn nested_calc() {
  let value = calc(CalcOp::Sub, calc(CalcOp::Add, px(20), pct(20.0)), px(5));
  assert_eq!(value.to_string(), "calc(calc(20px + 20%) - 5px)");
}

#[test]
fn keyframes_body_and_name() {
  let handle = keyframes([
    (0, vec![opacity(0.0)]),
    (60, vec![opacity(1.0)]),
    (100, vec![opacity(1.0)]),
  ])
  .unwrap();

  assert_eq!(
    serde_json::to_string(&animation_body(&handle)).unwrap(),
    r#"{"0%":{"opacity":"0"},"60%":{"opacity":"1"},"100%":{"opacity":"1"}}"#
  );

  let style = flatten(&[animation_name(&handle)]);
  assert_eq!(style.get_str("animationName"), Some(handle.name()));
}

#[test]
fn box_shadow_encoding() {
  let rule = box_shadow(shadow(px(1), px(2), zero(), zero(), false, rgb(255, 0, 0)));
  assert_eq!(
    flatten(&[rule]).to_json(),
    json!({ "boxShadow": "1px 2px 0 0 rgb(255, 0, 0)" })
  );
}

#[test]
fn linear_gradient_encoding() {
  let gradient = linear_gradient(deg(45.0), [(zero(), red()), (pct(100.0), blue())]);
  assert_eq!(
    gradient.to_string(),
    "linear-gradient(45deg, #ff0000 0, #0000ff 100%)"
  );
}

#[test]
fn media_nesting_flattens_to_three_levels() {
  let style = flatten(&[media(
    "(min-width: 30em)",
    vec![media(
      "(max-width: 60em)",
      vec![hover(vec![color(red())])],
    )],
  )]);
  assert_eq!(
    style.to_json(),
    json!({
      "@media (min-width: 30em)": {
        "@media (max-width: 60em)": {
          ":hover": { "color": "#ff0000" }
        }
      }
    })
  );
}

#[test]
fn key_case_normalization() {
  let rules = [
    float(Float::Left),
    user_select(UserSelect::None),
    background_origin(BackgroundBox::BorderBox),
    font_size(px(12)),
  ];

  let legacy = flatten(&rules);
  assert_eq!(
    legacy.keys().collect::<Vec<_>>(),
    vec!["float", "user-select", "background-origin", "fontSize"]
  );

  let camel = flatten_with(&rules, &StyleConfig::from_json(r#"{"keyCase":"camel"}"#).unwrap());
  assert_eq!(
    camel.keys().collect::<Vec<_>>(),
    vec!["float", "userSelect", "backgroundOrigin", "fontSize"]
  );

  let kebab = flatten_with(&rules, &StyleConfig::from_json(r#"{"keyCase":"kebab"}"#).unwrap());
  assert_eq!(
    kebab.keys().collect::<Vec<_>>(),
    vec!["float", "user-select", "background-origin", "font-size"]
  );
}

#[test]
fn important_recurses() {
  let style = flatten(&[important(selector(
    "& a",
    vec![color(red()), focus(vec![outline_width(px(2))])],
  ))]);
  assert_eq!(
    style.to_json(),
    json!({
      "& a": {
        "color": "#ff0000 !important",
        ":focus": { "outlineWidth": "2px !important" }
      }
    })
  );
}

#[test]
fn string_input_errors() {
  assert!(matches!(
    "rebeccapurple".parse::<Color>(),
    Ok(Color::Named(NamedColor::RebeccaPurple))
  ));

  let err = "notacolor".parse::<NamedColor>().unwrap_err();
  assert!(matches!(err, CssError::UnknownNamedColor(ref name) if name == "notacolor"));

  let err = "sideways".parse::<TextAlign>().unwrap_err();
  assert_eq!(err.to_string(), "Unknown TextAlign keyword: sideways");

  let err = keyframes([(150, vec![opacity(1.0)])]).unwrap_err();
  assert!(matches!(err, CssError::KeyframeOutOfRange(150)));

  let err = StyleConfig::from_json("{ not json").unwrap_err();
  assert!(matches!(err, CssError::Config(_)));
}

#[test]
fn animation_shorthand_uses_handle_name() {
  let handle = keyframes_with(
    [(0, vec![opacity(0.0)]), (100, vec![opacity(1.0)])],
    &StyleConfig {
      animation_name_prefix: Some("fade-".to_string()),
      ..Default::default()
    },
  )
  .unwrap();

  let style = flatten(&[animation(
    Animation::new(&handle)
      .with_duration(ms(300))
      .with_iteration_count(IterationCount::Infinite),
  )]);
  assert_eq!(
    style.get_str("animation"),
    Some(format!("{} 300ms ease 0ms infinite normal none running", handle.name()).as_str())
  );
  assert!(handle.name().starts_with("fade-"));
}
