//! Custom-property naming and `@keyframes` rule rendering
//!
//! Property names are `--{namespace}{encoded position}` where the encoding is
//! fixed by the active profile. Rule text references the same names through
//! `var()`, one keyframe block per stop in stop order. Identifiers are escaped
//! with the CSS serializer when rendered, so any namespace or animation name
//! round-trips as a valid identifier.

use cssparser::serialize_identifier;

use crate::config::PositionUnit;
use crate::stops::Stop;

/// Raw custom-property name for a stop position, e.g. `--n0500`.
///
/// This is the form passed to the style map. Inside CSS text the name is
/// additionally escaped; for ordinary namespaces the two forms are identical.
pub fn property_name(namespace: &str, permille: u16, unit: PositionUnit) -> String {
  format!("--{}{}", namespace, encode_position(permille, unit))
}

fn encode_position(permille: u16, unit: PositionUnit) -> String {
  match unit {
    PositionUnit::Permille => format!("{:04}", permille),
    PositionUnit::BasisPoints => format!("{:04}", u32::from(permille) * 10),
  }
}

/// Renders the `@keyframes` rule for a generated stop list.
///
/// Each stop contributes one block animating `opacity`. Values outside the
/// renderable opacity range are the platform's concern, not validated here.
pub fn render_keyframes(
  name: &str,
  namespace: &str,
  unit: PositionUnit,
  stops: &[Stop],
) -> String {
  let mut css = String::new();
  css.push_str(&format!("@keyframes {} {{\n", css_ident(name)));
  for stop in stops {
    css.push_str(&format!(
      "  {}% {{ opacity: var({}); }}\n",
      stop.percent,
      css_ident(&property_name(namespace, stop.permille, unit))
    ));
  }
  css.push('}');
  css.push('\n');
  css
}

fn css_ident(value: &str) -> String {
  let mut out = String::new();
  // Writing into a String cannot fail.
  let _ = serialize_identifier(value, &mut out);
  out
}
