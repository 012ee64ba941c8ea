//! Caller-facing configuration for point and keyframe generation
//!
//! Configuration is an immutable value resolved once on entry: every field is
//! optional, absent fields take their profile defaults, and present fields are
//! always honored as given. Explicit `0` bounds and empty namespaces are
//! legitimate overrides, not triggers for defaulting.

use serde::Deserialize;
use serde::Serialize;

/// One entry of a points list, or the count form: a number or a numeric string.
///
/// Strings are trimmed and parsed as `f64`; entries that do not parse are
/// rejected during validation, not silently coerced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointValue {
  /// A plain number, e.g. `50` or `33.3`.
  Number(f64),
  /// A numeric string, e.g. `"50"`.
  Text(String),
}

impl PointValue {
  /// Numeric value of this entry, if it parses.
  pub fn as_f64(&self) -> Option<f64> {
    match self {
      PointValue::Number(n) => Some(*n),
      PointValue::Text(s) => s.trim().parse().ok(),
    }
  }

  /// Raw textual form, for error reporting.
  pub fn raw(&self) -> String {
    match self {
      PointValue::Number(n) => n.to_string(),
      PointValue::Text(s) => s.clone(),
    }
  }
}

impl From<f64> for PointValue {
  fn from(value: f64) -> Self {
    PointValue::Number(value)
  }
}

impl From<&str> for PointValue {
  fn from(value: &str) -> Self {
    PointValue::Text(value.to_string())
  }
}

/// The two accepted shapes of the `points` field.
///
/// List mode carries explicit percentage stops bounded to 0..=100; count mode
/// requests evenly spaced stops and accepts counts up to 1000. The divergent
/// bounds are intentional and preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointsInput {
  /// Ordered percentage stops, kept in given order, duplicates permitted.
  List(Vec<PointValue>),
  /// A single stop count requesting evenly spaced stops.
  Count(PointValue),
}

impl PointsInput {
  /// List-mode input from anything convertible to point values.
  pub fn list<I, V>(values: I) -> Self
  where
    I: IntoIterator<Item = V>,
    V: Into<PointValue>,
  {
    PointsInput::List(values.into_iter().map(Into::into).collect())
  }

  /// Count-mode input.
  pub fn count<V: Into<PointValue>>(value: V) -> Self {
    PointsInput::Count(value.into())
  }
}

impl From<Vec<f64>> for PointsInput {
  fn from(values: Vec<f64>) -> Self {
    PointsInput::list(values)
  }
}

impl From<f64> for PointsInput {
  fn from(value: f64) -> Self {
    PointsInput::count(value)
  }
}

/// Integer encoding of a stop position inside a generated property name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PositionUnit {
  /// Tenths of a percent, zero-padded to 4 digits: 50% encodes as `0500`.
  Permille,
  /// Hundredths of a percent, zero-padded to 4 digits: 50% encodes as
  /// `5000` and 100% overflows the padding as `10000`.
  BasisPoints,
}

/// A named defaults-and-naming preset.
///
/// A profile bundles the default namespace, the default stop list, and the
/// property-name encoding. The two presets differ only in encoding; each
/// entry point picks its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
  /// Default custom-property namespace.
  pub namespace: &'static str,
  /// Default percentage stops used when `points` is absent.
  pub points: &'static [f64],
  /// Position encoding used in property names.
  pub unit: PositionUnit,
}

impl Profile {
  /// Preset used by the points-only entry point: basis-point names.
  pub const POINTS: Profile = Profile {
    namespace: "n",
    points: &[0.0, 25.0, 50.0, 75.0],
    unit: PositionUnit::BasisPoints,
  };

  /// Preset used by the keyframes entry point: permille names.
  pub const KEYFRAMES: Profile = Profile {
    namespace: "n",
    points: &[0.0, 25.0, 50.0, 75.0],
    unit: PositionUnit::Permille,
  };
}

/// Configuration for point generation.
///
/// Mirrors the public `points`/`min`/`max`/`selector`/`namespace` surface.
/// `min` may exceed `max`; degenerate ranges are permitted, not rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointsConfig {
  /// Percentage stops or a stop count; profile default when absent.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub points: Option<PointsInput>,
  /// Lower value bound, default 0.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub min: Option<f64>,
  /// Upper value bound (exclusive), default 1.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub max: Option<f64>,
  /// Selector for the element receiving the properties, default `"html"`.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub selector: Option<String>,
  /// Custom-property name prefix; profile default when absent.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub namespace: Option<String>,
}

impl PointsConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn points<P: Into<PointsInput>>(mut self, points: P) -> Self {
    self.points = Some(points.into());
    self
  }

  pub fn min(mut self, min: f64) -> Self {
    self.min = Some(min);
    self
  }

  pub fn max(mut self, max: f64) -> Self {
    self.max = Some(max);
    self
  }

  pub fn selector<S: Into<String>>(mut self, selector: S) -> Self {
    self.selector = Some(selector.into());
    self
  }

  pub fn namespace<S: Into<String>>(mut self, namespace: S) -> Self {
    self.namespace = Some(namespace.into());
    self
  }

  /// Fills absent fields from the profile and produces the value actually
  /// used by a generation call. The configuration itself is never mutated.
  pub fn resolve(&self, profile: &Profile) -> ResolvedPoints {
    ResolvedPoints {
      points: self
        .points
        .clone()
        .unwrap_or_else(|| PointsInput::list(profile.points.iter().copied())),
      min: self.min.unwrap_or(0.0),
      max: self.max.unwrap_or(1.0),
      selector: self.selector.clone().unwrap_or_else(|| "html".to_string()),
      namespace: self
        .namespace
        .clone()
        .unwrap_or_else(|| profile.namespace.to_string()),
      unit: profile.unit,
    }
  }
}

/// A fully defaulted points configuration, fixed for the duration of one call.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPoints {
  pub points: PointsInput,
  pub min: f64,
  pub max: f64,
  pub selector: String,
  pub namespace: String,
  pub unit: PositionUnit,
}

/// Configuration for keyframe assembly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyframesConfig {
  /// Name of the generated `@keyframes` rule, default `"n"`.
  #[serde(
    default,
    alias = "animationName",
    skip_serializing_if = "Option::is_none"
  )]
  pub animation_name: Option<String>,
}

impl KeyframesConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn animation_name<S: Into<String>>(mut self, name: S) -> Self {
    self.animation_name = Some(name.into());
    self
  }

  /// Animation name actually used by a call.
  pub fn resolve(&self) -> String {
    self
      .animation_name
      .clone()
      .unwrap_or_else(|| "n".to_string())
  }
}
