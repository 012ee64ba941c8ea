//! Public API for flickergen
//!
//! Two entry points make up the public surface: [`generate_points`] writes
//! one randomized custom property per stop onto the matched element, and
//! [`generate_keyframes`] additionally renders and injects a `@keyframes`
//! rule referencing those properties. Both return what they produced, so
//! callers can inspect the values without reading them back out of a style
//! map.
//!
//! The pipeline is: resolve config → normalize stop positions (once) → draw
//! values (once) → apply properties → render and inject rule text. Validation
//! failures happen before any document mutation; after the first write there
//! is no rollback.
//!
//! # Example
//!
//! ```
//! use flickergen::{generate_keyframes, KeyframesConfig, MemoryDocument, PointsConfig};
//!
//! let mut doc = MemoryDocument::new();
//! let rule = generate_keyframes(
//!   &mut doc,
//!   &KeyframesConfig::new().animation_name("flicker"),
//!   &PointsConfig::new().points(vec![0.0, 50.0, 100.0]),
//! )?;
//! assert!(rule.starts_with("@keyframes flicker {"));
//! # Ok::<(), flickergen::Error>(())
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{KeyframesConfig, PointsConfig, PositionUnit, Profile};
use crate::dom::{ElementId, StyleDocument};
use crate::error::{Result, TargetError};
use crate::keyframes::{property_name, render_keyframes};
use crate::stops::{self, Stop, StopPosition};

/// Generates randomized custom properties on the element matched by the
/// configured selector, using the points profile's defaults and naming.
///
/// Returns the ordered stop list that was applied.
pub fn generate_points<D>(doc: &mut D, config: &PointsConfig) -> Result<Vec<Stop>>
where
  D: StyleDocument + ?Sized,
{
  Flicker::new().generate_points(doc, config)
}

/// Generates custom properties and injects a matching `@keyframes` rule,
/// using the keyframes profile's defaults and naming.
///
/// Returns the rule text that was injected.
pub fn generate_keyframes<D>(
  doc: &mut D,
  keyframes: &KeyframesConfig,
  points: &PointsConfig,
) -> Result<String>
where
  D: StyleDocument + ?Sized,
{
  Flicker::new().generate_keyframes(doc, keyframes, points)
}

/// Entry point carrying cross-call settings: a profile override and an
/// optional seed.
///
/// The default instance draws fresh values on every invocation and lets each
/// entry point pick its profile. A seed pins the drawn values, which is what
/// tests and reproducible CLI output use.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flicker {
  profile: Option<Profile>,
  seed: Option<u64>,
}

impl Flicker {
  pub fn new() -> Self {
    Self::default()
  }

  /// Overrides the per-entry-point profile for both operations.
  pub fn with_profile(mut self, profile: Profile) -> Self {
    self.profile = Some(profile);
    self
  }

  /// Draws values from a deterministic generator seeded with `seed`.
  pub fn with_seed(mut self, seed: u64) -> Self {
    self.seed = Some(seed);
    self
  }

  /// See [`generate_points`].
  pub fn generate_points<D>(&self, doc: &mut D, config: &PointsConfig) -> Result<Vec<Stop>>
  where
    D: StyleDocument + ?Sized,
  {
    let resolved = config.resolve(&self.profile.unwrap_or(Profile::POINTS));
    let positions = stops::resolve_positions(&resolved.points)?;
    let element = require_element(doc, &resolved.selector)?;
    let generated = self.draw(&positions, resolved.min, resolved.max);
    apply_stops(doc, element, &resolved.namespace, resolved.unit, &generated);
    Ok(generated)
  }

  /// See [`generate_keyframes`].
  pub fn generate_keyframes<D>(
    &self,
    doc: &mut D,
    keyframes: &KeyframesConfig,
    points: &PointsConfig,
  ) -> Result<String>
  where
    D: StyleDocument + ?Sized,
  {
    let name = keyframes.resolve();
    let resolved = points.resolve(&self.profile.unwrap_or(Profile::KEYFRAMES));
    let positions = stops::resolve_positions(&resolved.points)?;
    let element = require_element(doc, &resolved.selector)?;
    let generated = self.draw(&positions, resolved.min, resolved.max);
    apply_stops(doc, element, &resolved.namespace, resolved.unit, &generated);
    let css = render_keyframes(&name, &resolved.namespace, resolved.unit, &generated);
    doc.append_style_text(element, &css);
    Ok(css)
  }

  fn draw(&self, positions: &[StopPosition], min: f64, max: f64) -> Vec<Stop> {
    match self.seed {
      Some(seed) => stops::generate(positions, min, max, &mut StdRng::seed_from_u64(seed)),
      None => stops::generate(positions, min, max, &mut rand::rng()),
    }
  }
}

/// Writes one custom property per stop onto `element`.
///
/// Stops sharing a permille value collide on the property name; writes happen
/// in stop order, so the last one wins.
pub fn apply_stops<D>(
  doc: &mut D,
  element: ElementId,
  namespace: &str,
  unit: PositionUnit,
  stops: &[Stop],
) where
  D: StyleDocument + ?Sized,
{
  for stop in stops {
    doc.set_custom_property(
      element,
      &property_name(namespace, stop.permille, unit),
      &stop.css_value(),
    );
  }
}

fn require_element<D>(doc: &D, selector: &str) -> Result<ElementId>
where
  D: StyleDocument + ?Sized,
{
  doc.query_selector(selector).ok_or_else(|| {
    TargetError::SelectorNotFound {
      selector: selector.to_string(),
    }
    .into()
  })
}
