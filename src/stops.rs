//! Stop normalization and random value generation
//!
//! This is the core of the crate: a points specification is normalized into an
//! ordered sequence of integer permille positions (tenths of a percent, 0 to
//! 1000), and one uniformly random scalar is drawn per position. Generation is
//! pure; applying the values to a document is a separate step so callers and
//! tests can observe the stop list directly.

use rand::Rng;

use crate::config::PointsInput;
use crate::error::PointsError;

/// One normalized stop position along the animation cycle.
///
/// `permille` is the exact integer used for property naming; `percent` keeps
/// the original percentage form for keyframe selector text (list-mode entries
/// keep their given value, count-mode entries are `permille / 10`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopPosition {
  pub permille: u16,
  pub percent: f64,
}

/// A stop position paired with its freshly drawn value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stop {
  pub permille: u16,
  pub percent: f64,
  pub value: f64,
}

impl Stop {
  /// The value in the form written to the style map.
  pub fn css_value(&self) -> String {
    self.value.to_string()
  }
}

/// Normalizes a points specification into ordered stop positions.
///
/// List mode accepts numbers and numeric strings in 0..=100, in given order,
/// duplicates permitted. Count mode accepts a numeric value in (0, 1000],
/// rounds it to N and emits `round((i / N) * 1000)` permille for i = 1..=N,
/// ending exactly at 1000. The divergent bounds between the two modes are
/// intentional.
pub fn resolve_positions(points: &PointsInput) -> Result<Vec<StopPosition>, PointsError> {
  match points {
    PointsInput::List(entries) => {
      if entries.is_empty() {
        return Err(PointsError::EmptyList);
      }
      let mut positions = Vec::with_capacity(entries.len());
      for (index, entry) in entries.iter().enumerate() {
        let percent = entry.as_f64().ok_or_else(|| PointsError::NotNumeric {
          index,
          raw: entry.raw(),
        })?;
        if !(0.0..=100.0).contains(&percent) {
          return Err(PointsError::OutOfRange {
            index,
            value: percent,
          });
        }
        positions.push(StopPosition {
          permille: (percent * 10.0).round() as u16,
          percent,
        });
      }
      Ok(positions)
    }
    PointsInput::Count(entry) => {
      let count = entry.as_f64().ok_or_else(|| PointsError::CountNotNumeric {
        raw: entry.raw(),
      })?;
      if !(count > 0.0 && count <= 1000.0) {
        return Err(PointsError::CountOutOfRange { value: count });
      }
      let n = count.round() as u32;
      if n == 0 {
        return Err(PointsError::CountRoundsToZero { value: count });
      }
      let positions = (1..=n)
        .map(|i| {
          let permille = ((i as f64 / n as f64) * 1000.0).round() as u16;
          StopPosition {
            permille,
            percent: permille as f64 / 10.0,
          }
        })
        .collect();
      Ok(positions)
    }
  }
}

/// Draws one uniform value in `[min, max)` per position.
///
/// The draws are independent across positions and calls. `min == max` yields
/// exactly `min`; `min > max` is permitted and simply reverses the half-open
/// interval, the bounds are taken as given.
pub fn generate<R: Rng + ?Sized>(
  positions: &[StopPosition],
  min: f64,
  max: f64,
  rng: &mut R,
) -> Vec<Stop> {
  positions
    .iter()
    .map(|position| Stop {
      permille: position.permille,
      percent: position.percent,
      value: min + rng.random::<f64>() * (max - min),
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::{PointValue, PointsInput};
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  fn permilles(points: &PointsInput) -> Vec<u16> {
    resolve_positions(points)
      .unwrap()
      .iter()
      .map(|p| p.permille)
      .collect()
  }

  #[test]
  fn list_entries_convert_to_permille_in_given_order() {
    assert_eq!(
      permilles(&PointsInput::list([0.0, 50.0, 100.0])),
      vec![0, 500, 1000]
    );
    assert_eq!(
      permilles(&PointsInput::list([75.0, 25.0, 25.0])),
      vec![750, 250, 250]
    );
  }

  #[test]
  fn list_accepts_numeric_strings_and_fractional_percents() {
    let positions =
      resolve_positions(&PointsInput::list(["0", " 50.5 ", "33.3"])).unwrap();
    assert_eq!(
      positions.iter().map(|p| p.permille).collect::<Vec<_>>(),
      vec![0, 505, 333]
    );
    assert_eq!(positions[2].percent, 33.3);
  }

  #[test]
  fn list_rejects_non_numeric_and_out_of_range_entries() {
    assert_eq!(
      resolve_positions(&PointsInput::list(["abc"])),
      Err(PointsError::NotNumeric {
        index: 0,
        raw: "abc".to_string()
      })
    );
    assert!(matches!(
      resolve_positions(&PointsInput::list([50.0, -1.0])),
      Err(PointsError::OutOfRange { index: 1, .. })
    ));
    assert!(matches!(
      resolve_positions(&PointsInput::list([100.5])),
      Err(PointsError::OutOfRange { index: 0, .. })
    ));
    assert_eq!(
      resolve_positions(&PointsInput::List(Vec::new())),
      Err(PointsError::EmptyList)
    );
  }

  #[test]
  fn list_rejects_nan_entries() {
    assert!(matches!(
      resolve_positions(&PointsInput::List(vec![PointValue::Number(f64::NAN)])),
      Err(PointsError::OutOfRange { index: 0, .. })
    ));
  }

  #[test]
  fn count_mode_spaces_stops_evenly_up_to_the_full_cycle() {
    assert_eq!(
      permilles(&PointsInput::count(4.0)),
      vec![250, 500, 750, 1000]
    );
    assert_eq!(permilles(&PointsInput::count(1.0)), vec![1000]);
    assert_eq!(permilles(&PointsInput::count(3.0)), vec![333, 667, 1000]);
  }

  #[test]
  fn count_mode_accepts_counts_above_one_hundred() {
    let positions = resolve_positions(&PointsInput::count(1000.0)).unwrap();
    assert_eq!(positions.len(), 1000);
    assert_eq!(positions.first().unwrap().permille, 1);
    assert_eq!(positions.last().unwrap().permille, 1000);
    let sorted = positions.windows(2).all(|w| w[0].permille <= w[1].permille);
    assert!(sorted);
  }

  #[test]
  fn count_mode_rounds_to_the_nearest_integer() {
    assert_eq!(permilles(&PointsInput::count(3.6)).len(), 4);
    assert_eq!(permilles(&PointsInput::count("2")).len(), 2);
  }

  #[test]
  fn count_mode_rejects_invalid_counts() {
    assert!(matches!(
      resolve_positions(&PointsInput::count(0.0)),
      Err(PointsError::CountOutOfRange { .. })
    ));
    assert!(matches!(
      resolve_positions(&PointsInput::count(-4.0)),
      Err(PointsError::CountOutOfRange { .. })
    ));
    assert!(matches!(
      resolve_positions(&PointsInput::count(1000.5)),
      Err(PointsError::CountOutOfRange { .. })
    ));
    assert!(matches!(
      resolve_positions(&PointsInput::count("abc")),
      Err(PointsError::CountNotNumeric { .. })
    ));
    assert!(matches!(
      resolve_positions(&PointsInput::count(0.4)),
      Err(PointsError::CountRoundsToZero { .. })
    ));
  }

  #[test]
  fn generated_values_stay_inside_the_half_open_range() {
    let positions = resolve_positions(&PointsInput::count(100.0)).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    for stop in generate(&positions, 0.25, 0.75, &mut rng) {
      assert!(stop.value >= 0.25 && stop.value < 0.75);
    }
  }

  #[test]
  fn equal_bounds_pin_every_value_to_min() {
    let positions = resolve_positions(&PointsInput::count(10.0)).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    for stop in generate(&positions, 0.4, 0.4, &mut rng) {
      assert_eq!(stop.value, 0.4);
    }
  }

  #[test]
  fn inverted_bounds_are_permitted() {
    let positions = resolve_positions(&PointsInput::count(50.0)).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    for stop in generate(&positions, 1.0, 0.0, &mut rng) {
      assert!(stop.value > 0.0 && stop.value <= 1.0);
    }
  }

  #[test]
  fn seeded_generation_is_reproducible() {
    let positions = resolve_positions(&PointsInput::count(8.0)).unwrap();
    let a = generate(&positions, 0.0, 1.0, &mut StdRng::seed_from_u64(42));
    let b = generate(&positions, 0.0, 1.0, &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
  }
}
