pub mod api;
pub mod config;
pub mod dom;
pub mod error;
pub mod keyframes;
pub mod stops;

pub use api::{apply_stops, generate_keyframes, generate_points, Flicker};
pub use config::{
  KeyframesConfig, PointValue, PointsConfig, PointsInput, PositionUnit, Profile,
};
pub use dom::{ElementId, MemoryDocument, StyleDocument};
pub use error::{Error, PointsError, Result, TargetError};
pub use stops::{Stop, StopPosition};
