//! Room geometry inputs: dimensions, unit handling and wall features.
//!
//! Coordinates are room-local meters with the origin at the front-left floor
//! corner: `x` runs across the width, `y` away from the front (screen) wall
//! and `z` up from the floor.

use crate::constants::{DEFAULT_ROOM_DIMENSIONS_M, FEET_TO_METERS, METERS_TO_FEET};
use crate::error::{PlannerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Interior room size in meters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomDimensions {
    pub width: f64,
    pub length: f64,
    pub height: f64,
}

impl Default for RoomDimensions {
    fn default() -> Self {
        let [width, length, height] = DEFAULT_ROOM_DIMENSIONS_M;
        Self {
            width,
            length,
            height,
        }
    }
}

impl RoomDimensions {
    pub const fn new(width: f64, length: f64, height: f64) -> Self {
        Self {
            width,
            length,
            height,
        }
    }

    /// True when every dimension is a positive finite length.
    pub fn is_valid(&self) -> bool {
        [self.width, self.length, self.height]
            .iter()
            .all(|d| d.is_finite() && *d > 0.0)
    }

    /// True when the floor plan can be drawn (height may still be missing).
    pub fn has_floor_plan(&self) -> bool {
        self.width.is_finite() && self.width > 0.0 && self.length.is_finite() && self.length > 0.0
    }

    /// Convert dimensions entered in `unit` to meters.
    pub fn from_unit(width: f64, length: f64, height: f64, unit: UnitSystem) -> Self {
        Self::new(
            unit.to_meters(width),
            unit.to_meters(length),
            unit.to_meters(height),
        )
    }

    /// Express these (metric) dimensions in `unit`.
    pub fn in_unit(&self, unit: UnitSystem) -> Self {
        Self::new(
            unit.meters_in_unit(self.width),
            unit.meters_in_unit(self.length),
            unit.meters_in_unit(self.height),
        )
    }
}

/// Unit system the user enters and reads dimensions in. Storage is always metric.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Meters,
    Feet,
}

impl UnitSystem {
    #[inline]
    pub fn to_meters(self, value: f64) -> f64 {
        match self {
            UnitSystem::Meters => value,
            UnitSystem::Feet => value * FEET_TO_METERS,
        }
    }

    #[inline]
    pub fn meters_in_unit(self, meters: f64) -> f64 {
        match self {
            UnitSystem::Meters => meters,
            UnitSystem::Feet => meters * METERS_TO_FEET,
        }
    }

    /// Convert a metric volume (m³) into this unit's cubic measure.
    #[inline]
    pub fn volume_from_cubic_meters(self, cubic_meters: f64) -> f64 {
        match self {
            UnitSystem::Meters => cubic_meters,
            UnitSystem::Feet => cubic_meters * METERS_TO_FEET.powi(3),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            UnitSystem::Meters => UnitSystem::Feet,
            UnitSystem::Feet => UnitSystem::Meters,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            UnitSystem::Meters => "meters",
            UnitSystem::Feet => "feet",
        })
    }
}

impl FromStr for UnitSystem {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "meters" | "metres" | "m" => Ok(UnitSystem::Meters),
            "feet" | "ft" => Ok(UnitSystem::Feet),
            other => Err(PlannerError::UnknownUnitSystem(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallFeatureKind {
    Opening,
    Door,
    Window,
}

/// Wall a feature sits on, seen from above with the screen wall at the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wall {
    North,
    East,
    South,
    West,
}

impl Wall {
    /// North/South walls run along the width, East/West along the length.
    pub fn length_in(self, room: &RoomDimensions) -> f64 {
        match self {
            Wall::North | Wall::South => room.width,
            Wall::East | Wall::West => room.length,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DoorSwing {
    InwardLeft,
    InwardRight,
    OutwardLeft,
    OutwardRight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HingeSide {
    Left,
    Right,
}

/// A door, window or opening cut into one wall.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallFeature {
    pub kind: WallFeatureKind,
    pub wall: Wall,
    /// Distance from the wall's start corner, meters.
    pub start_offset: f64,
    pub width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub door_swing: Option<DoorSwing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub door_hinge_side: Option<HingeSide>,
}

impl WallFeature {
    /// Check the feature fits on its wall for the given room.
    pub fn validate(&self, room: &RoomDimensions) -> Result<()> {
        let (offset, width) = (self.start_offset, self.width);
        if !offset.is_finite() || !width.is_finite() || offset < 0.0 || width <= 0.0 {
            return Err(PlannerError::InvalidFeatureSize { offset, width });
        }
        let wall_length = self.wall.length_in(room);
        if offset + width > wall_length {
            return Err(PlannerError::FeatureExceedsWall {
                offset,
                width,
                wall_length,
            });
        }
        Ok(())
    }
}
