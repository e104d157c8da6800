//! Axial room modes (standing waves between one pair of parallel surfaces).
//!
//! Only axial modes are modelled: `f = n * c / (2 * d)`. Tangential and
//! oblique modes exist in real rooms but are outside this approximation.

use crate::constants::{DEFAULT_MODE_COUNT, MAX_MODE_COUNT, SPEED_OF_SOUND_MPS};
use crate::room::RoomDimensions;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Which room dimension a mode bounces along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomAxis {
    Length,
    Width,
    Height,
}

impl RoomAxis {
    pub fn of(self, room: &RoomDimensions) -> f64 {
        match self {
            RoomAxis::Length => room.length,
            RoomAxis::Width => room.width,
            RoomAxis::Height => room.height,
        }
    }
}

impl fmt::Display for RoomAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            RoomAxis::Length => "Length",
            RoomAxis::Width => "Width",
            RoomAxis::Height => "Height",
        })
    }
}

/// One standing-wave resonance along a single axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxialMode {
    pub dimension_name: RoomAxis,
    pub order: u32,
    pub frequency: f64,
}

/// First few axial modes for each room dimension.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxialModes {
    pub length_modes: Vec<AxialMode>,
    pub width_modes: Vec<AxialMode>,
    pub height_modes: Vec<AxialMode>,
}

impl AxialModes {
    pub fn for_axis(&self, axis: RoomAxis) -> &[AxialMode] {
        match axis {
            RoomAxis::Length => &self.length_modes,
            RoomAxis::Width => &self.width_modes,
            RoomAxis::Height => &self.height_modes,
        }
    }

    /// All modes merged and sorted by frequency, lowest first.
    pub fn sorted_by_frequency(&self) -> Vec<AxialMode> {
        let mut all: Vec<AxialMode> = self
            .length_modes
            .iter()
            .chain(&self.width_modes)
            .chain(&self.height_modes)
            .copied()
            .collect();
        all.sort_by(|a, b| a.frequency.total_cmp(&b.frequency));
        all
    }
}

/// Frequency of axial order `order` along a dimension of `dimension_m` meters.
#[inline]
pub fn axial_frequency(dimension_m: f64, order: u32) -> f64 {
    order as f64 * SPEED_OF_SOUND_MPS / (2.0 * dimension_m)
}

/// Orders `1..=count` along one dimension, at most [`MAX_MODE_COUNT`] of them;
/// empty when the dimension is not a positive finite length.
pub fn modes_for_dimension(dimension_m: f64, axis: RoomAxis, count: usize) -> Vec<AxialMode> {
    if !(dimension_m.is_finite() && dimension_m > 0.0) {
        log::trace!("skipping {axis} modes for dimension {dimension_m}");
        return Vec::new();
    }
    let orders = u32::try_from(count.min(MAX_MODE_COUNT)).unwrap_or(0);
    (1..=orders)
        .map(|order| AxialMode {
            dimension_name: axis,
            order,
            frequency: axial_frequency(dimension_m, order),
        })
        .collect()
}

/// The first [`DEFAULT_MODE_COUNT`] axial modes for length, width and height.
pub fn axial_modes(room: &RoomDimensions) -> AxialModes {
    axial_modes_with_count(room, DEFAULT_MODE_COUNT)
}

pub fn axial_modes_with_count(room: &RoomDimensions, count: usize) -> AxialModes {
    AxialModes {
        length_modes: modes_for_dimension(room.length, RoomAxis::Length, count),
        width_modes: modes_for_dimension(room.width, RoomAxis::Width, count),
        height_modes: modes_for_dimension(room.height, RoomAxis::Height, count),
    }
}

/// Normalised pressure magnitude of an axial mode at `coordinate` along the
/// axis: 1 at the walls and at pressure peaks, 0 at the nulls.
///
/// Returns 0 for a non-positive dimension or order 0.
pub fn relative_pressure(coordinate: f64, dimension_m: f64, order: u32) -> f64 {
    if !(dimension_m.is_finite() && dimension_m > 0.0) || order == 0 || !coordinate.is_finite() {
        return 0.0;
    }
    (order as f64 * PI * coordinate / dimension_m).cos().abs()
}
