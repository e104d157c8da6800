//! Single-pass heuristic that nudges speaker-group distances away from
//! axial-mode pressure zones.
//!
//! Each ear-level speaker found inside a zone shrinks its group's multiplier
//! by 10 % (or grows it by 10 % when shrinking would cross the lower bound).
//! The nudge is applied once per offending speaker and never re-checked, so
//! it is a best-effort suggestion rather than a converging search.

use crate::constants::*;
use crate::layout::{listening_position, DistanceAdjustments, RoleGroup, SpeakerPlacement};
use crate::modes::{modes_for_dimension, AxialMode, RoomAxis};
use crate::room::RoomDimensions;

/// Groups the optimizer may move. Height channels are left alone.
pub const OPTIMIZABLE_GROUPS: [RoleGroup; 4] = [
    RoleGroup::Front,
    RoleGroup::Center,
    RoleGroup::Surround,
    RoleGroup::Rear,
];

/// Whether `coordinate` lies inside a pressure zone of the axial mode of
/// `order` along a dimension of `dimension_m`.
///
/// Order 1 has one zone at 50 % (±7.5 %), order 2 two zones at 25 % and
/// 75 % (±6.25 %). Higher orders are not tested.
pub fn is_in_pressure_zone(coordinate: f64, dimension_m: f64, order: u32) -> bool {
    let (peaks, zone_width) = match order {
        1 => (FIRST_ORDER_PEAKS, FIRST_ORDER_ZONE_WIDTH),
        2 => (SECOND_ORDER_PEAKS, SECOND_ORDER_ZONE_WIDTH),
        _ => return false,
    };
    let half = dimension_m * zone_width / 2.0;
    peaks
        .iter()
        .any(|p| (coordinate - p * dimension_m).abs() < half)
}

fn in_any_zone(coordinate: f64, dimension_m: f64, modes: &[AxialMode]) -> bool {
    modes
        .iter()
        .any(|m| is_in_pressure_zone(coordinate, dimension_m, m.order))
}

/// The multiplier a flagged group moves to, or `None` when no valid nudge
/// exists (or it would change the value by 0.01 or less).
pub fn nudged_multiplier(current: f64) -> Option<f64> {
    let mut candidate = current * OPTIMIZER_SHRINK;
    if candidate < ADJUSTMENT_MIN {
        candidate = (current * OPTIMIZER_GROW).min(ADJUSTMENT_MAX);
    }
    let changed = (candidate - current).abs() > OPTIMIZER_MIN_CHANGE;
    let in_bounds = (ADJUSTMENT_MIN..=ADJUSTMENT_MAX).contains(&candidate);
    (changed && in_bounds).then(|| round_to_hundredths(candidate))
}

#[inline]
fn round_to_hundredths(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Propose new distance multipliers for the current layout.
///
/// The input map is left untouched; the result starts as a copy of it. When
/// the room is incomplete or the layout has no LP, the copy is returned as is.
pub fn auto_optimize_placement(
    room: &RoomDimensions,
    layout: &[SpeakerPlacement],
    current: &DistanceAdjustments,
) -> DistanceAdjustments {
    let mut adjusted = *current;
    if !room.is_valid() || layout.is_empty() || listening_position(layout).is_none() {
        return adjusted;
    }

    let width_modes = modes_for_dimension(room.width, RoomAxis::Width, OPTIMIZER_MODE_ORDERS);
    let length_modes = modes_for_dimension(room.length, RoomAxis::Length, OPTIMIZER_MODE_ORDERS);

    for speaker in layout.iter().filter(|sp| !sp.is_listening_position) {
        let Some(group) = speaker
            .role
            .group()
            .filter(|g| OPTIMIZABLE_GROUPS.contains(g))
        else {
            continue;
        };

        let bad_x = in_any_zone(speaker.x, room.width, &width_modes);
        let bad_y = in_any_zone(speaker.y, room.length, &length_modes);
        if !(bad_x || bad_y) {
            continue;
        }

        let before = adjusted.get(group);
        if let Some(next) = nudged_multiplier(before) {
            log::debug!(
                "{} in pressure zone (x: {bad_x}, y: {bad_y}); {} {before:.2} -> {next:.2}",
                speaker.label,
                group.key()
            );
            adjusted.set(group, next);
        }
    }
    adjusted
}
