//! One-shot evaluation of a design: everything the planner's calculation
//! panels display, computed from a snapshot and the equipment catalog.

use crate::catalog::Catalog;
use crate::constants::DEFAULT_AVG_WATTS_PER_CHANNEL;
use crate::layout::{apply_overrides, speaker_layout, SpeakerPlacement};
use crate::modes::{axial_modes, AxialModes};
use crate::power::{
    channels_driven, estimate_total_power_draw, listening_distance, max_spl, parse_power_rating,
    required_power_default, room_volume,
};
use crate::reflections::{front_stage_reflections, SpeakerReflections};
use crate::snapshot::DesignSnapshot;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerReport {
    pub room_volume_m3: f64,
    /// Volume in the snapshot's display unit (m³ or ft³).
    pub room_volume_display: f64,
    pub modes: AxialModes,
    /// Computed layout with manual overrides applied.
    pub layout: Vec<SpeakerPlacement>,
    pub listening_distance_m: f64,
    /// Watts per channel for the selected front L/R speaker; 0 when unknown.
    pub required_power_w: f64,
    /// Max SPL of the front L/R speaker on the selected receiver; 0 when unknown.
    pub max_spl_db: f64,
    pub total_power_draw_w: f64,
    pub channels_driven: u32,
    pub reflections: Vec<SpeakerReflections>,
    /// Human-readable problems with the inputs (empty when all is well).
    pub warnings: Vec<String>,
}

impl PlannerReport {
    pub fn build(design: &DesignSnapshot, catalog: &Catalog) -> Self {
        let room = &design.room_dimensions_meters;
        let mut warnings = Vec::new();
        if !room.is_valid() {
            warnings.push("room dimensions must all be greater than 0".to_string());
        }
        for (i, err) in design.invalid_wall_features() {
            warnings.push(format!("wall feature #{}: {err}", i + 1));
        }

        let computed = speaker_layout(
            room,
            &design.speaker_configuration,
            &design.speaker_distance_adjustments,
        );
        let layout = apply_overrides(&computed, &design.manual_speaker_positions);
        let distance = listening_distance(&layout);

        let speaker = design
            .front_speaker_model()
            .and_then(|m| catalog.speaker(m));
        let receiver = catalog.receiver(&design.selected_receiver);
        let display = catalog.display(&design.selected_display);
        if speaker.is_none() || receiver.is_none() || display.is_none() {
            log::debug!(
                "incomplete equipment selection (speaker: {}, receiver: {}, display: {})",
                speaker.is_some(),
                receiver.is_some(),
                display.is_some()
            );
        }

        let sensitivity = speaker.and_then(|s| s.sensitivity).unwrap_or(0.0);
        let required_power_w = required_power_default(sensitivity, distance, design.target_spl);
        let amp_watts = receiver
            .and_then(|r| r.power.as_deref())
            .and_then(parse_power_rating)
            .unwrap_or(0.0);
        let max_spl_db = max_spl(sensitivity, amp_watts, distance);

        let channels = channels_driven(&design.speaker_configuration);
        let total_power_draw_w =
            estimate_total_power_draw(receiver, display, channels, DEFAULT_AVG_WATTS_PER_CHANNEL);

        let volume = room_volume(room);
        PlannerReport {
            room_volume_m3: volume,
            room_volume_display: design.unit_system.volume_from_cubic_meters(volume),
            modes: axial_modes(room),
            reflections: front_stage_reflections(
                room,
                &layout,
                design.front_speaker_height_meters,
                design.listener_ear_height_meters,
            ),
            layout,
            listening_distance_m: distance,
            required_power_w,
            max_spl_db,
            total_power_draw_w,
            channels_driven: channels,
            warnings,
        }
    }
}
