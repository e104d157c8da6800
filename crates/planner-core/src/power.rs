//! Room volume, amplifier power and SPL estimates.
//!
//! All functions are total: missing or non-positive inputs produce `0.0`
//! (shown as "N/A" by the frontends) or fall back to fixed constants.

use crate::catalog::{DisplayModel, ReceiverModel};
use crate::constants::*;
use crate::layout::{
    find_role, listening_position, ChannelConfiguration, SpeakerPlacement, SpeakerRole,
};
use crate::room::RoomDimensions;

#[inline]
fn usable(v: f64) -> bool {
    v.is_finite() && v != 0.0
}

#[inline]
fn positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Room volume in cubic meters; 0 for incomplete dimensions.
pub fn room_volume(room: &RoomDimensions) -> f64 {
    if !room.is_valid() {
        return 0.0;
    }
    let v = room.width * room.length * room.height;
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

/// SPL drop from the 1 m reference to `distance_m` (inverse-square law).
#[inline]
pub fn distance_loss_db(distance_m: f64) -> f64 {
    20.0 * distance_m.log10()
}

/// Watts per channel needed to reach `target_spl` plus `headroom_db` at
/// `distance_m` from a speaker of the given 1 W / 1 m sensitivity.
///
/// Returns 0 when sensitivity, distance or target is missing (zero), or the
/// distance is not positive.
pub fn required_power(sensitivity: f64, distance_m: f64, target_spl: f64, headroom_db: f64) -> f64 {
    if !usable(sensitivity) || !positive(distance_m) || !usable(target_spl) {
        return 0.0;
    }
    let headroom = if headroom_db.is_finite() { headroom_db } else { 0.0 };
    let needed_at_1m = target_spl + headroom + distance_loss_db(distance_m);
    let watts = 10f64.powf((needed_at_1m - sensitivity) / 10.0);
    if watts.is_finite() {
        watts
    } else {
        0.0
    }
}

/// [`required_power`] with the default 3 dB headroom.
pub fn required_power_default(sensitivity: f64, distance_m: f64, target_spl: f64) -> f64 {
    required_power(sensitivity, distance_m, target_spl, DEFAULT_HEADROOM_DB)
}

/// Maximum SPL at `distance_m` from a speaker driven with `amp_watts`.
///
/// Returns 0 when any input is missing or the watts/distance are not positive.
pub fn max_spl(sensitivity: f64, amp_watts: f64, distance_m: f64) -> f64 {
    if !usable(sensitivity) || !positive(amp_watts) || !positive(distance_m) {
        return 0.0;
    }
    sensitivity + 10.0 * amp_watts.log10() - distance_loss_db(distance_m)
}

/// First decimal number in a rating string: `"125W x 7"` → `125.0`.
pub fn parse_power_rating(rating: &str) -> Option<f64> {
    let start = rating.find(|c: char| c.is_ascii_digit())?;
    let rest = &rating[start..];
    let int_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    // a fractional part only counts when digits follow the dot
    let frac_len = rest[int_end..]
        .strip_prefix('.')
        .map(|frac| frac.find(|c: char| !c.is_ascii_digit()).unwrap_or(frac.len()))
        .filter(|n| *n > 0)
        .map_or(0, |n| n + 1);
    rest[..int_end + frac_len].parse().ok()
}

/// Estimated wall-socket draw of the receiver and display, rounded to whole
/// watts. Missing catalog fields fall back to fixed estimates.
pub fn estimate_total_power_draw(
    avr: Option<&ReceiverModel>,
    display: Option<&DisplayModel>,
    channels_driven: u32,
    avg_watts_per_channel: f64,
) -> f64 {
    let total = avr_draw(avr, channels_driven, avg_watts_per_channel) + display_draw(display);
    total.round()
}

fn avr_draw(avr: Option<&ReceiverModel>, channels_driven: u32, avg_watts_per_channel: f64) -> f64 {
    let Some(avr) = avr else {
        return AVR_FALLBACK_W;
    };
    if let Some(w) = avr.typical_power_consumption_w.filter(|w| positive(*w)) {
        return w;
    }
    let Some(rating) = avr.power.as_deref().filter(|p| !p.trim().is_empty()) else {
        return AVR_FALLBACK_W;
    };
    let rated = parse_power_rating(rating).unwrap_or(0.0);
    let mut per_channel = if avg_watts_per_channel.is_finite() {
        avg_watts_per_channel.max(0.0)
    } else {
        DEFAULT_AVG_WATTS_PER_CHANNEL
    };
    if rated > 0.0 {
        per_channel = per_channel.min(rated);
    }
    channels_driven as f64 * per_channel / AMP_EFFICIENCY + AVR_IDLE_W
}

fn display_draw(display: Option<&DisplayModel>) -> f64 {
    let Some(display) = display else {
        return DISPLAY_FALLBACK_W;
    };
    if let Some(w) = display.typical_power_consumption_w.filter(|w| positive(*w)) {
        return w;
    }
    match display.display_type.as_deref() {
        Some("Projector") => PROJECTOR_FALLBACK_W,
        Some(t) if t.contains("TV") => TV_FALLBACK_W,
        _ => DISPLAY_FALLBACK_W,
    }
}

/// Channels the receiver drives for a configuration string (at least two).
pub fn channels_driven(configuration: &str) -> u32 {
    ChannelConfiguration::parse_lenient(configuration).channels_driven()
}

/// LP-to-center distance (or LP-to-FL without a center) on the floor plan;
/// [`DEFAULT_LISTENING_DISTANCE_M`] when either marker is missing.
pub fn listening_distance(layout: &[SpeakerPlacement]) -> f64 {
    let reference =
        find_role(layout, SpeakerRole::Center).or_else(|| find_role(layout, SpeakerRole::FrontLeft));
    match (listening_position(layout), reference) {
        (Some(lp), Some(sp)) => lp.position().distance(sp.position()),
        _ => DEFAULT_LISTENING_DISTANCE_M,
    }
}
