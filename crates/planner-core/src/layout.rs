//! Dolby-Atmos style speaker layout for a top-down floor plan.
//!
//! Every speaker is placed relative to a fixed listening position (LP) at a
//! fixed azimuth and a per-group nominal distance scaled by the user's
//! [`DistanceAdjustments`]. Height channels are drawn as horizontal
//! footprints around the LP since the plan has no elevation.

use crate::constants::*;
use crate::error::{PlannerError, Result};
use crate::room::RoomDimensions;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Speaker (or listener) slot in a layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpeakerRole {
    #[serde(rename = "lfe")]
    Lfe,
    #[serde(rename = "fl")]
    FrontLeft,
    #[serde(rename = "fr")]
    FrontRight,
    #[serde(rename = "c")]
    Center,
    #[serde(rename = "sl")]
    SurroundLeft,
    #[serde(rename = "sr")]
    SurroundRight,
    #[serde(rename = "sbl")]
    SurroundBackLeft,
    #[serde(rename = "sbr")]
    SurroundBackRight,
    #[serde(rename = "tml")]
    TopMiddleLeft,
    #[serde(rename = "tmr")]
    TopMiddleRight,
    #[serde(rename = "tfl")]
    TopFrontLeft,
    #[serde(rename = "tfr")]
    TopFrontRight,
    #[serde(rename = "trl")]
    TopRearLeft,
    #[serde(rename = "trr")]
    TopRearRight,
    #[serde(rename = "lp")]
    ListeningPosition,
}

impl SpeakerRole {
    pub const ALL: [SpeakerRole; 15] = [
        SpeakerRole::Lfe,
        SpeakerRole::FrontLeft,
        SpeakerRole::FrontRight,
        SpeakerRole::Center,
        SpeakerRole::SurroundLeft,
        SpeakerRole::SurroundRight,
        SpeakerRole::SurroundBackLeft,
        SpeakerRole::SurroundBackRight,
        SpeakerRole::TopMiddleLeft,
        SpeakerRole::TopMiddleRight,
        SpeakerRole::TopFrontLeft,
        SpeakerRole::TopFrontRight,
        SpeakerRole::TopRearLeft,
        SpeakerRole::TopRearRight,
        SpeakerRole::ListeningPosition,
    ];

    /// Short lowercase identifier (`"fl"`, `"tfr"`, `"lp"`, ...).
    pub fn id(self) -> &'static str {
        match self {
            SpeakerRole::Lfe => "lfe",
            SpeakerRole::FrontLeft => "fl",
            SpeakerRole::FrontRight => "fr",
            SpeakerRole::Center => "c",
            SpeakerRole::SurroundLeft => "sl",
            SpeakerRole::SurroundRight => "sr",
            SpeakerRole::SurroundBackLeft => "sbl",
            SpeakerRole::SurroundBackRight => "sbr",
            SpeakerRole::TopMiddleLeft => "tml",
            SpeakerRole::TopMiddleRight => "tmr",
            SpeakerRole::TopFrontLeft => "tfl",
            SpeakerRole::TopFrontRight => "tfr",
            SpeakerRole::TopRearLeft => "trl",
            SpeakerRole::TopRearRight => "trr",
            SpeakerRole::ListeningPosition => "lp",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.id() == id)
    }

    /// Marker label shown on the plan.
    pub fn label(self) -> &'static str {
        match self {
            SpeakerRole::Lfe => "LFE",
            SpeakerRole::FrontLeft => "FL",
            SpeakerRole::FrontRight => "FR",
            SpeakerRole::Center => "C",
            SpeakerRole::SurroundLeft => "SL",
            SpeakerRole::SurroundRight => "SR",
            SpeakerRole::SurroundBackLeft => "SBL",
            SpeakerRole::SurroundBackRight => "SBR",
            SpeakerRole::TopMiddleLeft => "TML",
            SpeakerRole::TopMiddleRight => "TMR",
            SpeakerRole::TopFrontLeft => "TFL",
            SpeakerRole::TopFrontRight => "TFR",
            SpeakerRole::TopRearLeft => "TRL",
            SpeakerRole::TopRearRight => "TRR",
            SpeakerRole::ListeningPosition => "LP",
        }
    }

    /// Distance-adjustment group; `None` for the subwoofer and the LP.
    pub fn group(self) -> Option<RoleGroup> {
        match self {
            SpeakerRole::FrontLeft | SpeakerRole::FrontRight => Some(RoleGroup::Front),
            SpeakerRole::Center => Some(RoleGroup::Center),
            SpeakerRole::SurroundLeft | SpeakerRole::SurroundRight => Some(RoleGroup::Surround),
            SpeakerRole::SurroundBackLeft | SpeakerRole::SurroundBackRight => Some(RoleGroup::Rear),
            SpeakerRole::TopFrontLeft | SpeakerRole::TopFrontRight => Some(RoleGroup::TopFront),
            SpeakerRole::TopMiddleLeft | SpeakerRole::TopMiddleRight => Some(RoleGroup::TopMiddle),
            SpeakerRole::TopRearLeft | SpeakerRole::TopRearRight => Some(RoleGroup::TopRear),
            SpeakerRole::Lfe | SpeakerRole::ListeningPosition => None,
        }
    }

    pub fn is_height(self) -> bool {
        self.group().is_some_and(RoleGroup::is_height)
    }
}

impl fmt::Display for SpeakerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Coarse speaker category sharing one distance multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoleGroup {
    Front,
    Center,
    Surround,
    Rear,
    TopFront,
    TopMiddle,
    TopRear,
}

impl RoleGroup {
    pub const ALL: [RoleGroup; 7] = [
        RoleGroup::Front,
        RoleGroup::Center,
        RoleGroup::Surround,
        RoleGroup::Rear,
        RoleGroup::TopFront,
        RoleGroup::TopMiddle,
        RoleGroup::TopRear,
    ];

    pub fn key(self) -> &'static str {
        match self {
            RoleGroup::Front => "front",
            RoleGroup::Center => "center",
            RoleGroup::Surround => "surround",
            RoleGroup::Rear => "rear",
            RoleGroup::TopFront => "topFront",
            RoleGroup::TopMiddle => "topMiddle",
            RoleGroup::TopRear => "topRear",
        }
    }

    pub fn is_height(self) -> bool {
        matches!(
            self,
            RoleGroup::TopFront | RoleGroup::TopMiddle | RoleGroup::TopRear
        )
    }
}

/// Per-group multipliers on the nominal LP distance, each in `[0.5, 2.0]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DistanceAdjustments {
    pub front: f64,
    pub center: f64,
    pub surround: f64,
    pub rear: f64,
    pub top_front: f64,
    pub top_middle: f64,
    pub top_rear: f64,
}

impl Default for DistanceAdjustments {
    fn default() -> Self {
        Self {
            front: ADJUSTMENT_DEFAULT,
            center: ADJUSTMENT_DEFAULT,
            surround: ADJUSTMENT_DEFAULT,
            rear: ADJUSTMENT_DEFAULT,
            top_front: ADJUSTMENT_DEFAULT,
            top_middle: ADJUSTMENT_DEFAULT,
            top_rear: ADJUSTMENT_DEFAULT,
        }
    }
}

impl DistanceAdjustments {
    /// Multiplier for `group`, clamped to the valid range. Unset/zero/non-finite
    /// values read as 1.0.
    pub fn get(&self, group: RoleGroup) -> f64 {
        let v = *self.slot(group);
        if v.is_finite() && v > 0.0 {
            v.clamp(ADJUSTMENT_MIN, ADJUSTMENT_MAX)
        } else {
            ADJUSTMENT_DEFAULT
        }
    }

    /// Store `value` for `group`, clamped to the valid multiplier range.
    pub fn set(&mut self, group: RoleGroup, value: f64) {
        let v = if value.is_finite() {
            value.clamp(ADJUSTMENT_MIN, ADJUSTMENT_MAX)
        } else {
            ADJUSTMENT_DEFAULT
        };
        *self.slot_mut(group) = v;
    }

    pub fn with(mut self, group: RoleGroup, value: f64) -> Self {
        self.set(group, value);
        self
    }

    fn slot(&self, group: RoleGroup) -> &f64 {
        match group {
            RoleGroup::Front => &self.front,
            RoleGroup::Center => &self.center,
            RoleGroup::Surround => &self.surround,
            RoleGroup::Rear => &self.rear,
            RoleGroup::TopFront => &self.top_front,
            RoleGroup::TopMiddle => &self.top_middle,
            RoleGroup::TopRear => &self.top_rear,
        }
    }

    fn slot_mut(&mut self, group: RoleGroup) -> &mut f64 {
        match group {
            RoleGroup::Front => &mut self.front,
            RoleGroup::Center => &mut self.center,
            RoleGroup::Surround => &mut self.surround,
            RoleGroup::Rear => &mut self.rear,
            RoleGroup::TopFront => &mut self.top_front,
            RoleGroup::TopMiddle => &mut self.top_middle,
            RoleGroup::TopRear => &mut self.top_rear,
        }
    }
}

/// Configurations offered by the planner UI.
pub const SUPPORTED_CONFIGURATIONS: &[&str] = &[
    "2.0", "2.1", "3.0", "3.1", "5.1", "5.1.2", "5.1.4", "7.1", "7.1.2", "7.1.4",
];

/// Parsed `"<mains>.<lfe>[.<height>]"` channel configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChannelConfiguration {
    pub mains: u32,
    pub lfe: u32,
    pub heights: Option<u32>,
}

impl ChannelConfiguration {
    pub const fn new(mains: u32, lfe: u32, heights: Option<u32>) -> Self {
        Self {
            mains,
            lfe,
            heights,
        }
    }

    /// Tolerant parse used by the layout: malformed tokens count as absent,
    /// so an unrecognised string simply activates nothing.
    pub fn parse_lenient(s: &str) -> Self {
        let mut tokens = s.trim().split('.').map(|t| t.trim().parse::<u32>().ok());
        let mains = tokens.next().flatten().unwrap_or(0);
        let lfe = tokens.next().flatten().unwrap_or(0);
        let heights = tokens.next().flatten();
        Self {
            mains,
            lfe,
            heights,
        }
    }

    pub fn has_front_pair(&self) -> bool {
        self.mains >= 2
    }
    pub fn has_center(&self) -> bool {
        self.mains >= 3
    }
    pub fn has_surrounds(&self) -> bool {
        self.mains >= 5
    }
    pub fn has_rear_surrounds(&self) -> bool {
        self.mains >= 7
    }
    pub fn has_subwoofer(&self) -> bool {
        self.lfe > 0
    }
    pub fn has_top_middle(&self) -> bool {
        matches!(self.heights, Some(h) if (2..4).contains(&h))
    }
    pub fn has_top_front_rear(&self) -> bool {
        matches!(self.heights, Some(h) if h >= 4)
    }

    /// Active roles in layout order, excluding the listening position.
    pub fn active_roles(&self) -> SmallVec<[SpeakerRole; 16]> {
        use SpeakerRole::*;
        let mut roles = SmallVec::new();
        if self.has_subwoofer() {
            roles.push(Lfe);
        }
        if self.has_front_pair() {
            roles.extend([FrontLeft, FrontRight]);
        }
        if self.has_center() {
            roles.push(Center);
        }
        if self.has_surrounds() {
            roles.extend([SurroundLeft, SurroundRight]);
        }
        if self.has_rear_surrounds() {
            roles.extend([SurroundBackLeft, SurroundBackRight]);
        }
        if self.has_top_middle() {
            roles.extend([TopMiddleLeft, TopMiddleRight]);
        }
        if self.has_top_front_rear() {
            roles.extend([TopFrontLeft, TopFrontRight, TopRearLeft, TopRearRight]);
        }
        roles
    }

    /// Amplified channels (mains + heights), never fewer than two.
    pub fn channels_driven(&self) -> u32 {
        self.mains
            .saturating_add(self.heights.unwrap_or(0))
            .max(MIN_CHANNELS_DRIVEN)
    }
}

impl fmt::Display for ChannelConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.mains, self.lfe)?;
        if let Some(h) = self.heights {
            write!(f, ".{h}")?;
        }
        Ok(())
    }
}

impl FromStr for ChannelConfiguration {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || PlannerError::InvalidConfiguration(s.to_string());
        let tokens: Vec<&str> = s.trim().split('.').collect();
        if !(2..=3).contains(&tokens.len()) {
            return Err(invalid());
        }
        let mut nums = tokens.iter().map(|t| t.parse::<u32>().map_err(|_| invalid()));
        let mains = nums.next().ok_or_else(invalid)??;
        let lfe = nums.next().ok_or_else(invalid)??;
        let heights = nums.next().transpose()?;
        Ok(Self {
            mains,
            lfe,
            heights,
        })
    }
}

/// One marker on the plan: a speaker or the listening position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerPlacement {
    pub id: String,
    pub label: String,
    pub role: SpeakerRole,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle_deg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_listening_position: bool,
}

impl SpeakerPlacement {
    pub fn new(role: SpeakerRole, position: DVec2) -> Self {
        Self {
            id: role.id().to_string(),
            label: role.label().to_string(),
            role,
            x: position.x,
            y: position.y,
            angle_deg: None,
            note: None,
            is_listening_position: role == SpeakerRole::ListeningPosition,
        }
    }

    fn angled(role: SpeakerRole, position: DVec2, angle_deg: f64) -> Self {
        Self {
            angle_deg: Some(angle_deg),
            ..Self::new(role, position)
        }
    }

    fn height(role: SpeakerRole, position: DVec2, note: &str) -> Self {
        Self {
            note: Some(note.to_string()),
            ..Self::new(role, position)
        }
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

/// Point at `distance` from `lp` along an azimuth measured from the screen
/// axis; the screen wall is at `y = 0`, so forward is `-y`.
#[inline]
pub fn polar_from_lp(lp: DVec2, distance: f64, angle_deg: f64) -> DVec2 {
    let a = angle_deg.to_radians();
    DVec2::new(lp.x + distance * a.sin(), lp.y - distance * a.cos())
}

/// The fixed listening position for a room.
#[inline]
pub fn listening_point(room: &RoomDimensions) -> DVec2 {
    DVec2::new(
        room.width * LP_WIDTH_FRACTION,
        room.length * LP_LENGTH_FRACTION,
    )
}

/// Keep a marker `WALL_MARGIN_M` inside the walls. Rooms narrower than twice
/// the margin pin the marker at the margin instead of panicking.
#[inline]
fn clamp_into(v: f64, dimension: f64) -> f64 {
    WALL_MARGIN_M.max(v.min(dimension - WALL_MARGIN_M))
}

/// Lay out a configuration given as a raw string (tolerant of bad input).
pub fn speaker_layout(
    room: &RoomDimensions,
    configuration: &str,
    adjustments: &DistanceAdjustments,
) -> Vec<SpeakerPlacement> {
    calculate_speaker_positions(
        room,
        &ChannelConfiguration::parse_lenient(configuration),
        adjustments,
    )
}

/// Compute marker positions for every active role plus the LP (last).
///
/// Returns an empty list when the floor plan has no positive width/length.
pub fn calculate_speaker_positions(
    room: &RoomDimensions,
    config: &ChannelConfiguration,
    adjustments: &DistanceAdjustments,
) -> Vec<SpeakerPlacement> {
    use SpeakerRole::*;

    if !room.has_floor_plan() {
        return Vec::new();
    }
    let (w, l) = (room.width, room.length);
    let lp = listening_point(room);

    let front_base = FRONT_DISTANCE.distance(w, l);
    let front = front_base * adjustments.get(RoleGroup::Front);
    let center = front_base * adjustments.get(RoleGroup::Center);
    let surround = SURROUND_DISTANCE.distance(w, l) * adjustments.get(RoleGroup::Surround);
    let rear = REAR_DISTANCE.distance(w, l) * adjustments.get(RoleGroup::Rear);

    let tm_dx = w * TOP_MIDDLE_X_FRACTION * adjustments.get(RoleGroup::TopMiddle);
    let tf = adjustments.get(RoleGroup::TopFront);
    let tf_d = DVec2::new(
        w * TOP_FRONT_REAR_X_FRACTION * tf,
        l * TOP_FRONT_REAR_Y_FRACTION * tf,
    );
    let tr = adjustments.get(RoleGroup::TopRear);
    let tr_d = DVec2::new(
        w * TOP_FRONT_REAR_X_FRACTION * tr,
        l * TOP_FRONT_REAR_Y_FRACTION * tr,
    );

    let mut speakers: Vec<SpeakerPlacement> = config
        .active_roles()
        .into_iter()
        .map(|role| match role {
            Lfe => SpeakerPlacement::new(
                Lfe,
                DVec2::new(w * LFE_POSITION_FRACTION[0], l * LFE_POSITION_FRACTION[1]),
            ),
            FrontLeft => SpeakerPlacement::angled(
                role,
                polar_from_lp(lp, front, -FRONT_ANGLE_DEG),
                -FRONT_ANGLE_DEG,
            ),
            FrontRight => SpeakerPlacement::angled(
                role,
                polar_from_lp(lp, front, FRONT_ANGLE_DEG),
                FRONT_ANGLE_DEG,
            ),
            Center => SpeakerPlacement::angled(role, polar_from_lp(lp, center, 0.0), 0.0),
            SurroundLeft => SpeakerPlacement::angled(
                role,
                polar_from_lp(lp, surround, -SURROUND_ANGLE_DEG),
                -SURROUND_ANGLE_DEG,
            ),
            SurroundRight => SpeakerPlacement::angled(
                role,
                polar_from_lp(lp, surround, SURROUND_ANGLE_DEG),
                SURROUND_ANGLE_DEG,
            ),
            SurroundBackLeft => SpeakerPlacement::angled(
                role,
                polar_from_lp(lp, rear, -REAR_ANGLE_DEG),
                -REAR_ANGLE_DEG,
            ),
            SurroundBackRight => SpeakerPlacement::angled(
                role,
                polar_from_lp(lp, rear, REAR_ANGLE_DEG),
                REAR_ANGLE_DEG,
            ),
            TopMiddleLeft => {
                SpeakerPlacement::height(role, lp - DVec2::new(tm_dx, 0.0), "Height Channel")
            }
            TopMiddleRight => {
                SpeakerPlacement::height(role, lp + DVec2::new(tm_dx, 0.0), "Height Channel")
            }
            TopFrontLeft => SpeakerPlacement::height(
                role,
                DVec2::new(lp.x - tf_d.x, lp.y - tf_d.y),
                "Height Channel (Front)",
            ),
            TopFrontRight => SpeakerPlacement::height(
                role,
                DVec2::new(lp.x + tf_d.x, lp.y - tf_d.y),
                "Height Channel (Front)",
            ),
            TopRearLeft => SpeakerPlacement::height(
                role,
                DVec2::new(lp.x - tr_d.x, lp.y + tr_d.y),
                "Height Channel (Rear)",
            ),
            TopRearRight => SpeakerPlacement::height(
                role,
                DVec2::new(lp.x + tr_d.x, lp.y + tr_d.y),
                "Height Channel (Rear)",
            ),
            ListeningPosition => SpeakerPlacement::new(role, lp),
        })
        .collect();

    speakers.push(SpeakerPlacement::new(ListeningPosition, lp));

    for sp in &mut speakers {
        sp.x = clamp_into(sp.x, w);
        sp.y = clamp_into(sp.y, l);
    }
    log::debug!(
        "layout {config} in {w:.2}x{l:.2} m: {} markers",
        speakers.len()
    );
    speakers
}

/// The LP marker of a layout, if present.
pub fn listening_position(layout: &[SpeakerPlacement]) -> Option<&SpeakerPlacement> {
    layout.iter().find(|sp| sp.is_listening_position)
}

pub fn find_role(layout: &[SpeakerPlacement], role: SpeakerRole) -> Option<&SpeakerPlacement> {
    layout.iter().find(|sp| sp.role == role)
}

/// Partial manual position for one marker (e.g. after a drag on the plan).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

/// Manual overrides keyed by speaker id (`"fl"`, `"lp"`, ...).
pub type ManualOverrides = BTreeMap<String, PositionOverride>;

/// New layout with manual coordinates replacing computed ones.
pub fn apply_overrides(
    layout: &[SpeakerPlacement],
    overrides: &ManualOverrides,
) -> Vec<SpeakerPlacement> {
    layout
        .iter()
        .map(|sp| {
            let mut out = sp.clone();
            if let Some(o) = overrides.get(&sp.id) {
                out.x = o.x.filter(|v| v.is_finite()).unwrap_or(sp.x);
                out.y = o.y.filter(|v| v.is_finite()).unwrap_or(sp.y);
            }
            out
        })
        .collect()
}
