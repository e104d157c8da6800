//! First-reflection points by the image-source method.
//!
//! For each of the six room surfaces the listener is mirrored across the
//! surface plane; the straight line from the speaker to that image crosses
//! the real plane at the reflection point. Points are not bounds-checked
//! against the physical surface rectangle, so extreme placements can yield
//! coordinates outside the wall.

use crate::layout::{find_role, listening_position, SpeakerPlacement, SpeakerRole};
use crate::room::RoomDimensions;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Surface {
    Floor,
    Ceiling,
    #[serde(rename = "Left Wall")]
    LeftWall,
    #[serde(rename = "Right Wall")]
    RightWall,
    #[serde(rename = "Front Wall")]
    FrontWall,
    #[serde(rename = "Rear Wall")]
    RearWall,
}

impl Surface {
    pub const ALL: [Surface; 6] = [
        Surface::Floor,
        Surface::Ceiling,
        Surface::LeftWall,
        Surface::RightWall,
        Surface::FrontWall,
        Surface::RearWall,
    ];

    /// Axis names of the 2D coordinates reported for this surface.
    pub fn plane_axes(self) -> (&'static str, &'static str) {
        match self {
            Surface::Floor | Surface::Ceiling => ("x", "y"),
            Surface::LeftWall | Surface::RightWall => ("y", "z"),
            Surface::FrontWall | Surface::RearWall => ("x", "z"),
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Surface::Floor => "Floor",
            Surface::Ceiling => "Ceiling",
            Surface::LeftWall => "Left Wall",
            Surface::RightWall => "Right Wall",
            Surface::FrontWall => "Front Wall",
            Surface::RearWall => "Rear Wall",
        })
    }
}

/// A reflection point expressed in the surface's own plane coordinates:
/// `(x, y)` for floor/ceiling, `(y, z)` for side walls, `(x, z)` for the
/// front and rear walls.
///
/// In JSON the two coordinates carry their axis names, e.g.
/// `{"surface":"Left Wall","y":2.1,"z":1.15}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "NamedPoint", try_from = "NamedPoint")]
pub struct ReflectionPoint {
    pub surface: Surface,
    pub point: DVec2,
}

#[derive(Serialize, Deserialize)]
struct NamedPoint {
    surface: Surface,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    z: Option<f64>,
}

impl From<ReflectionPoint> for NamedPoint {
    fn from(p: ReflectionPoint) -> Self {
        let (a, b) = (Some(p.point.x), Some(p.point.y));
        let (x, y, z) = match p.surface {
            Surface::Floor | Surface::Ceiling => (a, b, None),
            Surface::LeftWall | Surface::RightWall => (None, a, b),
            Surface::FrontWall | Surface::RearWall => (a, None, b),
        };
        NamedPoint {
            surface: p.surface,
            x,
            y,
            z,
        }
    }
}

impl TryFrom<NamedPoint> for ReflectionPoint {
    type Error = String;

    fn try_from(n: NamedPoint) -> std::result::Result<Self, Self::Error> {
        let pair = match n.surface {
            Surface::Floor | Surface::Ceiling => n.x.zip(n.y),
            Surface::LeftWall | Surface::RightWall => n.y.zip(n.z),
            Surface::FrontWall | Surface::RearWall => n.x.zip(n.z),
        };
        let (a, b) = pair.ok_or_else(|| {
            let (a, b) = n.surface.plane_axes();
            format!("{} reflection point needs `{a}` and `{b}`", n.surface)
        })?;
        Ok(ReflectionPoint {
            surface: n.surface,
            point: DVec2::new(a, b),
        })
    }
}

/// Reflection points per surface. Each list holds at most one point today.
pub type SurfacePoints = SmallVec<[ReflectionPoint; 1]>;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflectionPointSet {
    pub floor: SurfacePoints,
    pub ceiling: SurfacePoints,
    pub left_wall: SurfacePoints,
    pub right_wall: SurfacePoints,
    pub front_wall: SurfacePoints,
    pub rear_wall: SurfacePoints,
}

impl ReflectionPointSet {
    pub fn surface(&self, surface: Surface) -> &[ReflectionPoint] {
        match surface {
            Surface::Floor => &self.floor,
            Surface::Ceiling => &self.ceiling,
            Surface::LeftWall => &self.left_wall,
            Surface::RightWall => &self.right_wall,
            Surface::FrontWall => &self.front_wall,
            Surface::RearWall => &self.rear_wall,
        }
    }

    fn surface_mut(&mut self, surface: Surface) -> &mut SurfacePoints {
        match surface {
            Surface::Floor => &mut self.floor,
            Surface::Ceiling => &mut self.ceiling,
            Surface::LeftWall => &mut self.left_wall,
            Surface::RightWall => &mut self.right_wall,
            Surface::FrontWall => &mut self.front_wall,
            Surface::RearWall => &mut self.rear_wall,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReflectionPoint> {
        Surface::ALL.into_iter().flat_map(|s| self.surface(s).iter())
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Interpolation parameter along speaker→listener for a plane where the two
/// sit `ds` and `dl` away from it. `None` when the distances are equal or the
/// ratio is not finite.
#[inline]
fn image_parameter(ds: f64, dl: f64) -> Option<f64> {
    if ds == dl {
        return None;
    }
    let t = ds / (ds + dl);
    t.is_finite().then_some(t)
}

/// Compute the first-reflection point on each of the six surfaces.
pub fn first_reflection_points(
    room: &RoomDimensions,
    speaker: DVec3,
    listener: DVec3,
) -> ReflectionPointSet {
    let mut set = ReflectionPointSet::default();
    let (w, l, h) = (room.width, room.length, room.height);
    let (s, r) = (speaker, listener);
    let along = |t: f64| s + (r - s) * t;

    // (surface, speaker distance to plane, listener distance to plane)
    let planes = [
        (Surface::Floor, s.z, r.z),
        (Surface::Ceiling, h - s.z, h - r.z),
        (Surface::LeftWall, s.x, r.x),
        (Surface::RightWall, w - s.x, w - r.x),
        (Surface::FrontWall, s.y, r.y),
        (Surface::RearWall, l - s.y, l - r.y),
    ];

    for (surface, ds, dl) in planes {
        let Some(t) = image_parameter(ds, dl) else {
            log::trace!("no {surface} reflection: speaker and listener equidistant");
            continue;
        };
        let p = along(t);
        let point = match surface {
            Surface::Floor | Surface::Ceiling => DVec2::new(p.x, p.y),
            Surface::LeftWall | Surface::RightWall => DVec2::new(p.y, p.z),
            Surface::FrontWall | Surface::RearWall => DVec2::new(p.x, p.z),
        };
        if point.is_finite() {
            set.surface_mut(surface)
                .push(ReflectionPoint { surface, point });
        }
    }
    set
}

/// Reflection analysis for one speaker of a layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerReflections {
    pub role: SpeakerRole,
    pub speaker_label: String,
    pub points: ReflectionPointSet,
}

/// Reflections for the front stage (FL, FR, C) of a layout, with speakers at
/// `speaker_height` and the listener's ears at `ear_height`.
///
/// Empty when the room has no valid volume or the layout has no LP.
pub fn front_stage_reflections(
    room: &RoomDimensions,
    layout: &[SpeakerPlacement],
    speaker_height: f64,
    ear_height: f64,
) -> Vec<SpeakerReflections> {
    if !room.is_valid() {
        return Vec::new();
    }
    let Some(lp) = listening_position(layout) else {
        return Vec::new();
    };
    let listener = lp.position().extend(ear_height);

    [
        SpeakerRole::FrontLeft,
        SpeakerRole::FrontRight,
        SpeakerRole::Center,
    ]
    .into_iter()
    .filter_map(|role| find_role(layout, role))
    .map(|sp| SpeakerReflections {
        role: sp.role,
        speaker_label: sp.label.clone(),
        points: first_reflection_points(room, sp.position().extend(speaker_height), listener),
    })
    .collect()
}
