//! Saved designs: the opaque snapshot a storage collaborator persists.
//!
//! The engine only defines the JSON shape; where it is stored (browser
//! localStorage, a file) is up to the frontend.

use crate::constants::*;
use crate::error::{PlannerError, Result};
use crate::layout::{DistanceAdjustments, ManualOverrides};
use crate::modes::RoomAxis;
use crate::room::{RoomDimensions, UnitSystem, WallFeature};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mode the user highlighted on the plan, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModeSelection {
    pub dimension: Option<RoomAxis>,
    pub order: Option<u32>,
}

/// Everything needed to restore a planner session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignSnapshot {
    pub room_name: String,
    pub unit_system: UnitSystem,
    pub room_dimensions_meters: RoomDimensions,
    pub listener_ear_height_meters: f64,
    pub front_speaker_height_meters: f64,
    pub selected_mode_for_visualization: ModeSelection,
    pub wall_features: Vec<WallFeature>,
    pub speaker_configuration: String,
    pub speaker_distance_adjustments: DistanceAdjustments,
    pub manual_speaker_positions: ManualOverrides,
    /// Speaker model per role key (`"frontLR"`, `"center"`, ...).
    pub selected_speakers: BTreeMap<String, String>,
    pub selected_receiver: String,
    pub selected_display: String,
    #[serde(rename = "targetSPL")]
    pub target_spl: f64,
}

impl Default for DesignSnapshot {
    fn default() -> Self {
        Self {
            room_name: DEFAULT_ROOM_NAME.to_string(),
            unit_system: UnitSystem::Meters,
            room_dimensions_meters: RoomDimensions::default(),
            listener_ear_height_meters: DEFAULT_EAR_HEIGHT_M,
            front_speaker_height_meters: DEFAULT_FRONT_SPEAKER_HEIGHT_M,
            selected_mode_for_visualization: ModeSelection::default(),
            wall_features: Vec::new(),
            speaker_configuration: DEFAULT_CONFIGURATION.to_string(),
            speaker_distance_adjustments: DistanceAdjustments::default(),
            manual_speaker_positions: ManualOverrides::new(),
            selected_speakers: BTreeMap::new(),
            selected_receiver: String::new(),
            selected_display: String::new(),
            target_spl: DEFAULT_TARGET_SPL_DB,
        }
    }
}

impl DesignSnapshot {
    /// Role key under which the front L/R speaker model is selected.
    pub const FRONT_LR_KEY: &'static str = "frontLR";

    pub fn front_speaker_model(&self) -> Option<&str> {
        self.selected_speakers
            .get(Self::FRONT_LR_KEY)
            .map(String::as_str)
            .filter(|m| !m.is_empty())
    }

    /// Wall features that do not fit the current room, with the reason.
    pub fn invalid_wall_features(&self) -> Vec<(usize, PlannerError)> {
        self.wall_features
            .iter()
            .enumerate()
            .filter_map(|(i, f)| f.validate(&self.room_dimensions_meters).err().map(|e| (i, e)))
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A named snapshot in the design library.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedDesign {
    pub id: String,
    pub name: String,
    /// Unix epoch milliseconds at save time.
    pub saved_at_ms: u64,
    pub data: DesignSnapshot,
}

/// Ordered list of saved designs, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesignLibrary {
    designs: Vec<SavedDesign>,
}

impl DesignLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `data` under `name`. The id is `design-<saved_at_ms>`, with a
    /// numeric suffix if that id is already taken.
    pub fn save(&mut self, name: &str, saved_at_ms: u64, data: DesignSnapshot) -> Result<&SavedDesign> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlannerError::InvalidDesignName);
        }
        let base = format!("design-{saved_at_ms}");
        let mut id = base.clone();
        let mut n = 1;
        while self.find(&id).is_some() {
            id = format!("{base}-{n}");
            n += 1;
        }
        log::debug!("saving design {name:?} as {id}");
        self.designs.push(SavedDesign {
            id,
            name: name.to_string(),
            saved_at_ms,
            data,
        });
        Ok(&self.designs[self.designs.len() - 1])
    }

    pub fn find(&self, id: &str) -> Option<&SavedDesign> {
        self.designs.iter().find(|d| d.id == id)
    }

    /// Snapshot of the design with `id`.
    pub fn load(&self, id: &str) -> Result<DesignSnapshot> {
        self.find(id)
            .map(|d| d.data.clone())
            .ok_or_else(|| PlannerError::DesignNotFound(id.to_string()))
    }

    /// Remove the design with `id`; returns the removed entry.
    pub fn delete(&mut self, id: &str) -> Result<SavedDesign> {
        let pos = self
            .designs
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| PlannerError::DesignNotFound(id.to_string()))?;
        Ok(self.designs.remove(pos))
    }

    pub fn designs(&self) -> &[SavedDesign] {
        &self.designs
    }

    pub fn len(&self) -> usize {
        self.designs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.designs.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
