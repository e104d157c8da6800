// JSON in, JSON out. Everything here is plain Rust so the host-side tests can
// include this file directly; the wasm exports in lib.rs are thin wrappers.

use glam::DVec3;
use planner_core::{
    apply_overrides, auto_optimize_placement, axial_modes_with_count, first_reflection_points,
    Catalog, DesignLibrary, DesignSnapshot, DistanceAdjustments, ManualOverrides, PlannerReport,
    RoomDimensions, SpeakerPlacement, DEFAULT_CONFIGURATION, DEFAULT_MODE_COUNT,
};
use serde::{Deserialize, Serialize};

pub type BridgeResult = planner_core::Result<String>;

fn default_mode_count() -> usize {
    DEFAULT_MODE_COUNT
}

fn default_configuration() -> String {
    DEFAULT_CONFIGURATION.to_string()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModesRequest {
    pub room: RoomDimensions,
    #[serde(default = "default_mode_count")]
    pub count: usize,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRequest {
    pub room: RoomDimensions,
    #[serde(default = "default_configuration")]
    pub configuration: String,
    #[serde(default)]
    pub adjustments: DistanceAdjustments,
    #[serde(default)]
    pub manual_positions: ManualOverrides,
}

impl LayoutRequest {
    fn layout_with(&self, adjustments: &DistanceAdjustments) -> Vec<SpeakerPlacement> {
        let computed = planner_core::speaker_layout(&self.room, &self.configuration, adjustments);
        apply_overrides(&computed, &self.manual_positions)
    }
}

/// Speaker and listener as `[x, y, z]` in meters.
#[derive(Deserialize)]
pub struct ReflectionRequest {
    pub room: RoomDimensions,
    pub speaker: DVec3,
    pub listener: DVec3,
}

#[derive(Deserialize)]
pub struct ReportRequest {
    pub design: DesignSnapshot,
    #[serde(default)]
    pub catalog: Catalog,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeResponse {
    pub adjustments: DistanceAdjustments,
    pub layout: Vec<SpeakerPlacement>,
    pub changed: bool,
}

/// Library listing entry; the snapshot itself stays in storage.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSummary<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub saved_at_ms: u64,
}

pub fn room_modes(request: &str) -> BridgeResult {
    let req: ModesRequest = serde_json::from_str(request)?;
    let modes = axial_modes_with_count(&req.room, req.count);
    Ok(serde_json::to_string(&modes)?)
}

pub fn speaker_layout(request: &str) -> BridgeResult {
    let req: LayoutRequest = serde_json::from_str(request)?;
    Ok(serde_json::to_string(&req.layout_with(&req.adjustments))?)
}

pub fn reflection_points(request: &str) -> BridgeResult {
    let req: ReflectionRequest = serde_json::from_str(request)?;
    let points = first_reflection_points(&req.room, req.speaker, req.listener);
    Ok(serde_json::to_string(&points)?)
}

/// Optimizes against the computed layout (manual drags ignored), then
/// returns the re-laid-out plan with the drags re-applied.
pub fn auto_optimize(request: &str) -> BridgeResult {
    let req: LayoutRequest = serde_json::from_str(request)?;
    let computed = planner_core::speaker_layout(&req.room, &req.configuration, &req.adjustments);
    let adjustments = auto_optimize_placement(&req.room, &computed, &req.adjustments);
    let response = OptimizeResponse {
        changed: adjustments != req.adjustments,
        layout: req.layout_with(&adjustments),
        adjustments,
    };
    Ok(serde_json::to_string(&response)?)
}

pub fn planner_report(request: &str) -> BridgeResult {
    let req: ReportRequest = serde_json::from_str(request)?;
    let report = PlannerReport::build(&req.design, &req.catalog);
    Ok(serde_json::to_string(&report)?)
}

/// Decode the stored library. Missing or unreadable data starts a fresh one.
pub fn decode_library(raw: Option<&str>) -> DesignLibrary {
    match raw.map(DesignLibrary::from_json) {
        None => DesignLibrary::new(),
        Some(Ok(library)) => library,
        Some(Err(e)) => {
            log::warn!("discarding unreadable design library: {e}");
            DesignLibrary::new()
        }
    }
}

pub fn list_designs(library: &DesignLibrary) -> BridgeResult {
    let summaries: Vec<DesignSummary<'_>> = library
        .designs()
        .iter()
        .map(|d| DesignSummary {
            id: &d.id,
            name: &d.name,
            saved_at_ms: d.saved_at_ms,
        })
        .collect();
    Ok(serde_json::to_string(&summaries)?)
}

/// Save `design` (snapshot JSON) under `name`; returns the new entry's id.
pub fn save_design(
    library: &mut DesignLibrary,
    name: &str,
    saved_at_ms: u64,
    design: &str,
) -> BridgeResult {
    let snapshot = DesignSnapshot::from_json(design)?;
    let saved = library.save(name, saved_at_ms, snapshot)?;
    Ok(saved.id.clone())
}

pub fn load_design(library: &DesignLibrary, id: &str) -> BridgeResult {
    library.load(id)?.to_json()
}

/// Remove a design; returns the remaining listing.
pub fn delete_design(library: &mut DesignLibrary, id: &str) -> BridgeResult {
    let removed = library.delete(id)?;
    log::info!("deleted design {:?}", removed.name);
    list_designs(library)
}
