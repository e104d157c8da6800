#![cfg(target_arch = "wasm32")]
use std::fmt::Display;
use wasm_bindgen::prelude::*;

mod bridge;
mod constants;
mod storage;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::CONSOLE_LOG_LEVEL).ok();
    log::info!("planner-web starting");
    Ok(())
}

fn js_err(e: impl Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn storage_err(e: anyhow::Error) -> JsValue {
    log::error!("{e:#}");
    JsValue::from_str(&format!("{e:#}"))
}

#[wasm_bindgen(js_name = roomModes)]
pub fn room_modes(request: &str) -> Result<String, JsValue> {
    bridge::room_modes(request).map_err(js_err)
}

#[wasm_bindgen(js_name = speakerLayout)]
pub fn speaker_layout(request: &str) -> Result<String, JsValue> {
    bridge::speaker_layout(request).map_err(js_err)
}

#[wasm_bindgen(js_name = reflectionPoints)]
pub fn reflection_points(request: &str) -> Result<String, JsValue> {
    bridge::reflection_points(request).map_err(js_err)
}

#[wasm_bindgen(js_name = autoOptimize)]
pub fn auto_optimize(request: &str) -> Result<String, JsValue> {
    bridge::auto_optimize(request).map_err(js_err)
}

#[wasm_bindgen(js_name = plannerReport)]
pub fn planner_report(request: &str) -> Result<String, JsValue> {
    bridge::planner_report(request).map_err(js_err)
}

#[wasm_bindgen(js_name = listDesigns)]
pub fn list_designs() -> Result<String, JsValue> {
    let library = storage::read_library().map_err(storage_err)?;
    bridge::list_designs(&library).map_err(js_err)
}

/// Saves the snapshot and returns the new design id.
#[wasm_bindgen(js_name = saveDesign)]
pub fn save_design(name: &str, design: &str) -> Result<String, JsValue> {
    let mut library = storage::read_library().map_err(storage_err)?;
    let id = bridge::save_design(&mut library, name, storage::now_ms(), design).map_err(js_err)?;
    storage::write_library(&library).map_err(storage_err)?;
    log::info!("saved design {name:?} ({id})");
    Ok(id)
}

#[wasm_bindgen(js_name = loadDesign)]
pub fn load_design(id: &str) -> Result<String, JsValue> {
    let library = storage::read_library().map_err(storage_err)?;
    bridge::load_design(&library, id).map_err(js_err)
}

#[wasm_bindgen(js_name = deleteDesign)]
pub fn delete_design(id: &str) -> Result<String, JsValue> {
    let mut library = storage::read_library().map_err(storage_err)?;
    let remaining = bridge::delete_design(&mut library, id).map_err(js_err)?;
    storage::write_library(&library).map_err(storage_err)?;
    Ok(remaining)
}
