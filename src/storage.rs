use crate::bridge::decode_library;
use crate::constants::STORAGE_KEY;
use anyhow::{anyhow, Context, Result};
use planner_core::DesignLibrary;
use wasm_bindgen::JsValue;
use web_sys as web;

fn js(e: JsValue) -> anyhow::Error {
    anyhow!("{e:?}")
}

fn local_storage() -> Result<web::Storage> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    window
        .local_storage()
        .map_err(js)?
        .ok_or_else(|| anyhow!("localStorage unavailable"))
}

pub fn read_library() -> Result<DesignLibrary> {
    let raw = local_storage()?
        .get_item(STORAGE_KEY)
        .map_err(js)
        .context("reading saved designs")?;
    Ok(decode_library(raw.as_deref()))
}

pub fn write_library(library: &DesignLibrary) -> Result<()> {
    let json = library.to_json()?;
    local_storage()?
        .set_item(STORAGE_KEY, &json)
        .map_err(js)
        .context("writing saved designs")
}

/// Wall-clock milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
