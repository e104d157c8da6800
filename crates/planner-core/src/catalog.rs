//! Equipment catalogs (speakers, receivers, displays) supplied as JSON.
//!
//! Records are loose: every numeric or rating field is optional and the
//! calculators fall back to constants when one is missing.

use crate::error::Result;
use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpeakerModel {
    pub model: String,
    pub brand: String,
    /// dB SPL at 1 W / 1 m.
    pub sensitivity: Option<f64>,
    pub impedance: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceiverModel {
    pub model: String,
    pub brand: String,
    /// Marketing rating such as `"125W x 7"`.
    pub power: Option<String>,
    pub channels: Option<u32>,
    pub typical_power_consumption_w: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayModel {
    pub id: String,
    pub model: String,
    pub brand: String,
    /// `"Projector"`, `"OLED TV"`, ...
    #[serde(rename = "type")]
    pub display_type: Option<String>,
    pub typical_power_consumption_w: Option<f64>,
}

#[derive(Deserialize)]
struct SpeakerFile {
    #[serde(default)]
    speakers: Vec<SpeakerModel>,
}

#[derive(Deserialize)]
struct ReceiverFile {
    #[serde(default)]
    receivers: Vec<ReceiverModel>,
}

#[derive(Deserialize)]
struct DisplayFile {
    #[serde(default)]
    displays: Vec<DisplayModel>,
}

/// All three catalogs with id lookups. Speakers and receivers are keyed by
/// `model`, displays by `id`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "CatalogData", into = "CatalogData")]
pub struct Catalog {
    speakers: Vec<SpeakerModel>,
    receivers: Vec<ReceiverModel>,
    displays: Vec<DisplayModel>,
    speaker_index: FnvHashMap<String, usize>,
    receiver_index: FnvHashMap<String, usize>,
    display_index: FnvHashMap<String, usize>,
}

/// Serialized catalog shape: one object with the three lists.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogData {
    pub speakers: Vec<SpeakerModel>,
    pub receivers: Vec<ReceiverModel>,
    pub displays: Vec<DisplayModel>,
}

impl From<CatalogData> for Catalog {
    fn from(data: CatalogData) -> Self {
        Catalog::new(data.speakers, data.receivers, data.displays)
    }
}

impl From<Catalog> for CatalogData {
    fn from(c: Catalog) -> Self {
        CatalogData {
            speakers: c.speakers,
            receivers: c.receivers,
            displays: c.displays,
        }
    }
}

fn index_by<T>(items: &[T], key: impl Fn(&T) -> &str) -> FnvHashMap<String, usize> {
    let mut index = FnvHashMap::default();
    for (i, item) in items.iter().enumerate() {
        // first record wins on duplicate keys
        index.entry(key(item).to_string()).or_insert(i);
    }
    index
}

impl Catalog {
    pub fn new(
        speakers: Vec<SpeakerModel>,
        receivers: Vec<ReceiverModel>,
        displays: Vec<DisplayModel>,
    ) -> Self {
        let speaker_index = index_by(&speakers, |s| s.model.as_str());
        let receiver_index = index_by(&receivers, |r| r.model.as_str());
        let display_index = index_by(&displays, |d| d.id.as_str());
        Self {
            speakers,
            receivers,
            displays,
            speaker_index,
            receiver_index,
            display_index,
        }
    }

    /// Decode a combined `{"speakers":[..],"receivers":[..],"displays":[..]}` document.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: CatalogData = serde_json::from_str(json)?;
        Ok(data.into())
    }

    /// Build from the three separate catalog files (`{"speakers":[..]}` etc).
    pub fn from_json_files(speakers: &str, receivers: &str, displays: &str) -> Result<Self> {
        let s: SpeakerFile = serde_json::from_str(speakers)?;
        let r: ReceiverFile = serde_json::from_str(receivers)?;
        let d: DisplayFile = serde_json::from_str(displays)?;
        Ok(Self::new(s.speakers, r.receivers, d.displays))
    }

    pub fn speaker(&self, model: &str) -> Option<&SpeakerModel> {
        self.speaker_index.get(model).map(|&i| &self.speakers[i])
    }

    pub fn receiver(&self, model: &str) -> Option<&ReceiverModel> {
        self.receiver_index.get(model).map(|&i| &self.receivers[i])
    }

    pub fn display(&self, id: &str) -> Option<&DisplayModel> {
        self.display_index.get(id).map(|&i| &self.displays[i])
    }

    pub fn speakers(&self) -> &[SpeakerModel] {
        &self.speakers
    }

    pub fn receivers(&self) -> &[ReceiverModel] {
        &self.receivers
    }

    pub fn displays(&self) -> &[DisplayModel] {
        &self.displays
    }

    pub fn is_empty(&self) -> bool {
        self.speakers.is_empty() && self.receivers.is_empty() && self.displays.is_empty()
    }
}
