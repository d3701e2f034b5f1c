// Static reference data: colleges, timeline events, resources, career streams.
// Loaded once at start-up and shared read-only through AppState.

pub mod filters;
pub mod handlers;

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CollegeContact {
    pub phone: String,
    pub website: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct College {
    pub id: u32,
    pub name: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub courses: Vec<String>,
    pub fees: String,
    pub rating: f32,
    pub cutoff: String,
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<CollegeContact>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEvent {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub category: String,
    pub status: String,
    pub days_left: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub rating: f32,
    pub downloads: u64,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StreamCareer {
    pub name: String,
    pub salary: String,
    pub growth: String,
    /// Relative market demand, 0–100.
    pub demand: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CareerStream {
    pub key: String,
    pub name: String,
    pub careers: Vec<StreamCareer>,
    pub exams: Vec<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    pub colleges: Vec<College>,
    pub timeline: Vec<CatalogEvent>,
    pub resources: Vec<Resource>,
    pub streams: Vec<CareerStream>,
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CATALOG).context("Embedded catalog is malformed")
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Loads from `path` when given, otherwise falls back to the embedded catalog.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let catalog = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read catalog at {}", path.display()))?;
                Self::from_json(&raw)
                    .with_context(|| format!("Catalog at {} is malformed", path.display()))?
            }
            None => Self::embedded()?,
        };
        info!(
            "Catalog loaded: {} colleges, {} events, {} resources, {} streams",
            catalog.colleges.len(),
            catalog.timeline.len(),
            catalog.resources.len(),
            catalog.streams.len()
        );
        Ok(catalog)
    }

    pub fn stream(&self, key: &str) -> Option<&CareerStream> {
        self.streams
            .iter()
            .find(|s| s.key.eq_ignore_ascii_case(key.trim()))
    }
}
