use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Fixture sections of `fixtures/manifest.json`, name to path relative to
/// `fixtures/`.
#[derive(Debug, Deserialize)]
struct Manifest {
    values: BTreeMap<String, String>,
    #[serde(rename = "invalid-values")]
    invalid_values: BTreeMap<String, String>,
}

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../../../fixtures/manifest.json"))
        .expect("fixtures manifest should parse")
});

/// A persisted value together with the outputs it must produce.
#[derive(Debug, Clone, Deserialize)]
pub struct ValueFixture {
    pub encoded: serde_json::Value,
    pub samples: Vec<Sample>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Sample {
    pub time_ms: u32,
    pub level_length: i32,
    pub expected: i32,
}

/// Bytes that must fail to decode, and the error variant they produce.
#[derive(Debug, Clone, Deserialize)]
pub struct InvalidValueFixture {
    pub raw: String,
    pub error: String,
}

#[derive(Copy, Clone)]
enum Section {
    Values,
    InvalidValues,
}

impl Section {
    fn entries(self) -> &'static BTreeMap<String, String> {
        match self {
            Section::Values => &MANIFEST.values,
            Section::InvalidValues => &MANIFEST.invalid_values,
        }
    }

    fn keys(self) -> Vec<String> {
        self.entries().keys().cloned().collect()
    }

    fn path(self, name: &str) -> Result<PathBuf> {
        let rel = self
            .entries()
            .get(name)
            .ok_or_else(|| anyhow!("no fixture named '{name}'"))?;
        Ok(Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../../fixtures")
            .join(rel))
    }

    fn text(self, name: &str) -> Result<String> {
        let path = self.path(name)?;
        fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))
    }

    fn load<T: DeserializeOwned>(self, name: &str) -> Result<T> {
        serde_json::from_str(&self.text(name)?)
            .with_context(|| format!("parsing fixture '{name}'"))
    }
}

/// Valid value definitions with sampled outputs.
pub mod values {
    use super::*;

    /// Fixture names, sorted.
    pub fn keys() -> Vec<String> {
        Section::Values.keys()
    }

    /// Raw fixture text.
    pub fn json(name: &str) -> Result<String> {
        Section::Values.text(name)
    }

    pub fn load(name: &str) -> Result<ValueFixture> {
        Section::Values.load(name)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        Section::Values.path(name)
    }
}

/// Payloads every registry with the built-ins must reject.
pub mod invalid_values {
    use super::*;

    pub fn keys() -> Vec<String> {
        Section::InvalidValues.keys()
    }

    pub fn load(name: &str) -> Result<InvalidValueFixture> {
        Section::InvalidValues.load(name)
    }
}
