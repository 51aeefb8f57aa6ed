//! Shared JSON reference data for Crayon tests.
//!
//! Files live under `fixtures/` at the workspace root and are indexed by
//! `fixtures/manifest.json`. Values are plain numbers and strings so the
//! fixtures can be consumed without depending on the core crate.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    curves: HashMap<String, String>,
    tweens: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let path = fixtures_root().join(rel);
    let text = fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a>(map: &'a HashMap<String, String>, kind: &str, name: &str) -> Result<&'a str> {
    map.get(name)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

/// Reference samples for one named easing: `(t, eased)` pairs.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedEasingSamples {
    pub easing: String,
    pub points: Vec<[f32; 2]>,
}

/// Reference samples for one cubic-bezier curve.
#[derive(Debug, Clone, Deserialize)]
pub struct BezierCurveSamples {
    pub name: String,
    pub control_points: [f32; 4],
    pub points: Vec<[f32; 2]>,
}

/// Recorded per-frame output of a stepped tween.
///
/// `curve` is either an easing name or four control points. Position
/// tweens carry `start` + `delta`; fades carry `color`, `direction` and
/// `opacity`.
#[derive(Debug, Clone, Deserialize)]
pub struct TweenRecording {
    #[serde(default)]
    pub start: Vec<f32>,
    #[serde(default)]
    pub delta: Vec<f32>,
    #[serde(default)]
    pub color: Vec<f32>,
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub opacity: Option<f32>,
    pub duration: f32,
    pub curve: serde_json::Value,
    pub dt: f32,
    pub frames: Vec<Vec<f32>>,
    pub end: Vec<f32>,
}

pub mod curves {
    use super::*;

    #[derive(Deserialize)]
    struct NamedFile {
        samples: Vec<NamedEasingSamples>,
    }

    #[derive(Deserialize)]
    struct BezierFile {
        curves: Vec<BezierCurveSamples>,
    }

    pub fn named_easings() -> Result<Vec<NamedEasingSamples>> {
        let file: NamedFile = load_json(lookup(&MANIFEST.curves, "curve", "named-easings")?)?;
        Ok(file.samples)
    }

    pub fn cubic_bezier() -> Result<Vec<BezierCurveSamples>> {
        let file: BezierFile = load_json(lookup(&MANIFEST.curves, "curve", "cubic-bezier")?)?;
        Ok(file.curves)
    }
}

pub mod tweens {
    use super::*;

    pub fn load(name: &str) -> Result<TweenRecording> {
        load_json(lookup(&MANIFEST.tweens, "tween", name)?)
    }
}
