//! Open parameter sets and their typed, resolved form.
//!
//! A [`ParameterSet`] is the loosely typed mapping stored in project files
//! (layer globals and per-line overrides). Reading goes through coercing
//! getters that never fail: a missing or malformed value yields the
//! caller's default. [`LineParams`] is the immutable record built once per
//! line per calculation from `global` merged with `override`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Recognized parameter names.
pub mod keys {
    pub const TRAJ_TYPE: &str = "traj_type";
    pub const WAVE_TYPE: &str = "wave_type";
    pub const NB_LINES: &str = "nb_lines";
    pub const AMPLITUDE: &str = "amplitude";
    pub const PERIOD: &str = "period";
    pub const PHASE: &str = "phase";
    pub const ROTATION: &str = "rotation";
    pub const POS_X: &str = "pos_x";
    pub const POS_Y: &str = "pos_y";
    pub const THICKNESS: &str = "thickness";
    pub const MARGIN_IN: &str = "margin_in";
    pub const RESOLUTION: &str = "resolution";
    pub const FLAMBAGE: &str = "flambage";
    pub const AMP_START: &str = "amp_start";
    pub const AMP_END: &str = "amp_end";
    pub const MIRROR_H: &str = "mirror_h";
    pub const MIRROR_V: &str = "mirror_v";
}

/// Largest line count a layer accepts; larger counts are treated as malformed.
pub const MAX_LINES: usize = 10_000;

/// A single parameter value as found in project files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl ParamValue {
    /// Numeric view. Booleans map to 1/0, text is parsed with either `.` or `,` as decimal separator.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            ParamValue::Number(n) => *n,
            ParamValue::Bool(b) => f64::from(u8::from(*b)),
            ParamValue::Text(s) => s.trim().replace(',', ".").parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            ParamValue::Number(n) => Some(*n != 0.0),
            ParamValue::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "oui" => Some(true),
                "false" | "0" | "no" | "non" | "" => Some(false),
                _ => None,
            },
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::Number(n) => write!(f, "{}", n),
            ParamValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Number(f64::from(value))
    }
}

impl From<usize> for ParamValue {
    fn from(value: usize) -> Self {
        ParamValue::Number(value as f64)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

/// Open mapping from parameter name to value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet {
    values: BTreeMap<String, ParamValue>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults applied to a freshly created layer.
    pub fn layer_defaults() -> Self {
        ParameterSet::new()
            .with(keys::TRAJ_TYPE, "ligne_droite")
            .with(keys::WAVE_TYPE, "sinus")
            .with(keys::NB_LINES, 12)
            .with(keys::AMPLITUDE, 2.0)
            .with(keys::PERIOD, 1.0)
            .with(keys::PHASE, 0.0)
            .with(keys::ROTATION, 0.0)
            .with(keys::POS_X, 0.0)
            .with(keys::POS_Y, 0.0)
            .with(keys::THICKNESS, 1.0)
            .with(keys::MARGIN_IN, 0.0)
            .with(keys::FLAMBAGE, false)
            .with(keys::AMP_START, 1.0)
            .with(keys::AMP_END, 3.0)
            .with(keys::RESOLUTION, Resolution::Medium.label())
            .with(keys::MIRROR_H, false)
            .with(keys::MIRROR_V, false)
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<ParamValue>) -> Option<ParamValue> {
        self.values.insert(key.to_string(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.values.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.values.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Copies every entry of `other` over this set.
    pub fn extend_from(&mut self, other: &ParameterSet) {
        for (key, value) in &other.values {
            self.values.insert(key.clone(), value.clone());
        }
    }

    /// New set holding `self` with `overrides` applied on top.
    pub fn merged_with(&self, overrides: &ParameterSet) -> ParameterSet {
        let mut merged = self.clone();
        merged.extend_from(overrides);
        merged
    }

    /// Numeric value, or `default` when missing, non-numeric or not finite.
    pub fn number(&self, key: &str, default: f64) -> f64 {
        self.get(key).and_then(ParamValue::as_f64).unwrap_or(default)
    }

    /// Non-negative count, truncated towards zero like a line count typed as `12.0`.
    ///
    /// Counts above [`MAX_LINES`] yield `default`.
    pub fn count(&self, key: &str, default: usize) -> usize {
        match self.get(key).and_then(ParamValue::as_f64) {
            Some(n) if n > MAX_LINES as f64 => default,
            Some(n) if n >= 0.0 => n.trunc() as usize,
            Some(_) => 0,
            None => default,
        }
    }

    pub fn flag(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(ParamValue::as_bool).unwrap_or(default)
    }

    /// Text value; numbers and booleans are rendered as text.
    pub fn text(&self, key: &str, default: &str) -> String {
        match self.get(key) {
            Some(ParamValue::Text(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => default.to_string(),
        }
    }
}

impl FromIterator<(String, ParamValue)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (String, ParamValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Sampling density of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    Low,
    #[default]
    Medium,
    High,
    Ultra,
}

impl Resolution {
    /// Number of segments per line; the polyline has `steps() + 1` points.
    pub fn steps(&self) -> usize {
        match self {
            Resolution::Low => 200,
            Resolution::Medium => 800,
            Resolution::High => 2000,
            Resolution::Ultra => 10000,
        }
    }

    /// Label stored in project files.
    pub fn label(&self) -> &'static str {
        match self {
            Resolution::Low => "Faible",
            Resolution::Medium => "Moyenne",
            Resolution::High => "Haute",
            Resolution::Ultra => "Ultra",
        }
    }

    /// Accepts French or English labels, case-insensitively and ignoring any suffix
    /// such as `"Haute (2000 pts)"`.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();
        let table = [
            ("faible", Resolution::Low),
            ("low", Resolution::Low),
            ("moyenne", Resolution::Medium),
            ("medium", Resolution::Medium),
            ("haute", Resolution::High),
            ("high", Resolution::High),
            ("ultra", Resolution::Ultra),
        ];
        table
            .iter()
            .find(|(prefix, _)| label.starts_with(prefix))
            .map(|(_, res)| *res)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Low => write!(f, "low"),
            Resolution::Medium => write!(f, "medium"),
            Resolution::High => write!(f, "high"),
            Resolution::Ultra => write!(f, "ultra"),
        }
    }
}

impl FromStr for Resolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resolution::from_label(s).ok_or_else(|| format!("unknown resolution '{}'", s))
    }
}

/// Fully resolved parameters of one line.
///
/// Built from the merged parameter set; every recognized key is read with its
/// engine default. The merged set is kept so trajectories and waves can read
/// their own extra keys.
#[derive(Debug, Clone, PartialEq)]
pub struct LineParams {
    pub traj_type: String,
    pub wave_type: String,
    pub amplitude: f64,
    pub period: f64,
    pub phase: f64,
    pub rotation: f64,
    pub pos_x: f64,
    pub pos_y: f64,
    pub thickness: f64,
    pub margin_in: f64,
    pub resolution: Resolution,
    pub flambage: bool,
    pub amp_start: f64,
    pub amp_end: f64,
    pub mirror_h: bool,
    pub mirror_v: bool,
    pub merged: ParameterSet,
}

impl LineParams {
    /// Merges `overrides` onto `global` and reads the result.
    ///
    /// `fallback_resolution` is used when the resolution key is missing or unrecognized.
    pub fn resolve(
        global: &ParameterSet,
        overrides: &ParameterSet,
        fallback_resolution: Resolution,
    ) -> Self {
        Self::from_merged(global.merged_with(overrides), fallback_resolution)
    }

    pub fn from_merged(merged: ParameterSet, fallback_resolution: Resolution) -> Self {
        let resolution = merged
            .get(keys::RESOLUTION)
            .and_then(ParamValue::as_str)
            .and_then(Resolution::from_label)
            .unwrap_or(fallback_resolution);

        Self {
            traj_type: merged.text(keys::TRAJ_TYPE, "ligne_droite"),
            wave_type: merged.text(keys::WAVE_TYPE, "sinus"),
            amplitude: merged.number(keys::AMPLITUDE, 2.0),
            period: merged.number(keys::PERIOD, 10.0),
            phase: merged.number(keys::PHASE, 0.0),
            rotation: merged.number(keys::ROTATION, 0.0),
            pos_x: merged.number(keys::POS_X, 0.0),
            pos_y: merged.number(keys::POS_Y, 0.0),
            thickness: merged.number(keys::THICKNESS, 1.0),
            margin_in: merged.number(keys::MARGIN_IN, 0.0),
            resolution,
            flambage: merged.flag(keys::FLAMBAGE, false),
            amp_start: merged.number(keys::AMP_START, 1.0),
            amp_end: merged.number(keys::AMP_END, 3.0),
            mirror_h: merged.flag(keys::MIRROR_H, false),
            mirror_v: merged.flag(keys::MIRROR_V, false),
            merged,
        }
    }

    /// Amplitude at progress `t`: constant, or linearly tapered when `flambage` is on.
    pub fn amplitude_at(&self, t: f64) -> f64 {
        if self.flambage {
            self.amp_start + (self.amp_end - self.amp_start) * t
        } else {
            self.amplitude
        }
    }
}
