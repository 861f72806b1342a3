//! Curve registry.
//!
//! Holds the trajectory and wave libraries, resolves user-facing names
//! (case-insensitive, spaces or underscores) to implementations and falls
//! back to the straight line and the sine wave for unknown names. The
//! registry is built once and then shared read-only by the engine.

use crate::trajectory::{
    CenteredFan, Concentric, Fan, Radial, Rosette, RoundedSquare, Spiral, Straight, Trajectory,
};
use crate::wave::{Flat, Rebound, Sine, SlopedSquare, Square, Triangle, Wave};
use guillochage_core::{ParamValue, ParameterSet};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

pub const FALLBACK_TRAJECTORY: &str = "ligne_droite";
pub const FALLBACK_WAVE: &str = "sinus";

/// Catalogue grouping shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveCategory {
    /// Straight lines and fans.
    Base,
    /// Paths around the centre.
    Circular,
    /// Closed non-circular outlines.
    Shape,
    Wave,
}

impl fmt::Display for CurveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "Base trajectory"),
            Self::Circular => write!(f, "Circular trajectory"),
            Self::Shape => write!(f, "Shape trajectory"),
            Self::Wave => write!(f, "Wave"),
        }
    }
}

/// Metadata describing a curve and the extra keys it reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveInfo {
    /// Registry key, already normalized.
    pub key: String,
    pub name: String,
    pub category: CurveCategory,
    pub description: String,
    pub default_params: ParameterSet,
}

impl CurveInfo {
    pub fn new(key: &str, name: &str, category: CurveCategory, description: &str) -> Self {
        Self {
            key: normalize_key(key),
            name: name.to_string(),
            category,
            description: description.to_string(),
            default_params: ParameterSet::new(),
        }
    }

    pub fn with_default(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.default_params.insert(key, value);
        self
    }
}

/// Lowercases, trims, folds French accents, maps spaces and dashes to
/// underscores and drops a file extension such as `.py`.
pub fn normalize_key(name: &str) -> String {
    let trimmed = name.trim();
    let stem = trimmed
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .filter(|stem| !stem.is_empty())
        .unwrap_or(trimmed);
    stem.to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            'à' | 'â' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'î' | 'ï' => 'i',
            'ô' | 'ö' => 'o',
            'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

/// Owner of the trajectory and wave libraries.
pub struct CurveRegistry {
    trajectories: BTreeMap<String, Arc<dyn Trajectory>>,
    waves: BTreeMap<String, Arc<dyn Wave>>,
    aliases: BTreeMap<String, String>,
}

impl fmt::Debug for CurveRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurveRegistry")
            .field("trajectories", &self.trajectories.keys().collect::<Vec<_>>())
            .field("waves", &self.waves.keys().collect::<Vec<_>>())
            .field("aliases", &self.aliases.len())
            .finish()
    }
}

impl Default for CurveRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl CurveRegistry {
    /// Registry without any curve. Lookups still succeed through the built-in fallbacks.
    pub fn empty() -> Self {
        Self {
            trajectories: BTreeMap::new(),
            waves: BTreeMap::new(),
            aliases: BTreeMap::new(),
        }
    }

    /// Registry holding every built-in trajectory and wave with their English aliases.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();

        registry.register_trajectory(Arc::new(Straight));
        registry.register_trajectory(Arc::new(Radial));
        registry.register_trajectory(Arc::new(Concentric));
        registry.register_trajectory(Arc::new(Spiral));
        registry.register_trajectory(Arc::new(RoundedSquare));
        registry.register_trajectory(Arc::new(Rosette));
        registry.register_trajectory(Arc::new(Fan));
        registry.register_trajectory(Arc::new(CenteredFan));

        registry.register_wave(Arc::new(Sine));
        registry.register_wave(Arc::new(Triangle));
        registry.register_wave(Arc::new(Square));
        registry.register_wave(Arc::new(Rebound));
        registry.register_wave(Arc::new(SlopedSquare));
        registry.register_wave(Arc::new(Flat));

        for (alias, key) in [
            ("straight", "ligne_droite"),
            ("line", "ligne_droite"),
            ("concentric", "concentrique"),
            ("spiral", "spirale"),
            ("rounded_square", "carre_arrondi"),
            ("rosette", "rosace"),
            ("fan", "eventail"),
            ("fan_centered", "eventail_centre"),
            ("sine", "sinus"),
            ("square", "carre"),
            ("rebound", "rebond"),
            ("square_slope", "carre_pente"),
            ("none", "ligne_droite"),
            ("flat", "ligne_droite"),
        ] {
            registry.add_alias(alias, key);
        }

        registry
    }

    /// Adds a trajectory under its info key. An existing entry with the same key is kept.
    pub fn register_trajectory(&mut self, trajectory: Arc<dyn Trajectory>) -> bool {
        let key = trajectory.info().key;
        if self.trajectories.contains_key(&key) {
            return false;
        }
        self.trajectories.insert(key, trajectory);
        true
    }

    /// Adds a wave under its info key. An existing entry with the same key is kept.
    pub fn register_wave(&mut self, wave: Arc<dyn Wave>) -> bool {
        let key = wave.info().key;
        if self.waves.contains_key(&key) {
            return false;
        }
        self.waves.insert(key, wave);
        true
    }

    /// Maps an alternative name onto a registered key, for both libraries.
    pub fn add_alias(&mut self, alias: &str, key: &str) {
        self.aliases.insert(normalize_key(alias), normalize_key(key));
    }

    fn canonical(&self, name: &str) -> String {
        let key = normalize_key(name);
        self.aliases.get(&key).cloned().unwrap_or(key)
    }

    /// Looks up a trajectory without falling back.
    pub fn find_trajectory(&self, name: &str) -> Option<Arc<dyn Trajectory>> {
        let key = normalize_key(name);
        self.trajectories
            .get(&key)
            .or_else(|| self.trajectories.get(&self.canonical(name)))
            .cloned()
    }

    /// Looks up a wave without falling back.
    pub fn find_wave(&self, name: &str) -> Option<Arc<dyn Wave>> {
        let key = normalize_key(name);
        self.waves
            .get(&key)
            .or_else(|| self.waves.get(&self.canonical(name)))
            .cloned()
    }

    /// Trajectory for `name`, or the straight line when the name is unknown.
    pub fn trajectory(&self, name: &str) -> Arc<dyn Trajectory> {
        self.find_trajectory(name).unwrap_or_else(|| {
            debug!(name, fallback = FALLBACK_TRAJECTORY, "unknown trajectory");
            self.trajectories
                .get(FALLBACK_TRAJECTORY)
                .cloned()
                .unwrap_or_else(|| Arc::new(Straight) as Arc<dyn Trajectory>)
        })
    }

    /// Wave for `name`, or the sine wave when the name is unknown.
    pub fn wave(&self, name: &str) -> Arc<dyn Wave> {
        self.find_wave(name).unwrap_or_else(|| {
            debug!(name, fallback = FALLBACK_WAVE, "unknown wave");
            self.waves
                .get(FALLBACK_WAVE)
                .cloned()
                .unwrap_or_else(|| Arc::new(Sine) as Arc<dyn Wave>)
        })
    }

    /// Trajectory catalogue sorted by key.
    pub fn trajectories(&self) -> Vec<CurveInfo> {
        self.trajectories.values().map(|t| t.info()).collect()
    }

    /// Wave catalogue sorted by key.
    pub fn waves(&self) -> Vec<CurveInfo> {
        self.waves.values().map(|w| w.info()).collect()
    }
}
