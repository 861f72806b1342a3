//! Layers and their line slots.
//!
//! A layer owns a global [`ParameterSet`] and an ordered list of
//! [`LineSlot`]s. Each slot carries a sparse override set; the invariant kept
//! by every editing operation is that an override key never holds the same
//! value as the global set.

use crate::error::{LayerError, LayerResult};
use crate::params::{keys, ParamValue, ParameterSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Drawing status of a line slot.
///
/// A deleted slot keeps its spacing position and remembers whether it was
/// active so that restoring it brings back the previous state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStatus {
    Active,
    Inactive,
    Deleted { was_active: bool },
}

/// One line of a layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "LineRecord", into = "LineRecord")]
pub struct LineSlot {
    /// 1-based position, recomputed on every structural change.
    pub id: usize,
    pub status: LineStatus,
    pub overrides: ParameterSet,
}

impl LineSlot {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            status: LineStatus::Active,
            overrides: ParameterSet::new(),
        }
    }

    /// True when the engine should draw this slot.
    pub fn is_drawn(&self) -> bool {
        self.status == LineStatus::Active
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self.status, LineStatus::Deleted { .. })
    }

    /// Active flag, independent of soft deletion.
    pub fn is_active(&self) -> bool {
        match self.status {
            LineStatus::Active => true,
            LineStatus::Inactive => false,
            LineStatus::Deleted { was_active } => was_active,
        }
    }

    pub fn set_active(&mut self, active: bool) {
        self.status = match self.status {
            LineStatus::Deleted { .. } => LineStatus::Deleted { was_active: active },
            _ if active => LineStatus::Active,
            _ => LineStatus::Inactive,
        };
    }

    /// Soft-deletes the slot, or restores it if already deleted.
    pub fn toggle_deleted(&mut self) {
        self.status = match self.status {
            LineStatus::Deleted { was_active: true } => LineStatus::Active,
            LineStatus::Deleted { was_active: false } => LineStatus::Inactive,
            LineStatus::Active => LineStatus::Deleted { was_active: true },
            LineStatus::Inactive => LineStatus::Deleted { was_active: false },
        };
    }

    /// Clears overrides and undoes a soft delete.
    pub fn reset(&mut self) {
        self.overrides.clear();
        if self.is_deleted() {
            self.toggle_deleted();
        }
    }

    pub fn has_overrides(&self) -> bool {
        !self.overrides.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LineRecord {
    #[serde(default)]
    id: usize,
    #[serde(default = "default_true")]
    is_active: bool,
    #[serde(default)]
    is_deleted: bool,
    #[serde(default, rename = "override")]
    overrides: ParameterSet,
}

fn default_true() -> bool {
    true
}

impl From<LineRecord> for LineSlot {
    fn from(record: LineRecord) -> Self {
        let status = match (record.is_deleted, record.is_active) {
            (true, was_active) => LineStatus::Deleted { was_active },
            (false, true) => LineStatus::Active,
            (false, false) => LineStatus::Inactive,
        };
        Self {
            id: record.id,
            status,
            overrides: record.overrides,
        }
    }
}

impl From<LineSlot> for LineRecord {
    fn from(slot: LineSlot) -> Self {
        Self {
            id: slot.id,
            is_active: slot.is_active(),
            is_deleted: slot.is_deleted(),
            overrides: slot.overrides,
        }
    }
}

/// A named, colored group of lines sharing global parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "LayerRecord", into = "LayerRecord")]
pub struct Layer {
    pub name: String,
    /// Hex color such as `#ff0000`.
    pub color: String,
    pub visible: bool,
    pub locked: bool,
    pub global: ParameterSet,
    pub lines: Vec<LineSlot>,
}

impl Layer {
    /// New layer with default parameters and its line slots generated.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self::with_params(name, color, ParameterSet::layer_defaults())
    }

    pub fn with_params(
        name: impl Into<String>,
        color: impl Into<String>,
        global: ParameterSet,
    ) -> Self {
        let mut layer = Self {
            name: name.into(),
            color: color.into(),
            visible: true,
            locked: false,
            global,
            lines: Vec::new(),
        };
        layer.regenerate_lines();
        layer
    }

    /// Line count requested by the global parameters.
    pub fn nb_lines(&self) -> usize {
        self.global.count(keys::NB_LINES, 10)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Brings the slot count in line with `nb_lines`, keeping existing slots by index.
    pub fn regenerate_lines(&mut self) {
        let target = self.nb_lines();
        self.lines.truncate(target);
        while self.lines.len() < target {
            self.lines.push(LineSlot::new(self.lines.len() + 1));
        }
        self.renumber();
    }

    fn renumber(&mut self) {
        for (i, line) in self.lines.iter_mut().enumerate() {
            line.id = i + 1;
        }
    }

    fn ensure_unlocked(&self) -> LayerResult<()> {
        if self.locked {
            Err(LayerError::Locked(self.name.clone()))
        } else {
            Ok(())
        }
    }

    fn check_line(&self, index: usize) -> LayerResult<()> {
        if index < self.lines.len() {
            Ok(())
        } else {
            Err(LayerError::LineOutOfRange {
                index,
                len: self.lines.len(),
            })
        }
    }

    /// Applies parameter changes to the layer (`target == None`) or to one line.
    ///
    /// A global update regenerates line slots and drops overrides that now
    /// equal the global value. A line update stores only the keys that
    /// differ from the global value and removes the others from the override.
    pub fn update_params(
        &mut self,
        changes: &ParameterSet,
        target: Option<usize>,
    ) -> LayerResult<()> {
        self.ensure_unlocked()?;

        match target {
            None => {
                self.global.extend_from(changes);
                self.regenerate_lines();
                self.prune_overrides();
                debug!(layer = %self.name, keys = changes.len(), "global parameters updated");
            }
            Some(index) => {
                self.check_line(index)?;
                let global = &self.global;
                let line = &mut self.lines[index];
                for (key, value) in changes.iter() {
                    if global.get(key) == Some(value) {
                        line.overrides.remove(key);
                    } else {
                        line.overrides.insert(key, value.clone());
                    }
                }
                debug!(
                    layer = %self.name,
                    line = index,
                    overrides = line.overrides.len(),
                    "line parameters updated"
                );
            }
        }
        Ok(())
    }

    /// Sets one override key on one line, pruned like [`Layer::update_params`].
    pub fn set_line_override(
        &mut self,
        index: usize,
        key: &str,
        value: impl Into<ParamValue>,
    ) -> LayerResult<()> {
        self.update_params(&ParameterSet::new().with(key, value), Some(index))
    }

    /// Removes every override key whose value equals the global value.
    pub fn prune_overrides(&mut self) {
        let global = &self.global;
        for line in &mut self.lines {
            let redundant: Vec<String> = line
                .overrides
                .iter()
                .filter(|(key, value)| global.get(key) == Some(*value))
                .map(|(key, _)| key.to_string())
                .collect();
            for key in redundant {
                line.overrides.remove(&key);
            }
        }
    }

    /// Effective parameters of one line: global merged with its override.
    pub fn line_params(&self, index: usize) -> LayerResult<ParameterSet> {
        self.check_line(index)?;
        Ok(self.global.merged_with(&self.lines[index].overrides))
    }

    pub fn reset_line(&mut self, index: usize) -> LayerResult<()> {
        self.ensure_unlocked()?;
        self.check_line(index)?;
        self.lines[index].reset();
        Ok(())
    }

    pub fn toggle_line_deleted(&mut self, index: usize) -> LayerResult<()> {
        self.ensure_unlocked()?;
        self.check_line(index)?;
        self.lines[index].toggle_deleted();
        Ok(())
    }

    pub fn set_line_active(&mut self, index: usize, active: bool) -> LayerResult<()> {
        self.ensure_unlocked()?;
        self.check_line(index)?;
        self.lines[index].set_active(active);
        Ok(())
    }

    pub fn toggle_line_active(&mut self, index: usize) -> LayerResult<()> {
        self.ensure_unlocked()?;
        self.check_line(index)?;
        let line = &mut self.lines[index];
        let active = line.is_active();
        line.set_active(!active);
        Ok(())
    }

    /// Removes a slot for good; `nb_lines` follows the new count.
    pub fn delete_line_at(&mut self, index: usize) -> LayerResult<LineSlot> {
        self.ensure_unlocked()?;
        self.check_line(index)?;
        let removed = self.lines.remove(index);
        self.global.insert(keys::NB_LINES, self.lines.len());
        self.renumber();
        Ok(removed)
    }

    /// Inserts copies of `lines` after `index` (`None` inserts at the front).
    ///
    /// Copied overrides are pruned against this layer's globals.
    pub fn insert_lines_after(
        &mut self,
        index: Option<usize>,
        lines: &[LineSlot],
    ) -> LayerResult<()> {
        self.ensure_unlocked()?;
        let at = match index {
            Some(i) => {
                self.check_line(i)?;
                i + 1
            }
            None => 0,
        };
        for (offset, line) in lines.iter().enumerate() {
            self.lines.insert(at + offset, line.clone());
        }
        self.global.insert(keys::NB_LINES, self.lines.len());
        self.renumber();
        self.prune_overrides();
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LayerRecord {
    #[serde(default)]
    name: String,
    #[serde(default = "default_color")]
    color: String,
    #[serde(default = "default_true")]
    visible: bool,
    #[serde(default)]
    locked: bool,
    #[serde(default)]
    data: LayerData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LayerData {
    #[serde(default)]
    global: ParameterSet,
    #[serde(default)]
    lines: Vec<LineSlot>,
}

fn default_color() -> String {
    "#ff0000".to_string()
}

impl From<LayerRecord> for Layer {
    fn from(record: LayerRecord) -> Self {
        Self {
            name: record.name,
            color: record.color,
            visible: record.visible,
            locked: record.locked,
            global: record.data.global,
            lines: record.data.lines,
        }
    }
}

impl From<Layer> for LayerRecord {
    fn from(layer: Layer) -> Self {
        Self {
            name: layer.name,
            color: layer.color,
            visible: layer.visible,
            locked: layer.locked,
            data: LayerData {
                global: layer.global,
                lines: layer.lines,
            },
        }
    }
}
