//! Ordered collection of layers with the layer panel actions.

use crate::error::{LayerError, LayerResult};
use crate::layer::Layer;
use crate::params::keys;
use serde::{Deserialize, Serialize};

/// Colors handed out to new layers, in order.
pub const LAYER_PALETTE: [&str; 20] = [
    "#e6194b", "#3cb44b", "#ffe119", "#4363d8", "#f58231", "#911eb4", "#46f0f0", "#f032e6",
    "#bcf60c", "#fabebe", "#008080", "#e6beff", "#9a6324", "#fffac8", "#800000", "#aaffc3",
    "#808000", "#ffd8b1", "#000075", "#808080",
];

/// Axis of a mirror copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorAxis {
    Horizontal,
    Vertical,
}

/// Layers in drawing order, first drawn first.
///
/// Every action that creates a layer appends it and returns its index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerStack {
    layers: Vec<Layer>,
    #[serde(skip)]
    color_index: usize,
    #[serde(skip)]
    clipboard: Option<Layer>,
}

impl LayerStack {
    /// Empty stack. Use [`LayerStack::with_default_layer`] for a usable starting point.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_layer() -> Self {
        let mut stack = Self::new();
        stack.add_layer();
        stack
    }

    /// Wraps loaded layers; an empty list gets one default layer.
    pub fn from_layers(layers: Vec<Layer>) -> Self {
        let mut stack = Self {
            layers,
            color_index: 0,
            clipboard: None,
        };
        if stack.layers.is_empty() {
            stack.add_layer();
        }
        stack
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn into_layers(self) -> Vec<Layer> {
        self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> LayerResult<&mut Layer> {
        let len = self.layers.len();
        self.layers
            .get_mut(index)
            .ok_or(LayerError::LayerOutOfRange { index, len })
    }

    fn layer(&self, index: usize) -> LayerResult<&Layer> {
        self.layers.get(index).ok_or(LayerError::LayerOutOfRange {
            index,
            len: self.layers.len(),
        })
    }

    fn next_color(&mut self) -> String {
        let color = LAYER_PALETTE[self.color_index % LAYER_PALETTE.len()];
        self.color_index += 1;
        color.to_string()
    }

    fn push_copy(&mut self, mut layer: Layer, name: String) -> usize {
        layer.name = name;
        layer.color = self.next_color();
        layer.locked = false;
        self.layers.push(layer);
        self.layers.len() - 1
    }

    /// Appends a default layer named `Calque N`.
    pub fn add_layer(&mut self) -> usize {
        let name = format!("Calque {}", self.layers.len() + 1);
        let color = self.next_color();
        self.layers.push(Layer::new(name, color));
        self.layers.len() - 1
    }

    pub fn duplicate(&mut self, index: usize) -> LayerResult<usize> {
        let source = self.layer(index)?.clone();
        let name = format!("{} (Copie)", source.name);
        Ok(self.push_copy(source, name))
    }

    /// Copy of a layer with its mirror flag on `axis` toggled.
    pub fn mirror_copy(&mut self, index: usize, axis: MirrorAxis) -> LayerResult<usize> {
        let source = self.layer(index)?;
        if source.locked {
            return Err(LayerError::Locked(source.name.clone()));
        }
        let mut copy = source.clone();
        let (key, suffix) = match axis {
            MirrorAxis::Horizontal => (keys::MIRROR_H, "Mir H"),
            MirrorAxis::Vertical => (keys::MIRROR_V, "Mir V"),
        };
        let flipped = !copy.global.flag(key, false);
        copy.global.insert(key, flipped);
        copy.prune_overrides();
        let name = format!("{} ({})", copy.name, suffix);
        Ok(self.push_copy(copy, name))
    }

    /// Copy of a layer rotated a further 90 degrees.
    pub fn rotated_copy(&mut self, index: usize) -> LayerResult<usize> {
        let source = self.layer(index)?;
        if source.locked {
            return Err(LayerError::Locked(source.name.clone()));
        }
        let mut copy = source.clone();
        let rotation = copy.global.number(keys::ROTATION, 0.0) + 90.0;
        copy.global.insert(keys::ROTATION, rotation);
        copy.prune_overrides();
        let name = format!("{} (+90°)", copy.name);
        Ok(self.push_copy(copy, name))
    }

    /// Swaps a layer with the one before it. Returns the new index.
    pub fn move_up(&mut self, index: usize) -> LayerResult<usize> {
        self.layer(index)?;
        if index == 0 {
            return Ok(0);
        }
        self.layers.swap(index, index - 1);
        Ok(index - 1)
    }

    /// Swaps a layer with the one after it. Returns the new index.
    pub fn move_down(&mut self, index: usize) -> LayerResult<usize> {
        self.layer(index)?;
        if index + 1 >= self.layers.len() {
            return Ok(index);
        }
        self.layers.swap(index, index + 1);
        Ok(index + 1)
    }

    /// Removes an unlocked layer. The stack is never left empty.
    pub fn remove(&mut self, index: usize) -> LayerResult<Layer> {
        let layer = self.layer(index)?;
        if layer.locked {
            return Err(LayerError::Locked(layer.name.clone()));
        }
        let removed = self.layers.remove(index);
        if self.layers.is_empty() {
            self.add_layer();
        }
        Ok(removed)
    }

    pub fn copy_to_clipboard(&mut self, index: usize) -> LayerResult<()> {
        self.clipboard = Some(self.layer(index)?.clone());
        Ok(())
    }

    /// Appends the clipboard layer as `"<name> (Copie)"`.
    pub fn paste_from_clipboard(&mut self) -> LayerResult<usize> {
        let layer = self.clipboard.clone().ok_or(LayerError::EmptyClipboard)?;
        let name = format!("{} (Copie)", layer.name);
        Ok(self.push_copy(layer, name))
    }
}
