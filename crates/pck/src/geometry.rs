//! Box-based 3D model documents (`models.bin`).
//!
//! A [`ModelDocument`] is a plain tree: pieces own parts, parts own boxes.
//! Every level is an insertion-ordered map keyed by name. Inserting under an
//! existing name replaces the old value in place, keeping its position.

use indexmap::IndexMap;
use tracing::trace;

/// All models in a document, keyed by model name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelDocument {
    pub models: IndexMap<String, ModelPiece>,
}

/// One model: texture dimensions and named parts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelPiece {
    pub texture_width: i32,
    pub texture_height: i32,
    pub parts: IndexMap<String, ModelPart>,
}

/// A posable part of a model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelPart {
    /// Present in the format; its meaning is not known.
    pub unknown_float: f32,
    /// Pivot translation (x, y, z).
    pub translation: [f32; 3],
    /// Texture offset (u, v).
    pub texture_offset: [f32; 2],
    /// Rotation in degrees (x, y, z).
    pub rotation: [f32; 3],
    pub boxes: IndexMap<String, ModelBox>,
}

/// An axis-aligned cuboid of a part.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelBox {
    /// Lower corner (x, y, z) in model pixels.
    pub position: [f32; 3],
    pub length: i32,
    pub width: i32,
    pub height: i32,
    /// Texture offset (u, v) in pixels.
    pub uv: [f32; 2],
    /// Inflation applied around the box.
    pub scale: f32,
    pub mirror: bool,
}

impl ModelDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a piece, returning the one it replaced.
    pub fn insert_piece(
        &mut self,
        name: impl Into<String>,
        piece: ModelPiece,
    ) -> Option<ModelPiece> {
        let name = name.into();
        let previous = self.models.insert(name.clone(), piece);
        if previous.is_some() {
            trace!(model = %name, "replaced model piece");
        }
        previous
    }

    /// Returns the named piece, inserting an empty one if absent.
    pub fn piece_mut(&mut self, name: impl Into<String>) -> &mut ModelPiece {
        self.models.entry(name.into()).or_default()
    }

    /// Returns the named piece.
    pub fn piece(&self, name: &str) -> Option<&ModelPiece> {
        self.models.get(name)
    }

    /// Removes a piece, keeping the order of the others.
    pub fn remove_piece(&mut self, name: &str) -> Option<ModelPiece> {
        self.models.shift_remove(name)
    }

    /// Number of pieces.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Returns true if the document has no pieces.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Pieces in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModelPiece)> {
        self.models.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of boxes across every piece and part.
    pub fn box_count(&self) -> usize {
        self.models.values().map(ModelPiece::box_count).sum()
    }
}

impl ModelPiece {
    /// Creates a piece with no parts.
    pub fn new(texture_width: i32, texture_height: i32) -> Self {
        Self {
            texture_width,
            texture_height,
            parts: IndexMap::new(),
        }
    }

    /// Inserts a part, returning the one it replaced.
    pub fn insert_part(&mut self, name: impl Into<String>, part: ModelPart) -> Option<ModelPart> {
        self.parts.insert(name.into(), part)
    }

    /// Returns the named part, inserting a default one if absent.
    pub fn part_mut(&mut self, name: impl Into<String>) -> &mut ModelPart {
        self.parts.entry(name.into()).or_default()
    }

    /// Returns the named part.
    pub fn part(&self, name: &str) -> Option<&ModelPart> {
        self.parts.get(name)
    }

    /// Number of boxes across every part.
    pub fn box_count(&self) -> usize {
        self.parts.values().map(|part| part.boxes.len()).sum()
    }
}

impl ModelPart {
    /// Creates a part with the given pivot and rotation and no boxes.
    pub fn new(translation: [f32; 3], rotation: [f32; 3]) -> Self {
        Self {
            translation,
            rotation,
            ..Self::default()
        }
    }

    /// Inserts a box, returning the one it replaced.
    pub fn insert_box(&mut self, name: impl Into<String>, model_box: ModelBox) -> Option<ModelBox> {
        self.boxes.insert(name.into(), model_box)
    }

    /// Returns the named box.
    pub fn get_box(&self, name: &str) -> Option<&ModelBox> {
        self.boxes.get(name)
    }
}

impl ModelBox {
    /// A box with the given corner, extents (length, width, height) and UV.
    pub fn new(position: [f32; 3], size: [i32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            length: size[0],
            width: size[1],
            height: size[2],
            uv,
            scale: 0.0,
            mirror: false,
        }
    }

    /// Sets the inflation amount.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the mirror flag.
    pub fn mirrored(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }
}
