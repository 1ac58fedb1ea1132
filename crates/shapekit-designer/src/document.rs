//! In-memory shape document.
//!
//! Shapes are kept in a map indexed by id plus a draw-order list. The
//! document validates its hierarchy on load and on every insert, so the
//! [`ShapeGraph`] it exposes never contains dangling parents or cycles.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use shapekit_core::{DocumentError, ParentId, ResizeError, Scale, ShapeId};

use crate::model::{ShapeKind, ShapePartial, ShapeRecord};
use crate::resize::{resize_shape, ResizeOptions};
use crate::shape_graph::ShapeGraph;
use crate::shape_util::{ShapeUtil, ShapeUtilRegistry};

/// On-disk form of a document. Shapes are listed in draw order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentFile {
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub shapes: Vec<ShapeRecord>,
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    shapes: HashMap<ShapeId, ShapeRecord>,
    draw_order: Vec<ShapeId>,
    read_only: bool,
    registry: ShapeUtilRegistry,
    next_id: u64,
}

impl Document {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Default::default()
        }
    }

    /// Builds a document from records in draw order. Parents may appear after
    /// their children.
    pub fn from_file(file: DocumentFile) -> Result<Self, DocumentError> {
        let mut doc = Self::new();
        for shape in file.shapes {
            if doc.shapes.contains_key(&shape.id) {
                return Err(DocumentError::DuplicateId { id: shape.id });
            }
            doc.next_id = doc.next_id.max(shape.id.raw() + 1);
            doc.draw_order.push(shape.id);
            doc.shapes.insert(shape.id, shape);
        }
        doc.validate()?;
        doc.read_only = file.read_only;
        Ok(doc)
    }

    pub fn to_file(&self) -> DocumentFile {
        DocumentFile {
            read_only: self.read_only,
            shapes: self.shapes().cloned().collect(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let file: DocumentFile = serde_json::from_str(json)?;
        Self::from_file(file)
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(&self.to_file())?)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let doc = Self::from_json(&content)?;
        info!("Loaded {} shapes from {}", doc.len(), path.display());
        Ok(doc)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), DocumentError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        info!("Saved {} shapes to {}", self.len(), path.display());
        Ok(())
    }

    /// Checks that every parent exists and no parent chain loops.
    pub fn validate(&self) -> Result<(), DocumentError> {
        for shape in self.shapes() {
            if let ParentId::Shape(parent) = shape.parent {
                if !self.shapes.contains_key(&parent) {
                    return Err(DocumentError::UnknownParent {
                        id: shape.id,
                        parent,
                    });
                }
            }
        }

        for &id in &self.draw_order {
            let mut seen = HashSet::new();
            let mut current = id;
            while let Some(ParentId::Shape(parent)) = self.shapes.get(&current).map(|s| s.parent) {
                if !seen.insert(current) {
                    return Err(DocumentError::ParentCycle { id });
                }
                current = parent;
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.draw_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw_order.is_empty()
    }

    /// Shapes in draw order.
    pub fn shapes(&self) -> impl Iterator<Item = &ShapeRecord> {
        self.draw_order.iter().filter_map(|id| self.shapes.get(id))
    }

    pub fn get(&self, id: ShapeId) -> Option<&ShapeRecord> {
        self.shapes.get(&id)
    }

    pub fn generate_id(&mut self) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn registry(&self) -> &ShapeUtilRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ShapeUtilRegistry {
        &mut self.registry
    }

    /// This document as a read-only shape graph.
    pub fn graph(&self) -> &dyn ShapeGraph {
        self
    }

    /// Adds a new shape on top of the draw order.
    pub fn insert(&mut self, shape: ShapeRecord) -> Result<ShapeId, DocumentError> {
        self.ensure_writable()?;
        if self.shapes.contains_key(&shape.id) {
            return Err(DocumentError::DuplicateId { id: shape.id });
        }
        self.check_parent(&shape)?;

        let id = shape.id;
        self.next_id = self.next_id.max(id.raw() + 1);
        self.draw_order.push(id);
        self.shapes.insert(id, shape);
        debug!("Inserted {}", id);
        Ok(id)
    }

    /// Replaces an existing record, typically the result of a resize.
    pub fn apply(&mut self, shape: ShapeRecord) -> Result<(), DocumentError> {
        self.ensure_writable()?;
        let id = shape.id;
        if !self.shapes.contains_key(&id) {
            return Err(DocumentError::ShapeNotFound { id });
        }
        self.check_parent(&shape)?;
        self.shapes.insert(id, shape);
        Ok(())
    }

    pub fn apply_partial(
        &mut self,
        id: ShapeId,
        partial: &ShapePartial,
    ) -> Result<(), DocumentError> {
        self.ensure_writable()?;
        let shape = self
            .shapes
            .get_mut(&id)
            .ok_or(DocumentError::ShapeNotFound { id })?;
        shape.apply_partial(partial);
        Ok(())
    }

    /// Removes a shape and all of its descendants, returning the removed
    /// records.
    pub fn remove(&mut self, id: ShapeId) -> Result<Vec<ShapeRecord>, DocumentError> {
        self.ensure_writable()?;
        if !self.shapes.contains_key(&id) {
            return Err(DocumentError::ShapeNotFound { id });
        }

        let mut doomed = vec![id];
        let mut index = 0;
        while index < doomed.len() {
            doomed.extend(ShapeGraph::children(self, doomed[index]));
            index += 1;
        }

        self.draw_order.retain(|sid| !doomed.contains(sid));
        let removed = doomed
            .iter()
            .filter_map(|sid| self.shapes.remove(sid))
            .collect();
        debug!("Removed {} and its descendants", id);
        Ok(removed)
    }

    /// Resizes a shape and writes the result back.
    pub fn resize(
        &mut self,
        id: ShapeId,
        scale: Scale,
        options: &ResizeOptions,
    ) -> Result<ShapeRecord, ResizeError> {
        let result = resize_shape(self.graph(), id, scale, options)?;
        if let Some(slot) = self.shapes.get_mut(&id) {
            *slot = result.clone();
        }
        Ok(result)
    }

    fn ensure_writable(&self) -> Result<(), DocumentError> {
        if self.read_only {
            return Err(DocumentError::ReadOnly);
        }
        Ok(())
    }

    /// A shape's parent must exist and must not be the shape or one of its
    /// descendants.
    fn check_parent(&self, shape: &ShapeRecord) -> Result<(), DocumentError> {
        let ParentId::Shape(parent) = shape.parent else {
            return Ok(());
        };
        if !self.shapes.contains_key(&parent) {
            return Err(DocumentError::UnknownParent {
                id: shape.id,
                parent,
            });
        }

        let mut current = Some(parent);
        let mut seen = HashSet::new();
        while let Some(cursor) = current {
            if cursor == shape.id || !seen.insert(cursor) {
                return Err(DocumentError::ParentCycle { id: shape.id });
            }
            current = self.shapes.get(&cursor).and_then(|s| s.parent.shape_id());
        }
        Ok(())
    }
}

impl ShapeGraph for Document {
    fn is_read_only(&self) -> bool {
        self.read_only
    }

    fn shape(&self, id: ShapeId) -> Option<&ShapeRecord> {
        self.shapes.get(&id)
    }

    fn util(&self, kind: ShapeKind) -> &dyn ShapeUtil {
        self.registry.get(kind)
    }

    fn children(&self, id: ShapeId) -> Vec<ShapeId> {
        self.shapes()
            .filter(|s| s.parent == ParentId::Shape(id))
            .map(|s| s.id)
            .collect()
    }
}
