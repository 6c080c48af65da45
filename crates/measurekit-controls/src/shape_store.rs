//! Ordered storage for measured shapes.

use serde::{Deserialize, Serialize};

use crate::model::Shape;

/// A shape together with its store-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredShape {
    pub id: u64,
    pub shape: Shape,
}

/// Ordered list of shapes accumulated during a measuring session.
///
/// Insertion order is drawing order. Ids are unique per store and never
/// reused, even across `clear`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeStore {
    shapes: Vec<StoredShape>,
    next_id: u64,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            next_id: 1,
        }
    }

    /// Generates a new unique id.
    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Appends a shape and returns its id.
    pub fn push(&mut self, shape: Shape) -> u64 {
        let id = self.generate_id();
        self.shapes.push(StoredShape { id, shape });
        id
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&StoredShape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut StoredShape> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StoredShape> {
        self.shapes.iter()
    }

    pub fn last(&self) -> Option<&StoredShape> {
        self.shapes.last()
    }

    /// Discards every shape. Ids keep counting up.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::new()
    }
}
