//! Fluent builder for constructing an [`Entity`] in one step.
//!
//! # Usage
//!
//! ```rust
//! use gs_core::{shape::rectangle, Shape};
//! use gs_entity::EntityBuilder;
//!
//! let entity = EntityBuilder::new("robot")
//!     .shape(Shape::new(rectangle(1.0, 1.0, 2)).unwrap())
//!     .position(5.0, 5.0)
//!     .build(gs_core::EntityId(0));
//! assert_eq!(entity.name, "robot");
//! ```

use gs_core::{shape::rectangle, EntityId, Shape};

use crate::entity::EntityKind;
use crate::Entity;

/// Fluent builder for [`Entity`].
///
/// The id is supplied at [`build`](Self::build) rather than construction,
/// since id assignment is the grid's counter, not the builder's concern.
pub struct EntityBuilder {
    name: String,
    shape: Option<Shape>,
    x: f64,
    y: f64,
    kind: EntityKind,
}

impl EntityBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shape: None,
            x: 0.0,
            y: 0.0,
            kind: EntityKind::Dynamic,
        }
    }

    pub fn shape(mut self, shape: Shape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Mark this entity as immovable — it never commits a
    /// collision-triggered realization.
    pub fn static_entity(mut self) -> Self {
        self.kind = EntityKind::Static;
        self
    }

    /// Build the entity, defaulting to a 1x1 unit-square shape if none was
    /// set.
    pub fn build(self, id: EntityId) -> Entity {
        let shape = self
            .shape
            .unwrap_or_else(|| Shape::new(rectangle(1.0, 1.0, 2)).expect("unit square is always valid"));
        Entity::new(id, self.name, shape, self.x, self.y, self.kind)
    }
}
