//! CollisionWorld: colliders with layer and tag queries.

use std::collections::BTreeMap;

use steering_core::types::{ColliderId, Tag, Vec2};

use crate::layers::Layers;
use crate::raycast::{RayCaster, RayHit};
use crate::shapes::Shape;

/// A collider placed in the world.
#[derive(Debug, Clone)]
pub struct Collider {
    pub id: ColliderId,
    pub shape: Shape,
    /// Center in world space.
    pub position: Vec2,
    pub layers: Layers,
    pub tag: Option<Tag>,
}

/// Interns tag strings so per-tick comparisons are integer compares.
#[derive(Debug, Clone, Default)]
pub struct TagRegistry {
    names: Vec<String>,
}

impl TagRegistry {
    /// Tag for `name`, registering it on first use.
    pub fn intern(&mut self, name: &str) -> Tag {
        if let Some(tag) = self.lookup(name) {
            return tag;
        }
        self.names.push(name.to_string());
        Tag(self.names.len() as u32 - 1)
    }

    /// Tag for `name` if it has been registered.
    pub fn lookup(&self, name: &str) -> Option<Tag> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| Tag(i as u32))
    }

    /// Name a tag was registered under.
    pub fn name(&self, tag: Tag) -> Option<&str> {
        self.names.get(tag.0 as usize).map(String::as_str)
    }
}

/// Reference collision world. Brute-force queries over all colliders,
/// iterated in id order so results are deterministic.
#[derive(Debug, Clone, Default)]
pub struct CollisionWorld {
    colliders: BTreeMap<ColliderId, Collider>,
    next_id: u32,
    tags: TagRegistry,
}

impl CollisionWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a collider, returning its id.
    pub fn insert(
        &mut self,
        shape: Shape,
        position: Vec2,
        layers: Layers,
        tag: Option<&str>,
    ) -> ColliderId {
        let id = ColliderId(self.next_id);
        self.next_id += 1;
        let tag = tag.map(|name| self.tags.intern(name));
        self.colliders.insert(
            id,
            Collider {
                id,
                shape,
                position,
                layers,
                tag,
            },
        );
        id
    }

    /// Move a collider. Returns false if it does not exist.
    pub fn set_position(&mut self, id: ColliderId, position: Vec2) -> bool {
        match self.colliders.get_mut(&id) {
            Some(collider) => {
                collider.position = position;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: ColliderId) -> Option<Collider> {
        self.colliders.remove(&id)
    }

    pub fn get(&self, id: ColliderId) -> Option<&Collider> {
        self.colliders.get(&id)
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Collider> {
        self.colliders.values()
    }

    /// Intern a tag name so agents can resolve their comrade tag up front.
    pub fn intern_tag(&mut self, name: &str) -> Tag {
        self.tags.intern(name)
    }

    pub fn tags(&self) -> &TagRegistry {
        &self.tags
    }
}

impl RayCaster for CollisionWorld {
    fn ray_cast_all(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        layers: Layers,
    ) -> Vec<RayHit> {
        let direction = direction.normalize_or_zero();
        if direction == Vec2::ZERO || !origin.is_finite() || max_distance < 0.0 {
            return Vec::new();
        }

        let mut hits: Vec<RayHit> = self
            .colliders
            .values()
            .filter(|c| c.layers.intersects(layers))
            .filter_map(|c| {
                let distance = c.shape.ray_entry(c.position, origin, direction)?;
                (distance <= max_distance).then_some(RayHit {
                    distance,
                    collider: c.id,
                    tag: c.tag,
                })
            })
            .collect();

        hits.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then(a.collider.cmp(&b.collider))
        });
        hits
    }
}
