//! Pairwise circle collision detection
//!
//! Every frame the session copies the active player, enemies and bullets into
//! a `CollisionSystem` and asks it for overlapping pairs. The test is a plain
//! O(n²) sweep: entity counts stay in the tens to low hundreds, so there is no
//! broad phase. Which kinds may touch at all is decided by `COLLISION_POLICY`.

use glam::Vec2;

use super::entity::{Collidable, EntityKind};

/// Kind-pair policy, indexed by `EntityKind::index`. Must stay symmetric.
///
/// |          | Player | Enemy | Bullet | Particle |
/// |----------|--------|-------|--------|----------|
/// | Player   | yes    | yes   | no     | no       |
/// | Enemy    | yes    | no    | yes    | no       |
/// | Bullet   | no     | yes   | no     | no       |
/// | Particle | no     | no    | no     | no       |
pub const COLLISION_POLICY: [[bool; 4]; 4] = [
    [true, true, false, false],
    [true, false, true, false],
    [false, true, false, false],
    [false, false, false, false],
];

/// Whether two kinds are allowed to interact
#[inline]
pub fn should_collide(a: EntityKind, b: EntityKind) -> bool {
    COLLISION_POLICY[a.index()][b.index()]
}

/// Circle-circle overlap without a square root
#[inline]
pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a_pos.distance_squared(b_pos) <= reach * reach
}

/// Handle back into the session's entity collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityRef {
    Player,
    Enemy(usize),
    Bullet(usize),
    Particle(usize),
}

impl EntityRef {
    pub fn kind(self) -> EntityKind {
        match self {
            EntityRef::Player => EntityKind::Player,
            EntityRef::Enemy(_) => EntityKind::Enemy,
            EntityRef::Bullet(_) => EntityKind::Bullet,
            EntityRef::Particle(_) => EntityKind::Particle,
        }
    }
}

/// Per-frame view of one entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub entity: EntityRef,
    pub pos: Vec2,
    pub radius: f32,
    pub active: bool,
}

impl Collider {
    pub fn of(entity: EntityRef, body: &impl Collidable) -> Self {
        debug_assert_eq!(entity.kind(), body.kind());
        Self {
            entity,
            pos: body.position(),
            radius: body.radius(),
            active: body.is_active(),
        }
    }

    #[inline]
    pub fn kind(&self) -> EntityKind {
        self.entity.kind()
    }
}

/// Two overlapping entities. Unordered; `ordered` sorts by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionPair {
    pub a: EntityRef,
    pub b: EntityRef,
}

impl CollisionPair {
    /// Both refs with the lower `EntityKind::index` first
    pub fn ordered(self) -> (EntityRef, EntityRef) {
        if self.a.kind().index() <= self.b.kind().index() {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }
}

/// Collects colliders for one frame and reports overlapping pairs
#[derive(Debug, Default)]
pub struct CollisionSystem {
    colliders: Vec<Collider>,
}

impl CollisionSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            colliders: Vec::with_capacity(capacity),
        }
    }

    pub fn add(&mut self, collider: Collider) {
        self.colliders.push(collider);
    }

    pub fn add_entity(&mut self, entity: EntityRef, body: &impl Collidable) {
        self.add(Collider::of(entity, body));
    }

    pub fn clear(&mut self) {
        self.colliders.clear();
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// All eligible overlapping pairs; each unordered pair appears at most once
    pub fn check_collisions(&self) -> Vec<CollisionPair> {
        let mut pairs = Vec::new();

        for (i, a) in self.colliders.iter().enumerate() {
            if !a.active {
                continue;
            }
            for b in &self.colliders[i + 1..] {
                if !b.active || !should_collide(a.kind(), b.kind()) {
                    continue;
                }
                if circles_overlap(a.pos, a.radius, b.pos, b.radius) {
                    pairs.push(CollisionPair {
                        a: a.entity,
                        b: b.entity,
                    });
                }
            }
        }

        pairs
    }
}
