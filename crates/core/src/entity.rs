//! Uniform view over the closed set of world entities.

use arrayvec::ArrayVec;

use crate::bird::Bird;
use crate::ground::Ground;
use crate::pipe::Pipe;
use crate::types::{EntityKind, Rect};

/// Borrowed, kind-tagged reference to one entity of the world.
#[derive(Debug, Clone, Copy)]
pub enum Entity<'a> {
    Bird(&'a Bird),
    Pipe(&'a Pipe),
    Ground(&'a Ground),
}

impl Entity<'_> {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Bird(_) => EntityKind::Bird,
            Entity::Pipe(_) => EntityKind::Pipe,
            Entity::Ground(_) => EntityKind::Ground,
        }
    }

    /// Bounding shapes of the entity (a pipe has two).
    pub fn bounds(&self) -> ArrayVec<Rect, 2> {
        let mut out = ArrayVec::new();
        match self {
            Entity::Bird(bird) => out.push(bird.bounds()),
            Entity::Ground(ground) => out.push(ground.bounds()),
            Entity::Pipe(pipe) => {
                let [top, bottom] = pipe.bounds();
                out.push(top);
                out.push(bottom);
            }
        }
        out
    }

    /// Whether any bounding shape of this entity overlaps `rect`.
    pub fn intersects(&self, rect: &Rect) -> bool {
        self.bounds().iter().any(|b| b.intersects(rect))
    }
}
