use glam::Vec2;

/// Anything that occupies a square on the canvas, positioned by its centre.
pub trait Body {
    fn pos(&self) -> Vec2;
    fn size(&self) -> f32;

    fn hitbox(&self) -> Hitbox {
        Hitbox::centered(self.pos(), Vec2::splat(self.size()))
    }

    fn collides<B: Body + ?Sized>(&self, other: &B) -> bool {
        self.hitbox().overlaps(&other.hitbox())
    }
}

/// Axis aligned box, `min` inclusive and `max` exclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub min: Vec2,
    pub max: Vec2,
}

impl Hitbox {
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Touching edges do not count as an overlap.
    #[inline]
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}
