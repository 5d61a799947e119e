use crate::core::types::{Number, Point3, Vector3};

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Ray {
    pos: Point3,
    dir: Vector3,
}

impl Ray {
    /// World-space coordinate the ray starts at
    #[inline(always)]
    pub fn pos(&self) -> Point3 { self.pos }

    /// Direction vector of the ray.
    ///
    /// # Note
    /// This is *not* normalised. Its length scales the distances reported for intersections,
    /// so distances are only comparable between intersections of the same ray.
    #[inline(always)]
    pub fn dir(&self) -> Vector3 { self.dir }

    pub fn new(pos: Point3, dir: Vector3) -> Self { Self { pos, dir } }

    /// Gets the position at a given distance along the ray
    ///
    /// `pos + (t * dir)`
    pub fn at(&self, t: Number) -> Point3 { self.pos + (self.dir * t) }
}
