use crate::core::types::{Colour, Number, Point3, Vector3};

/// A struct representing a ray-object intersection.
///
/// A miss is represented by the absence of an intersection (`Option::None`), never by a flag.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersection {
    /// The position in world coordinates of the intersection
    pub pos: Point3,
    /// Surface normal at intersection, pointing outwards.
    ///
    /// Not normalised: for a sphere this is `pos - centre`, with a length equal to the radius
    pub normal: Vector3,
    /// Distance along the ray that the intersection occurred, in multiples of the ray's direction vector
    pub dist: Number,
    /// Colour of the object that was hit
    pub colour: Colour,
}
