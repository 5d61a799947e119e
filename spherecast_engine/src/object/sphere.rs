use crate::core::types::{Colour, Number, Point3, Vector3};
use crate::object::Object;
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use crate::shared::validate;
use getset::CopyGetters;
use std::ops::RangeBounds;

/// A builder struct used to create a sphere
///
/// Call [Into::into] or [SphereObject::from] to create the actual sphere object
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SphereBuilder {
    pub pos: Point3,
    pub radius: Number,
    pub colour: Colour,
}

/// The actual instance of a sphere that can be rendered.
/// Has precomputed values and therefore cannot be mutated
#[derive(Copy, Clone, Debug, PartialEq, CopyGetters)]
#[get_copy = "pub"]
pub struct SphereObject {
    pos: Point3,
    radius: Number,
    radius_sqr: Number,
    colour: Colour,
}

impl SphereObject {
    pub fn new(pos: impl Into<Point3>, radius: Number, colour: impl Into<Colour>) -> Self {
        SphereBuilder {
            pos: pos.into(),
            radius,
            colour: colour.into(),
        }
        .into()
    }

    /// Spheres with a radius that isn't positive (including NaN) can never be hit
    pub fn is_degenerate(&self) -> bool { !(self.radius > 0.) }
}

impl From<SphereBuilder> for SphereObject {
    fn from(value: SphereBuilder) -> Self {
        Self {
            pos: value.pos,
            radius: value.radius,
            radius_sqr: value.radius * value.radius,
            colour: value.colour,
        }
    }
}

impl Object for SphereObject {
    fn intersect(&self, ray: &Ray, interval: &Interval<Number>) -> Option<Intersection> {
        // A negative radius still squares to a positive number, so it has to be rejected up front
        if self.is_degenerate() {
            return None;
        }

        //Do some ray-sphere intersection math to find if the ray intersects
        let ray_pos = ray.pos();
        let ray_dir = ray.dir();
        let ray_rel_pos = ray_pos - self.pos;

        // Quadratic formula variables
        let a = Vector3::dot(ray_dir, ray_dir);
        // Zero-length direction has no line to intersect with
        if !(a > 0.) || !a.is_finite() {
            return None;
        }
        let half_b = Vector3::dot(ray_rel_pos, ray_dir);
        let c = Vector3::dot(ray_rel_pos, ray_rel_pos) - self.radius_sqr;
        let discriminant = (half_b * half_b) - (a * c);

        //No solutions to where ray intersects with sphere because of negative square root
        // (also catches a NaN discriminant)
        if !(discriminant >= 0.) {
            return None;
        }

        let sqrt_d = discriminant.sqrt();

        // Find the nearest root that lies in the acceptable range.
        // The less-positive root is closer so check it first, and only fail if neither is valid.
        // For a tangent ray (`discriminant == 0`) both roots are the same
        // Overflowing inputs give infinite roots, which have no point on the ray
        let accept = |root: Number| root.is_finite() && interval.contains(&root);
        let mut root = (-half_b - sqrt_d) / a;
        if !accept(root) {
            root = (-half_b + sqrt_d) / a;
            if !accept(root) {
                return None;
            }
        }

        let dist = root;
        let world_point = ray.at(dist);
        let outward_normal = world_point - self.pos;

        let intersection = Intersection {
            pos: world_point,
            normal: outward_normal,
            dist,
            colour: self.colour,
        };
        validate::intersection(ray, &intersection);

        Some(intersection)
    }
}
