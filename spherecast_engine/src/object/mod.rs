use crate::core::types::Number;
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use std::fmt::Debug;

pub mod list;
pub mod sphere;

/// A simple marker trait that enforces a few other traits we need in the renderer,
/// since objects are shared between all the render workers
pub trait ObjectRequirements: Debug + Send + Sync {}
impl<T: Debug + Send + Sync> ObjectRequirements for T {}

pub trait Object: ObjectRequirements {
    /// Attempts to perform an intersection between the given ray and the target object
    ///
    /// # Return Value
    /// This should return the *nearest* intersection that is within the given interval, else [`None`].
    /// Degenerate objects or rays should never intersect, rather than panic or return NaN distances.
    fn intersect(&self, ray: &Ray, interval: &Interval<Number>) -> Option<Intersection>;
}
