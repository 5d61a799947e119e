use crate::core::types::Number;
use crate::object::Object;
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;

/// Finds the nearest intersection between the ray and a list of objects.
///
/// The search starts out with `far_clip` as the "nearest so far" distance, so anything at or past it
/// is treated as not visible. An object only replaces the current best if it is *strictly* closer,
/// meaning on an exact tie the object earliest in the list wins.
pub fn nearest_intersection<'o, Obj: Object + 'o>(
    objects: impl IntoIterator<Item = &'o Obj>,
    ray: &Ray,
    interval: &Interval<Number>,
    far_clip: Number,
) -> Option<Intersection> {
    let mut nearest: Option<Intersection> = None;
    let mut nearest_dist = far_clip;

    for obj in objects {
        let Some(intersect) = obj.intersect(ray, interval) else {
            continue;
        };
        if intersect.dist < nearest_dist {
            nearest_dist = intersect.dist;
            nearest = Some(intersect);
        }
    }

    nearest
}
