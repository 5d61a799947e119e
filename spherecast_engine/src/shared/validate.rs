//! Debug-only invariant checks. These compile down to nothing in release builds.

use crate::core::types::{Number, Point3, Vector3};
use crate::shared::intersect::Intersection;
use crate::shared::ray::Ray;
use approx::*;
use std::borrow::Borrow;

macro_rules! debug_assert_only {
    () => {
        if cfg!(not(debug_assertions)) {
            return;
        }
    };
}

pub const EPSILON: Number = 1e-6;
pub const RELATIVE: Number = 1e-3;

#[inline(always)]
#[track_caller]
pub fn number(val: impl Borrow<Number>) {
    debug_assert_only!();

    let val = val.borrow();
    assert!(!val.is_nan(), "should not be nan; val: {val}");
}

#[inline(always)]
#[track_caller]
pub fn point3(v: impl Borrow<Point3>) {
    debug_assert_only!();
    let v = v.borrow();
    assert!(!v.is_nan(), "should not be nan; vec: {v:?}");
}

#[inline(always)]
#[track_caller]
pub fn vector3(v: impl Borrow<Vector3>) {
    debug_assert_only!();
    let v = v.borrow();
    assert!(!v.is_nan(), "should not be nan; vec: {v:?}");
}

#[inline(always)]
#[track_caller]
pub fn ray(r: impl Borrow<Ray>) {
    debug_assert_only!();
    let r = r.borrow();
    point3(r.pos());
    vector3(r.dir());
}

/// Asserts that an intersection was valid for the ray that produced it
#[inline(always)]
#[track_caller]
pub fn intersection(ray: impl Borrow<Ray>, intersect: impl Borrow<Intersection>) {
    debug_assert_only!();

    let intersect = intersect.borrow();
    let ray = ray.borrow();

    point3(intersect.pos);
    vector3(intersect.normal);
    number(intersect.dist);

    assert!(
        Point3::relative_eq(&intersect.pos, &ray.at(intersect.dist), EPSILON, RELATIVE),
        "intersect position doesn't match ray at intersection dist; intersect_pos: {i_pos:?}, dist: {dist}, ray: {ray:?}, ray_pos: {r_pos:?}",
        i_pos = intersect.pos,
        dist = intersect.dist,
        ray = ray,
        r_pos = ray.at(intersect.dist)
    );
}
