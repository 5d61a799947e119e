//! A small CPU ray caster: spheres, seen through a pinhole camera, rendered flat-shaded into an RGB image.
//!
//! The usual flow is [scene::load::load_scene] to read a scene document, [render::renderer::Renderer::render]
//! to produce an image, and [output::write_image] to save it.

pub mod core;
pub mod object;
pub mod output;
pub mod render;
pub mod scene;
pub mod shared;
