#![allow(dead_code)]

use spherecast_engine::core::types::*;
use spherecast_engine::object::sphere::SphereObject;
use spherecast_engine::render::{render_opts::RenderOpts, renderer::Renderer};
use spherecast_engine::scene::{camera::Camera, Scene};
use std::num::NonZeroUsize;

pub type Rng = rand::rngs::SmallRng;

pub const RENDERER_THREAD_COUNT: usize = 4;

pub fn opts(width: usize, height: usize) -> RenderOpts {
    RenderOpts {
        width: NonZeroUsize::new(width).expect("width should be non-zero"),
        height: NonZeroUsize::new(height).expect("height should be non-zero"),
        ..Default::default()
    }
}

/// A camera at the origin looking down `-Z`, with the given vertical FOV in degrees
pub fn camera(fov: Number) -> Camera {
    Camera {
        fov,
        ..Default::default()
    }
}

pub fn scene(camera: Camera, spheres: impl IntoIterator<Item = SphereObject>) -> Scene {
    Scene::new(camera, spheres)
}

/// Quick and dirty renders the scene
pub fn render_simple(scene: &Scene, opts: &RenderOpts) -> Image {
    let renderer = Renderer::new(RENDERER_THREAD_COUNT).expect("failed creating renderer");
    renderer.render(scene, opts).img
}

/// Counts the pixels in the image that are exactly the given colour
pub fn count_colour(img: &Image, col: Colour) -> usize { img.iter().filter(|&&px| px == col).count() }
