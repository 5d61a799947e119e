use crate::core::targets::*;
use crate::core::types::{Colour, Image, Number};
use crate::object::list::nearest_intersection;
use crate::object::Object;
use crate::render::render::{Render, RenderStats};
use crate::render::render_opts::RenderOpts;
use crate::scene::camera::Viewport;
use crate::scene::Scene;
use crate::shared::interval::Interval;
use crate::shared::validate;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, trace, warn};

#[derive(Debug)]
pub struct Renderer {
    /// A thread pool used to distribute the workload
    thread_pool: ThreadPool,
}

#[derive(Error, Debug)]
pub enum RendererCreateError {
    #[error("failed to create worker thread pool")]
    ThreadPoolError {
        #[from]
        source: ThreadPoolBuildError,
    },
}

impl Renderer {
    /// Creates a renderer backed by a pool of `num_threads` workers.
    ///
    /// Passing `0` lets rayon pick (normally one per logical CPU).
    pub fn new(num_threads: usize) -> Result<Self, RendererCreateError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|id| format!("Renderer::worker_{id}"))
            .build()
            .map_err(RendererCreateError::from)?;

        debug!(target: RENDERER, num_threads = pool.current_num_threads(), "created renderer");
        Ok(Self { thread_pool: pool })
    }

    pub fn num_threads(&self) -> usize { self.thread_pool.current_num_threads() }

    /// Renders the scene into a new image of the dimensions given in the `render_opts`.
    ///
    /// Rendering can't fail. If the camera has invalid settings they are logged, and the defaults are
    /// used in their place (see [Camera::calculate_viewport](crate::scene::camera::Camera::calculate_viewport)).
    pub fn render<Obj: Object>(&self, scene: &Scene<Obj>, render_opts: &RenderOpts) -> Render<Image> {
        let (w, h) = (render_opts.width.get(), render_opts.height.get());

        if let Err(err) = scene.camera.validate() {
            warn!(target: RENDERER, ?err, camera = ?scene.camera, "camera is invalid, using defaults for invalid settings");
        }
        let viewport = scene.camera.calculate_viewport(w, h);

        self.render_actual(scene, render_opts, viewport)
    }

    /// Renders a single pixel in the scene, and returns the colour
    fn render_px<Obj: Object>(
        scene: &Scene<Obj>,
        viewport: &Viewport,
        interval: &Interval<Number>,
        far_clip: Number,
        x: usize,
        y: usize,
    ) -> Colour {
        let ray = viewport.calc_ray(x, y);
        validate::ray(&ray);

        match nearest_intersection(&scene.objects, &ray, interval, far_clip) {
            Some(intersect) => intersect.colour,
            None => Colour::BLACK,
        }
    }

    fn render_actual<Obj: Object>(&self, scene: &Scene<Obj>, render_opts: &RenderOpts, viewport: Viewport) -> Render<Image> {
        let (w, h) = (render_opts.width.get(), render_opts.height.get());
        let interval = render_opts.dist_interval();
        let far_clip = render_opts.far_clip;

        let mut img = Image::new_blank(w, h);

        let start = Instant::now();
        let num_threads = self.thread_pool.current_num_threads();
        self.thread_pool.in_place_scope(|scope| {
            for (y, row) in img.rows_mut().enumerate() {
                let (viewport, interval) = (&viewport, &interval);
                scope.spawn(move |_| {
                    for (x, px) in row.iter_mut().enumerate() {
                        *px = Self::render_px(scene, viewport, interval, far_clip, x, y);
                    }
                });
            }
        });
        let duration = start.elapsed();

        trace!(target: RENDERER, ?duration, num_threads, "render finished");

        Render {
            img,
            stats: RenderStats {
                num_threads,
                duration,
                num_px: w * h,
            },
        }
    }
}
