use crate::targets::*;
use spherecast_engine::render::render_opts::RenderOpts;
use spherecast_engine::scene::Scene;
use tracing::info;

/// Logs a summary of what is about to be rendered
pub fn log_scene(scene: &Scene, opts: &RenderOpts) {
    info!(target: REPORT, width = opts.width.get(), height = opts.height.get(), "image");

    let camera = &scene.camera;
    info!(
        target: REPORT,
        origin = ?camera.pos,
        rotation = camera.rotation,
        fov = camera.fov,
        "camera"
    );

    info!(target: REPORT, count = scene.objects.len(), "spheres");
    for (index, sphere) in scene.objects.iter().enumerate() {
        info!(
            target: REPORT,
            index,
            origin = ?sphere.pos(),
            radius = sphere.radius(),
            colour = ?<[u8; 3]>::from(sphere.colour()),
            "sphere"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spherecast_engine::core::types::Colour;
    use spherecast_engine::object::sphere::SphereObject;
    use spherecast_engine::scene::camera::Camera;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    /// Collects everything the subscriber writes
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("log buffer lock").extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> { Ok(()) }
    }

    #[test]
    fn report_lists_camera_and_spheres() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer({
                let captured = captured.clone();
                move || captured.clone()
            })
            .finish();

        let scene: Scene = Scene::new(
            Camera::from_degrees((1., 2., 3.), 45., 180.),
            [SphereObject::new((0., 0., -5.), 1.5, Colour::new([10, 20, 30]))],
        );
        tracing::subscriber::with_default(subscriber, || log_scene(&scene, &RenderOpts::default()));

        let output = String::from_utf8(captured.0.lock().expect("log buffer lock").clone()).expect("utf8 logs");
        // Rotation is reported as stored, in radians
        assert!(output.contains("rotation=3.14159"), "{output}");
        assert!(output.contains("fov=45"), "{output}");
        assert!(output.contains("width=128 height=128"), "{output}");
        assert!(output.contains("radius=1.5"), "{output}");
        assert!(output.contains("colour=[10, 20, 30]"), "{output}");
    }
}
