//! Loading a [Scene] from a JSON scene document.
//!
//! Loading is deliberately lenient: apart from the document not being valid JSON (or not an object at the top level),
//! every missing or malformed value is replaced with a default, and a warning is logged for it.

use crate::core::targets::*;
use crate::core::types::{Channel, Colour, Number, Point3};
use crate::object::sphere::{SphereBuilder, SphereObject};
use crate::render::render_opts::RenderOpts;
use crate::scene::camera::Camera;
use crate::scene::Scene;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_SPHERE_RADIUS: Number = 0.5;

/// The result of loading a scene document: what to render, and how big to render it
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedScene {
    pub scene: Scene,
    pub render_opts: RenderOpts,
}

#[derive(Error, Debug)]
pub enum SceneLoadError {
    #[error("could not read scene file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("scene is not valid JSON")]
    Json {
        #[from]
        source: serde_json::Error,
    },
    #[error("scene document must be a JSON object at the top level")]
    NotAnObject,
}

/// Reads and parses the scene document at the given path
pub fn load_scene(path: impl AsRef<Path>) -> Result<LoadedScene, SceneLoadError> {
    let path = path.as_ref();
    debug!(target: SCENE, ?path, "loading scene");

    let text = std::fs::read_to_string(path).map_err(|source| SceneLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_scene(&text)
}

/// Parses a scene document from its JSON text
pub fn parse_scene(text: &str) -> Result<LoadedScene, SceneLoadError> {
    let value: Value = serde_json::from_str(text)?;
    if !value.is_object() {
        return Err(SceneLoadError::NotAnObject);
    }
    let doc: SceneDocument = serde_json::from_value(value)?;

    let camera = camera_from(&doc.camera);
    let (width, height) = dims_from(&doc.image);
    let spheres = spheres_from(&doc.spheres);

    debug!(target: SCENE, ?camera, %width, %height, num_spheres = spheres.len(), "parsed scene");

    Ok(LoadedScene {
        scene: Scene::new(camera, spheres),
        render_opts: RenderOpts {
            width,
            height,
            ..Default::default()
        },
    })
}

/// Top-level layout of the document.
///
/// Each section is kept as a raw [Value] so that a malformed section falls back to defaults,
/// instead of failing the whole document.
#[derive(Deserialize, Debug, Default)]
struct SceneDocument {
    #[serde(default, deserialize_with = "object_or_none")]
    camera: Option<Map<String, Value>>,
    #[serde(default, deserialize_with = "object_or_none")]
    image: Option<Map<String, Value>>,
    #[serde(default)]
    spheres: Option<Value>,
}

fn object_or_none<'de, D: Deserializer<'de>>(de: D) -> Result<Option<Map<String, Value>>, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::Object(map) => Some(map),
        _ => None,
    })
}

// region Sections

fn camera_from(camera: &Option<Map<String, Value>>) -> Camera {
    let Some(camera) = camera else {
        warn!(target: SCENE, "camera not configured, using defaults");
        return Camera::default();
    };

    let pos = point_from(camera.get("origin"));
    let fov = match camera.get("fov").and_then(Value::as_f64) {
        Some(fov) if Camera::fov_is_valid(fov) => fov,
        Some(fov) => {
            warn!(target: SCENE, fov, default = Camera::DEFAULT_FOV, "camera fov must be within (0, 180) degrees");
            Camera::DEFAULT_FOV
        }
        None => {
            warn!(target: SCENE, default = Camera::DEFAULT_FOV, "camera fov not configured");
            Camera::DEFAULT_FOV
        }
    };
    let rotation = camera.get("rotation").and_then(Value::as_f64).unwrap_or(0.);

    Camera::from_degrees(pos, fov, rotation)
}

fn dims_from(image: &Option<Map<String, Value>>) -> (NonZeroUsize, NonZeroUsize) {
    let Some(image) = image else {
        warn!(
            target: SCENE,
            default = %RenderOpts::DEFAULT_DIM,
            "image width and height not configured"
        );
        return (RenderOpts::DEFAULT_DIM, RenderOpts::DEFAULT_DIM);
    };

    (dim_from(image, "width"), dim_from(image, "height"))
}

fn dim_from(image: &Map<String, Value>, key: &str) -> NonZeroUsize {
    let raw = image.get(key);
    let dim = raw.and_then(Value::as_f64).and_then(|n| {
        // Fractional dimensions are truncated, anything else that doesn't fit is rejected
        let n = n.trunc();
        if n >= 1. && n <= u32::MAX as Number {
            NonZeroUsize::new(n as usize)
        } else {
            None
        }
    });

    dim.unwrap_or_else(|| {
        warn!(target: SCENE, key, value = ?raw, default = %RenderOpts::DEFAULT_DIM, "image dimension not valid");
        RenderOpts::DEFAULT_DIM
    })
}

fn spheres_from(spheres: &Option<Value>) -> Vec<SphereObject> {
    let entries = match spheres {
        Some(Value::Array(entries)) => entries.as_slice(),
        None => return vec![],
        Some(other) => {
            warn!(target: SCENE, value = ?other, "spheres is not an array, ignoring");
            return vec![];
        }
    };

    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match entry {
            Value::Object(sphere) => Some(sphere_from(sphere)),
            other => {
                warn!(target: SCENE, index, value = ?other, "sphere entry is not an object, skipping");
                None
            }
        })
        .collect()
}

fn sphere_from(sphere: &Map<String, Value>) -> SphereObject {
    SphereBuilder {
        pos: point_from(sphere.get("origin")),
        radius: sphere.get("radius").and_then(Value::as_f64).unwrap_or(DEFAULT_SPHERE_RADIUS),
        colour: colour_from(sphere.get("color")),
    }
    .into()
}

// endregion Sections

// region Values

/// The first three entries of an array, or [None] if it isn't an array of at least that many
fn triple(value: Option<&Value>) -> Option<[&Value; 3]> {
    match value?.as_array()?.as_slice() {
        [a, b, c, ..] => Some([a, b, c]),
        _ => None,
    }
}

fn point_from(value: Option<&Value>) -> Point3 {
    match triple(value) {
        Some(xyz) => Point3::from(xyz.map(|v| v.as_f64().unwrap_or(0.))),
        None => Point3::ZERO,
    }
}

fn colour_from(value: Option<&Value>) -> Colour {
    match triple(value) {
        // `as` saturates at the ends of the channel range, and truncates fractions
        Some(rgb) => Colour::new(rgb.map(|v| v.as_f64().map_or(0, |c| c as Channel))),
        None => Colour::BLACK,
    }
}

// endregion Values

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nonzero::nonzero;
    use std::io::Write;

    fn parse(text: &str) -> LoadedScene { parse_scene(text).expect("scene should parse") }

    #[test]
    fn full_document() {
        let loaded = parse(
            r#"{
                "camera": { "origin": [1, 2, 3], "fov": 45, "rotation": 90 },
                "image": { "width": 64, "height": 32 },
                "spheres": [
                    { "origin": [0, 0, -5], "radius": 1.5, "color": [255, 0, 0] },
                    { "origin": [2, 0, -8], "radius": 2, "color": [0, 128, 255] }
                ]
            }"#,
        );

        let camera = loaded.scene.camera;
        assert_eq!(camera.pos, Point3::new(1., 2., 3.));
        assert_relative_eq!(camera.fov, 45.);
        assert_relative_eq!(camera.rotation, std::f64::consts::FRAC_PI_2);

        assert_eq!(loaded.render_opts.width, nonzero!(64_usize));
        assert_eq!(loaded.render_opts.height, nonzero!(32_usize));
        assert_eq!(loaded.render_opts.far_clip, RenderOpts::DEFAULT_FAR_CLIP);

        let spheres = &loaded.scene.objects;
        assert_eq!(spheres.len(), 2);
        assert_eq!(spheres[0], SphereObject::new((0., 0., -5.), 1.5, Colour::RED));
        assert_eq!(spheres[1], SphereObject::new((2., 0., -8.), 2., (0, 128, 255)));
    }

    #[test]
    fn empty_object_uses_all_defaults() {
        let loaded = parse("{}");
        assert_eq!(loaded.scene.camera, Camera::default());
        assert_eq!(loaded.render_opts, RenderOpts::default());
        assert!(loaded.scene.objects.is_empty());
    }

    #[test]
    fn out_of_range_fov_uses_default() {
        for fov in ["0", "-45", "180", "200", "1e300", "\"wide\""] {
            let loaded = parse(&format!(r#"{{ "camera": {{ "fov": {fov}, "rotation": 10 }} }}"#));
            assert_eq!(loaded.scene.camera.fov, Camera::DEFAULT_FOV, "fov {fov}");
            assert_relative_eq!(loaded.scene.camera.rotation, 10_f64.to_radians());
            assert_eq!(loaded.scene.camera.validate(), Ok(()));
        }
        let loaded = parse(r#"{ "camera": { "fov": 179.5 } }"#);
        assert_eq!(loaded.scene.camera.fov, 179.5);
    }

    #[test]
    fn image_and_spheres_read_without_camera() {
        let loaded = parse(r#"{ "image": { "width": 10, "height": 20 }, "spheres": [ {} ] }"#);
        assert_eq!(loaded.scene.camera, Camera::default());
        assert_eq!(loaded.render_opts.width, nonzero!(10_usize));
        assert_eq!(loaded.render_opts.height, nonzero!(20_usize));
        assert_eq!(loaded.scene.objects.len(), 1);
    }

    #[test]
    fn sphere_defaults() {
        let loaded = parse(r#"{ "spheres": [ {} ] }"#);
        let sphere = loaded.scene.objects[0];
        assert_eq!(sphere.pos(), Point3::ZERO);
        assert_eq!(sphere.radius(), DEFAULT_SPHERE_RADIUS);
        assert_eq!(sphere.colour(), Colour::BLACK);
    }

    #[test]
    fn malformed_origins() {
        for (origin, expected) in [
            ("[1, 2]", Point3::ZERO),
            ("\"up\"", Point3::ZERO),
            ("[1, \"x\", 3]", Point3::new(1., 0., 3.)),
            ("[1, 2, 3, 4]", Point3::new(1., 2., 3.)),
        ] {
            let loaded = parse(&format!(r#"{{ "camera": {{ "origin": {origin} }} }}"#));
            assert_eq!(loaded.scene.camera.pos, expected, "origin {origin}");
        }
    }

    #[test]
    fn colour_channels_saturate_and_truncate() {
        for (colour, expected) in [
            ("[300, -5, 12.9]", Colour::new([255, 0, 12])),
            ("[10, null, 20]", Colour::new([10, 0, 20])),
            ("[10, 20]", Colour::BLACK),
            ("7", Colour::BLACK),
        ] {
            let loaded = parse(&format!(r#"{{ "spheres": [ {{ "color": {colour} }} ] }}"#));
            assert_eq!(loaded.scene.objects[0].colour(), expected, "colour {colour}");
        }
    }

    #[test]
    fn invalid_dims_fall_back() {
        for (w, h) in [("0", "-3"), ("\"wide\"", "null"), ("0.5", "1e30")] {
            let loaded = parse(&format!(r#"{{ "image": {{ "width": {w}, "height": {h} }} }}"#));
            assert_eq!(loaded.render_opts.width, RenderOpts::DEFAULT_DIM, "width {w}");
            assert_eq!(loaded.render_opts.height, RenderOpts::DEFAULT_DIM, "height {h}");
        }
        let loaded = parse(r#"{ "image": { "width": 12.7, "height": 3 } }"#);
        assert_eq!(loaded.render_opts.width, nonzero!(12_usize));
    }

    #[test]
    fn non_object_sphere_entries_skipped() {
        let loaded = parse(r#"{ "spheres": [ 1, { "radius": 2 }, "sphere", null ] }"#);
        assert_eq!(loaded.scene.objects.len(), 1);
        assert_eq!(loaded.scene.objects[0].radius(), 2.);
    }

    #[test]
    fn non_object_sections_use_defaults() {
        let loaded = parse(r#"{ "camera": 5, "image": [], "spheres": {} }"#);
        assert_eq!(loaded.scene.camera, Camera::default());
        assert_eq!(loaded.render_opts, RenderOpts::default());
        assert!(loaded.scene.objects.is_empty());
    }

    #[test]
    fn errors() {
        assert!(matches!(parse_scene("{ not json"), Err(SceneLoadError::Json { .. })));
        assert!(matches!(parse_scene("[1, 2, 3]"), Err(SceneLoadError::NotAnObject)));
        assert!(matches!(parse_scene("42"), Err(SceneLoadError::NotAnObject)));
        assert!(matches!(
            load_scene("/this/path/does/not/exist.json"),
            Err(SceneLoadError::Io { .. })
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "image": {{ "width": 3, "height": 2 }} }}"#).expect("write scene");

        let loaded = load_scene(file.path()).expect("scene should load");
        assert_eq!(loaded.render_opts.num_px(), 6);
    }
}
