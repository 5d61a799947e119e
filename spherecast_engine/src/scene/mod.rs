use crate::object::sphere::SphereObject;
use crate::object::Object;
use camera::Camera;

pub mod camera;
pub mod load;

/// Everything that gets rendered: a camera, and the objects it looks at.
///
/// A scene is built once (normally by [load]) and is then only ever read.
/// The order of the objects matters: when two objects are hit at exactly the same distance, the earlier one is shown.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene<Obj: Object = SphereObject> {
    pub camera: Camera,
    pub objects: Vec<Obj>,
}

impl<Obj: Object> Scene<Obj> {
    pub fn new<O: Into<Obj>>(camera: Camera, objects: impl IntoIterator<Item = O>) -> Self {
        Self {
            camera,
            objects: objects.into_iter().map(O::into).collect(),
        }
    }
}

impl<Obj: Object> Default for Scene<Obj> {
    fn default() -> Self {
        Self {
            camera: Camera::default(),
            objects: vec![],
        }
    }
}
