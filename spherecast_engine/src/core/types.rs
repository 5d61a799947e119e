use crate::core::colour::ColourRgb;

/// Numeric type used for a single colour channel
pub type Channel = u8;
pub type Colour = ColourRgb;
/// The framebuffer type produced by the renderer
pub type Image = crate::core::image::Image<Colour>;

/// Numeric type used for most calculations in the engine
pub type Number = f64;
pub type Vector3 = glam::DVec3;
pub type Point3 = glam::DVec3;
pub type Matrix3 = glam::DMat3;
pub type Transform3 = glam::DAffine3;
