use crate::core::types::{Number, Point3, Transform3};
use crate::shared::math;
use crate::shared::ray::Ray;
use crate::shared::validate;
use thiserror::Error;

/// A pinhole camera, looking down its local `-Z` axis with `+Y` up
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    /// Position the camera is located at
    pub pos: Point3,
    /// Vertical FOV, in degrees
    pub fov: Number,
    /// Rotation about the vertical axis, in radians. Positive values turn the view to the left (towards `-X`)
    pub rotation: Number,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            pos: Point3::ZERO,
            fov: Self::DEFAULT_FOV,
            rotation: 0.,
        }
    }
}

#[derive(Error, Copy, Clone, Debug, PartialEq)]
pub enum CamInvalidError {
    /// The field-of-view was not finite, or outside of `0..180` degrees
    #[error("the provided FOV ({0} degrees) was not valid")]
    FovInvalid(Number),
    /// The rotation angle was NaN or infinite
    #[error("the provided rotation was not finite")]
    RotationInvalid,
    /// The camera position had a NaN or infinite component
    #[error("the provided camera position was not finite")]
    PositionInvalid,
}

impl Camera {
    pub const DEFAULT_FOV: Number = 70.;

    /// Creates a camera from angles in degrees, the way they're written in scene files
    pub fn from_degrees(pos: impl Into<Point3>, fov: Number, rotation: Number) -> Self {
        Self {
            pos: pos.into(),
            fov,
            rotation: math::deg_to_rad(rotation),
        }
    }

    /// Checks that every setting of the camera can be used to project rays
    ///
    /// # Errors
    /// Returns the first setting found to be invalid: the FOV must be finite and within `(0, 180)` degrees
    /// ([`CamInvalidError::FovInvalid`]), and the rotation and position must be finite.
    pub fn validate(&self) -> Result<(), CamInvalidError> {
        if !Self::fov_is_valid(self.fov) {
            return Err(CamInvalidError::FovInvalid(self.fov));
        }
        if !self.rotation.is_finite() {
            return Err(CamInvalidError::RotationInvalid);
        }
        if !self.pos.is_finite() {
            return Err(CamInvalidError::PositionInvalid);
        }
        Ok(())
    }

    pub fn fov_is_valid(fov: Number) -> bool { fov > 0. && fov < 180. }

    /// Returns a copy of the camera with every invalid setting replaced by its default
    pub fn sanitised(self) -> Self {
        let default = Self::default();
        Self {
            pos: if self.pos.is_finite() { self.pos } else { default.pos },
            fov: if Self::fov_is_valid(self.fov) { self.fov } else { default.fov },
            rotation: if self.rotation.is_finite() { self.rotation } else { default.rotation },
        }
    }

    /// Calculates the viewport for an image of the given dimensions.
    ///
    /// This never fails: any invalid setting (see [Self::validate]) is replaced by its default first,
    /// so every pixel always gets a finite ray.
    pub fn calculate_viewport(&self, width: usize, height: usize) -> Viewport {
        let cam = self.sanitised();
        let (w, h) = (width as Number, height as Number);
        let scale = (math::deg_to_rad(cam.fov) / 2.).tan();
        let cam_to_world = math::camera_to_world(cam.pos, cam.rotation);

        validate::point3(cam.pos);
        validate::number(scale);

        Viewport {
            pos: cam.pos,
            cam_to_world,
            width: w,
            height: h,
            scale,
            aspect: w / h,
        }
    }
}

/// Everything needed to turn a pixel coordinate into a camera ray.
///
/// Calculated once per render from the [Camera] and the image dimensions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub pos: Point3,
    pub cam_to_world: Transform3,
    pub width: Number,
    pub height: Number,
    /// `tan(fov / 2)`: how far the edge of the image is from the centre, one unit in front of the camera
    pub scale: Number,
    pub aspect: Number,
}

impl Viewport {
    /// Calculates the view ray through the centre of the pixel at `(x, y)`
    /// (screen-space, top-left to bot-right)
    ///
    /// The ray direction is left unnormalised: it points from the camera to the pixel
    /// on the image plane one unit in front of it.
    ///
    /// The image plane is moved along with the camera, so for a camera away from the origin the rays keep
    /// the same directions as at the origin. Projecting the view-space point without that translation
    /// would instead skew every ray towards the world origin.
    pub fn calc_ray(&self, x: usize, y: usize) -> Ray {
        // Pixel centres, mapped to `-1..1` with `+Y` up
        let ndc_x = (2. * (x as Number + 0.5) / self.width) - 1.;
        let ndc_y = 1. - (2. * (y as Number + 0.5) / self.height);

        let view_x = ndc_x * self.scale * self.aspect;
        let view_y = ndc_y * self.scale;

        let world_point = self.cam_to_world.transform_point3(Point3::new(view_x, view_y, -1.));

        Ray::new(self.pos, world_point - self.pos)
    }
}
