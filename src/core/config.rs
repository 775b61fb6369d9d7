use crate::core::prelude::*;
use std::f32::consts::FRAC_PI_2;

pub const EPSILON: f32 = 1e-6;
pub const LOG_FILE: &str = "run.log";

pub const DEFAULT_FOV_Y: f32 = FRAC_PI_2;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 1000.0;

pub const CUBE_POSITION: Vec3 = Vec3 { x: 0.0, y: 0.0, z: -2.0 };
pub const SPIN_AXIS: Vec3 = Vec3 { x: 1.0, y: 1.0, z: 1.0 };
pub const SPIN_RADIANS_PER_MS: f32 = 1e-3;
pub const CLEAR_COLOUR: Vec4 = Vec4 { x: 0.2, y: 0.3, z: 0.3, w: 1.0 };

/// Size in bytes of one `mat4x4<f32>` uniform.
pub const UNIFORM_BUFFER_SIZE: usize = 64;

/// Parameters of the perspective projection used by the frame driver.
#[derive(Copy, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProjectionConfig {
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl ProjectionConfig {
    #[must_use]
    pub fn with_fov_y(mut self, fov_y: f32) -> Self {
        self.fov_y = fov_y;
        self
    }
    #[must_use]
    pub fn with_near(mut self, near: f32) -> Self {
        self.near = near;
        self
    }
    #[must_use]
    pub fn with_far(mut self, far: f32) -> Self {
        self.far = far;
        self
    }

    /// Rejects parameters that would produce a degenerate projection matrix.
    pub fn validate(&self) -> Result<()> {
        if !self.fov_y.is_finite() || self.fov_y <= 0.0 || self.fov_y >= std::f32::consts::PI {
            bail!("invalid vertical field of view: {} radians", self.fov_y);
        }
        if !self.near.is_finite() || self.near <= 0.0 {
            bail!("near plane must be positive and finite, got {}", self.near);
        }
        if !self.far.is_finite() || self.far <= self.near {
            bail!(
                "far plane must be finite and beyond the near plane: near={}, far={}",
                self.near,
                self.far
            );
        }
        Ok(())
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fov_y: DEFAULT_FOV_Y,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }
}
