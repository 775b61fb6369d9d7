use crate::core::prelude::*;

use crate::info_every_seconds;
use crate::util::gr_float;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Size of the render target, in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    /// A zero height gives an infinite aspect ratio; prefer
    /// [`try_from_physical`](Viewport::try_from_physical) for window sizes.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Converts a window's physical size, which is zero while it is minimised.
    #[allow(clippy::cast_precision_loss)]
    pub fn try_from_physical(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            bail!("Viewport::try_from_physical(): degenerate size {width}x{height}");
        }
        Ok(Self::new(width as f32, height as f32))
    }

    pub fn width(&self) -> f32 {
        self.width
    }
    pub fn height(&self) -> f32 {
        self.height
    }
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }
}

/// Measures the time between consecutive frames.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time since the previous tick. The first tick, and any tick earlier than the
    /// previous one, yields zero.
    pub fn tick_at(&mut self, now: Instant) -> Duration {
        let delta = self
            .last_tick
            .map_or(Duration::ZERO, |then| now.saturating_duration_since(then));
        self.last_tick = Some(now);
        delta
    }
    pub fn tick(&mut self) -> Duration {
        self.tick_at(Instant::now())
    }
}

/// The demo's single object: a cube in front of the camera, spinning about
/// [`SPIN_AXIS`] at [`SPIN_RADIANS_PER_MS`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SpinningCube {
    angle: f32,
}

impl SpinningCube {
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn advance(&mut self, delta: Duration) {
        self.angle += gr_float::millis(delta) * SPIN_RADIANS_PER_MS;
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::identity()
            .translate(CUBE_POSITION)
            .rotate(self.angle, SPIN_AXIS)
    }
}

/// Matrices uploaded for one frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameUniforms {
    pub mvp: Mat4,
    pub normal: Mat4,
}

impl FrameUniforms {
    /// The MVP matrix as a 64-byte uniform buffer image.
    pub fn mvp_bytes(&self) -> Result<Vec<u8>> {
        self.mvp.to_uniform_bytes()
    }
}

/// Per-frame state of the spinning-cube demo: the camera projection, the clock and the
/// cube. The camera sits at the origin looking down `-z`, so the view matrix is the
/// identity.
#[derive(Clone, Debug)]
pub struct FrameDriver {
    projection: ProjectionConfig,
    clock: FrameClock,
    cube: SpinningCube,
    frame_count: u64,
}

impl FrameDriver {
    pub fn new(projection: ProjectionConfig) -> Result<Self> {
        projection
            .validate()
            .context("FrameDriver::new(): invalid projection")?;
        Ok(Self {
            projection,
            clock: FrameClock::new(),
            cube: SpinningCube::default(),
            frame_count: 0,
        })
    }

    pub fn cube(&self) -> &SpinningCube {
        &self.cube
    }
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn projection_matrix(&self, viewport: Viewport) -> Mat4 {
        linalg::perspective(
            self.projection.fov_y,
            viewport.aspect_ratio(),
            self.projection.near,
            self.projection.far,
        )
    }

    /// Advances the cube by the time since the previous frame and returns the matrices
    /// to upload for a frame presented at `now`.
    pub fn frame(&mut self, viewport: Viewport, now: Instant) -> FrameUniforms {
        let delta = self.clock.tick_at(now);
        self.cube.advance(delta);
        self.frame_count += 1;

        let model = self.cube.model_matrix();
        let uniforms = FrameUniforms {
            mvp: self.projection_matrix(viewport) * model,
            normal: linalg::normal_matrix(model),
        };
        info_every_seconds!(
            2,
            "frame {}: delta={:.1} ms, angle={:.3} rad",
            self.frame_count,
            gr_float::millis(delta),
            self.cube.angle()
        );
        uniforms
    }
}
