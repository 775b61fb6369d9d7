#[allow(unused_imports)]
pub use itertools::Itertools;
#[allow(unused_imports)]
pub use num_traits;

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, Context, Result};
#[allow(unused_imports)]
pub use tracing::{error, info, trace, warn};

#[allow(unused_imports)]
pub use crate::{
    core::{
        config::*,
        frame::{FrameClock, FrameDriver, FrameUniforms, SpinningCube, Viewport},
    },
    shader::ColouredVertex,
    util::{
        gr_float,
        linalg,
        linalg::{Mat2, Mat3, Mat4, Quat, Vec2, Vec3, Vec4},
    },
};
