use gronckle::core::prelude::*;
use gronckle::shader::{self, vertex};
use gronckle::util;
use std::time::{Duration, Instant};

const SIMULATED_FRAMES: u32 = 5;
const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

fn main() -> Result<()> {
    util::setup_log()?;

    let cube = vertex::cube();
    info!(
        "cube: {} vertices, {} bytes, stride {}",
        cube.len(),
        cube.len() * shader::ColouredVertex::STRIDE,
        shader::ColouredVertex::STRIDE
    );
    info!("clear colour: {CLEAR_COLOUR:.2}");

    let viewport = Viewport::try_from_physical(1280, 720)?;
    let mut driver = FrameDriver::new(ProjectionConfig::default())?;
    let start = Instant::now();
    for i in 0..SIMULATED_FRAMES {
        let now = start + FRAME_INTERVAL * i;
        let uniforms = driver.frame(viewport, now);
        let bytes = uniforms.mvp_bytes()?;
        info!(
            "frame {}: angle={:.2} deg, mvp={:.4}, uploading {} bytes",
            driver.frame_count(),
            gr_float::to_degrees(driver.cube().angle()),
            uniforms.mvp,
            bytes.len()
        );
    }
    println!("rendered {SIMULATED_FRAMES} frames; see {LOG_FILE}");
    Ok(())
}
