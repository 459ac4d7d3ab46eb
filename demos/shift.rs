//! A triangle moved around the screen by two float uniforms.
//!
//! The node's transform stays at identity; the offset lives entirely in the
//! vertex shader's `shiftx` / `shifty` uniforms, updated once per frame. The
//! offset walks a circle of radius 0.8 one degree at a time.
//!
//! ```text
//! RUST_LOG=info cargo run --example shift
//! ```

use std::cell::Cell;
use std::rc::Rc;

use glam::{Vec2, Vec4};
use orrery::render::{RecordingBackend, ShiftedShape};
use orrery::{MeshData, Scene, SceneNode};

const FRAMES: u32 = 720;
const RADIUS: f32 = 0.8;
const SIZE: f32 = 0.2;

/// Equilateral triangle of circumradius `size` centred on the origin.
fn triangle(size: f32) -> MeshData {
    let dx = size * 30.0_f32.to_radians().cos();
    let dy = size * 30.0_f32.to_radians().sin();
    MeshData::from_points_2d(&[[0.0, size], [dx, -dy], [-dx, -dy]])
}

fn shift_at(degrees: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(RADIUS * radians.cos(), RADIUS * radians.sin())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut backend = RecordingBackend::new();
    let shape = ShiftedShape::new(&mut backend, &triangle(SIZE), Vec4::new(1.0, 0.0, 0.0, 1.0))?;

    let shift = Rc::new(Cell::new(shift_at(0.0)));
    let mut scene = Scene::default();
    scene.background = Vec4::new(1.0, 1.0, 0.0, 1.0);
    {
        let shift = Rc::clone(&shift);
        scene.add_root(
            SceneNode::new(move |ctx, _| shape.draw(ctx, shift.get())).with_name("triangle"),
        );
    }

    let mut degrees = 0.0_f32;
    for frame in 0..FRAMES {
        scene.render(&mut backend)?;
        if frame % 90 == 0
            && let Some(draw) = backend.draws().last()
        {
            log::info!(
                "frame {frame}: shift ({:.3}, {:.3})",
                draw.float("shiftx").unwrap_or_default(),
                draw.float("shifty").unwrap_or_default()
            );
        }
        backend.reset_frame();

        degrees = (degrees + 1.0) % 360.0;
        shift.set(shift_at(degrees));
    }

    log::info!("Done after {FRAMES} frames");
    Ok(())
}
