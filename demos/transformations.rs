//! Two mirrored triangles orbiting the origin, driven purely by accumulated
//! matrix products on their nodes.
//!
//! Each frame undoes the previous frame's scale, spin and orbit offset and
//! then applies the next ones, so the local transforms stay bounded even
//! though they are only ever right-multiplied.
//!
//! ```text
//! RUST_LOG=info cargo run --example transformations
//! ```

use glam::Vec4;
use orrery::render::{FlatShape, RecordingBackend};
use orrery::{MeshData, Scene, SceneNode};

const FRAMES: u32 = 360;

/// Right triangle in the first quadrant.
const TRIANGLE: [[f32; 2]; 3] = [[0.0, 0.0], [0.3, 0.0], [0.3, 0.2]];

fn orbit_offset(degrees: f32) -> (f32, f32) {
    let radians = degrees.to_radians();
    (0.75 * radians.cos(), 0.75 * radians.sin())
}

/// One frame of motion for a triangle; `sign` mirrors it through the origin.
fn step(node: &mut SceneNode, degrees: f32, next: f32, sign: f32) {
    node.scale(2.0, 1.0 / 3.0, 1.0);
    node.rotate_z(degrees * 2.0);
    let (bx, by) = orbit_offset(degrees);
    node.translate(-sign * bx, -sign * by, 0.0);

    let (fx, fy) = orbit_offset(next);
    node.translate(sign * fx, sign * fy, 0.0);
    node.rotate_z(-next * 2.0);
    node.scale(0.5, 3.0, 1.0);
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut backend = RecordingBackend::new();
    let triangle = FlatShape::new(
        &mut backend,
        &MeshData::from_points_2d(&TRIANGLE),
        Vec4::new(1.0, 0.0, 0.0, 1.0),
    )?;

    let mut scene = Scene::default();
    scene.background = Vec4::new(0.0, 0.8, 0.8, 1.0);

    let mut nodes = Vec::new();
    for (name, spin, offset) in [("right", 0.0, 1.5), ("left", 180.0, -1.5)] {
        let shape = triangle.clone();
        let mut node = SceneNode::new(move |ctx, world| shape.draw(ctx, world)).with_name(name);
        node.scale(0.5, 3.0, 1.0);
        node.rotate_z(spin);
        node.translate(offset, 0.0, 0.0);
        nodes.push(scene.add_root(node));
    }

    let mut degrees = 0.0_f32;
    for frame in 0..FRAMES {
        scene.render(&mut backend)?;
        backend.reset_frame();

        let next = if degrees >= 360.0 { 2.0 } else { degrees + 2.0 };
        for (&index, sign) in nodes.iter().zip([1.0, -1.0]) {
            if let Some(node) = scene.root_mut(index) {
                step(node, degrees, next, sign);
            }
        }
        degrees = next;

        if frame % 90 == 0 {
            for &index in &nodes {
                if let Some(node) = scene.root_mut(index) {
                    let p = node.transform().position();
                    log::info!("frame {frame}: '{}' origin at ({:.3}, {:.3})", node.name(), p.x, p.y);
                }
            }
        }
    }

    log::info!("Done after {FRAMES} frames");
    Ok(())
}
