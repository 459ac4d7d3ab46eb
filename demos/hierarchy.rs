//! Articulated arm of five lit cubes.
//!
//! Each segment hangs off the top of the previous one and swings back and
//! forth about its own joint, so the tip traces the sum of all joint angles.
//! Rendering goes through the headless recording backend; the demo logs the
//! tip position as it animates.
//!
//! ```text
//! RUST_LOG=info cargo run --example hierarchy [settings.json]
//! ```

use std::rc::Rc;

use glam::Mat4;
use orrery::render::RecordingBackend;
use orrery::{DemoSettings, LitMesh, MeshData, Scene, SceneNode};

const SEGMENTS: usize = 5;

fn segment(cube: &Rc<LitMesh>, index: usize) -> SceneNode {
    let cube = Rc::clone(cube);
    let mut node =
        SceneNode::new(move |ctx, world| cube.draw(ctx, world)).with_name(format!("segment-{index}"));
    if index > 0 {
        node.move_up(1.0);
    }
    node
}

/// Builds the arm as a chain: base -> segment 1 -> ... -> tip.
fn build_arm(cube: &Rc<LitMesh>) -> Option<SceneNode> {
    (0..SEGMENTS).rev().fold(None, |child, index| {
        let mut node = segment(cube, index);
        if let Some(child) = child {
            node.add_child(child);
        }
        Some(node)
    })
}

/// Applies `degrees` to every joint along the chain.
fn swing(node: &mut SceneNode, degrees: f32) {
    node.rotate_z(degrees);
    if let Some(child) = node.child_mut(0) {
        swing(child, degrees);
    }
}

/// World transform of the last segment, recomputed from local transforms.
fn tip_world(node: &SceneNode) -> Mat4 {
    let mut world = *node.local_transform();
    let mut current = node;
    while let Some(child) = current.children().first() {
        world *= *child.local_transform();
        current = child;
    }
    world
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = DemoSettings::load_or_default(std::env::args().nth(1))?;
    let mut backend = RecordingBackend::new();

    let cube = LitMesh::new(&mut backend, &MeshData::cube(), settings.mesh_color())?
        .with_light_position(settings.light_position());
    let cube = Rc::new(cube);

    let mut scene = Scene::new(settings.camera.build());
    scene.background = settings.clear_color();
    let arm = build_arm(&cube).ok_or_else(|| anyhow::anyhow!("arm has no segments"))?;
    let arm = scene.add_root(arm);
    log::info!("Scene has {} nodes", scene.node_count());

    let mut rotation = 0.0_f32;
    let mut increment = settings.increment_degrees;
    let mut total_draws = 0;

    for frame in 0..settings.frames {
        scene.render(&mut backend)?;
        total_draws += backend.draws().len();
        backend.reset_frame();

        if let Some(root) = scene.root_mut(arm) {
            swing(root, increment);
            if frame % 60 == 0 {
                let tip = tip_world(root).w_axis;
                log::info!("frame {frame}: tip at ({:.3}, {:.3}, {:.3})", tip.x, tip.y, tip.z);
            }
        }

        rotation += increment;
        if rotation.abs() > settings.swing_limit_degrees {
            increment = -increment;
        }
    }

    log::info!("Rendered {} frames, {total_draws} draw calls", settings.frames);
    Ok(())
}
