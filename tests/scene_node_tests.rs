//! Scene node tests
//!
//! Tests for:
//! - World transform composition (`parent * local`)
//! - Pre-order traversal and sibling ordering
//! - Local-frame mutation round trips (move up/down, rotate periodicity)
//! - Callback error propagation
//! - Scene-level rendering of multiple roots

use std::cell::RefCell;
use std::rc::Rc;

use glam::{Mat4, Vec3, Vec4};
use orrery::errors::OrreryError;
use orrery::math;
use orrery::render::{RecordingBackend, RenderContext};
use orrery::scene::{Camera, Scene, SceneNode};

// ============================================================================
// Helpers
// ============================================================================

const EPSILON: f32 = 1e-5;

type Log = Rc<RefCell<Vec<(String, Mat4)>>>;

fn mat_approx(a: &Mat4, b: &Mat4) -> bool {
    math::approx_eq(a, b, EPSILON)
}

/// Node whose callback appends `(name, world)` to `log`.
fn recorded(name: &str, log: &Log) -> SceneNode {
    let log = Rc::clone(log);
    let tag = name.to_string();
    SceneNode::new(move |_, world| {
        log.borrow_mut().push((tag.clone(), *world));
        Ok(())
    })
    .with_name(name)
}

fn render(node: &mut SceneNode, parent: &Mat4) -> orrery::Result<()> {
    let mut backend = RecordingBackend::new();
    let camera = Camera::default();
    let mut ctx = RenderContext::new(&mut backend, &camera);
    node.render(&mut ctx, parent)
}

fn names(log: &Log) -> Vec<String> {
    log.borrow().iter().map(|(n, _)| n.clone()).collect()
}

// ============================================================================
// Composition
// ============================================================================

#[test]
fn identity_node_under_identity_parent_sees_identity() {
    let log = Log::default();
    let mut node = recorded("a", &log);

    render(&mut node, &Mat4::IDENTITY).unwrap();

    let calls = log.borrow();
    assert_eq!(calls.len(), 1);
    assert!(mat_approx(&calls[0].1, &Mat4::IDENTITY));
}

#[test]
fn world_is_parent_times_local() {
    let log = Log::default();
    let mut node = recorded("a", &log);
    node.translate(1.0, -2.0, 0.5);
    node.rotate_z(35.0);
    node.scale(2.0, 1.0, 0.5);

    let parent = Mat4::from_rotation_y(0.7) * Mat4::from_translation(Vec3::new(4.0, 0.0, -1.0));
    render(&mut node, &parent).unwrap();

    let expected = parent * *node.local_transform();
    assert!(mat_approx(&log.borrow()[0].1, &expected));
    // Order matters: local * parent is a different matrix here.
    assert!(!mat_approx(&log.borrow()[0].1, &(*node.local_transform() * parent)));
}

#[test]
fn child_accumulates_parent_translation() {
    let log = Log::default();
    let mut root = recorded("root", &log);
    root.translate(0.0, 1.0, 0.0);
    let mut child = recorded("child", &log);
    child.translate(0.0, 2.0, 0.0);
    root.add_child(child);

    render(&mut root, &Mat4::IDENTITY).unwrap();

    let calls = log.borrow();
    assert!(mat_approx(&calls[0].1, &Mat4::from_translation(Vec3::new(0.0, 1.0, 0.0))));
    assert!(mat_approx(&calls[1].1, &Mat4::from_translation(Vec3::new(0.0, 3.0, 0.0))));
}

#[test]
fn parent_rotation_carries_child_offset() {
    let log = Log::default();
    let mut root = recorded("root", &log);
    root.rotate_z(90.0);
    let mut child = recorded("child", &log);
    child.move_up(1.0);
    root.add_child(child);

    render(&mut root, &Mat4::IDENTITY).unwrap();

    // +Y in the parent's frame is -X in the world after a 90 degree turn.
    let origin = log.borrow()[1].1.transform_point3(Vec3::ZERO);
    assert!(origin.abs_diff_eq(Vec3::new(-1.0, 0.0, 0.0), EPSILON));
}

#[test]
fn mutations_show_up_on_next_render() {
    let log = Log::default();
    let mut root = recorded("root", &log);
    root.add_child(recorded("child", &log));

    render(&mut root, &Mat4::IDENTITY).unwrap();
    root.move_up(5.0);
    render(&mut root, &Mat4::IDENTITY).unwrap();

    let calls = log.borrow();
    assert_eq!(calls.len(), 4);
    assert!(mat_approx(&calls[1].1, &Mat4::IDENTITY));
    assert!(mat_approx(&calls[3].1, &Mat4::from_translation(Vec3::new(0.0, 5.0, 0.0))));
}

// ============================================================================
// Traversal Order
// ============================================================================

#[test]
fn traversal_is_pre_order_depth_first() {
    let log = Log::default();
    let mut root = recorded("root", &log);
    let mut a = recorded("a", &log);
    a.add_child(recorded("a1", &log));
    a.add_child(recorded("a2", &log));
    let mut b = recorded("b", &log);
    b.add_child(recorded("b1", &log));
    root.add_child(a);
    root.add_child(b);
    root.add_child(recorded("c", &log));

    render(&mut root, &Mat4::IDENTITY).unwrap();

    assert_eq!(names(&log), ["root", "a", "a1", "a2", "b", "b1", "c"]);
}

#[test]
fn siblings_render_in_insertion_order_regardless_of_subtree_size() {
    let log = Log::default();
    let mut root = recorded("self", &log);
    let mut child_a = recorded("childA", &log);
    for i in 0..4 {
        child_a.add_child(recorded(&format!("deep{i}"), &log));
    }
    root.add_child(child_a);
    root.add_child(recorded("childB", &log));

    render(&mut root, &Mat4::IDENTITY).unwrap();

    let order: Vec<String> = names(&log)
        .into_iter()
        .filter(|n| !n.starts_with("deep"))
        .collect();
    assert_eq!(order, ["self", "childA", "childB"]);
}

// ============================================================================
// Mutation Round Trips
// ============================================================================

#[test]
fn move_up_then_down_restores_transform() {
    let mut node = SceneNode::group();
    node.rotate_z(20.0);
    node.translate(3.0, 0.0, 1.0);
    let before = *node.local_transform();

    node.move_up(1.0);
    assert!(!mat_approx(node.local_transform(), &before));
    node.move_down(1.0);

    assert!(mat_approx(node.local_transform(), &before));
}

#[test]
fn four_quarter_turns_restore_transform() {
    let mut node = SceneNode::group();
    node.translate(1.0, 2.0, 3.0);
    let before = *node.local_transform();

    for _ in 0..4 {
        node.rotate_z(90.0);
    }

    assert!(mat_approx(node.local_transform(), &before));
}

#[test]
fn mutations_apply_in_local_frame() {
    // Rotate first, then translate: the translation follows the rotated axes.
    let mut node = SceneNode::group();
    node.rotate_z(90.0);
    node.translate(1.0, 0.0, 0.0);

    let origin = node.local_transform().transform_point3(Vec3::ZERO);
    assert!(origin.abs_diff_eq(Vec3::new(0.0, 1.0, 0.0), EPSILON));
}

#[test]
fn reset_transform_returns_to_identity() {
    let mut node = SceneNode::group();
    node.rotate_x(12.0);
    node.rotate_y(-40.0);
    node.reset_transform();
    assert!(mat_approx(node.local_transform(), &Mat4::IDENTITY));
}

#[test]
fn set_local_transform_replaces_accumulated_mutations() {
    let log = Log::default();
    let mut node = recorded("a", &log);
    node.rotate_z(45.0);
    node.scale(2.0, 2.0, 2.0);

    let replacement = Mat4::from_translation(Vec3::new(0.0, 0.0, -3.0));
    node.set_local_transform(replacement);
    assert_eq!(*node.local_transform(), replacement);

    // Later mutations keep right-multiplying onto the replacement.
    node.move_up(1.0);
    render(&mut node, &Mat4::IDENTITY).unwrap();
    let origin = log.borrow()[0].1.transform_point3(Vec3::ZERO);
    assert!(origin.abs_diff_eq(Vec3::new(0.0, 1.0, -3.0), EPSILON));
}

// ============================================================================
// Error Propagation
// ============================================================================

#[test]
fn failing_callback_stops_traversal_and_names_node() {
    let log = Log::default();
    let mut root = recorded("root", &log);
    root.add_child(
        SceneNode::new(|_, _| Err(OrreryError::InvalidBuffer(7))).with_name("broken"),
    );
    root.add_child(recorded("after", &log));

    let err = render(&mut root, &Mat4::IDENTITY).unwrap_err();

    match err {
        OrreryError::Render { node, source } => {
            assert_eq!(node, "broken");
            assert!(matches!(*source, OrreryError::InvalidBuffer(7)));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(names(&log), ["root"]);
}

#[test]
fn nested_failure_is_wrapped_once() {
    let mut root = SceneNode::group().with_name("root");
    let mut mid = SceneNode::group().with_name("mid");
    mid.add_child(SceneNode::new(|_, _| Err(OrreryError::InvalidBuffer(1))).with_name("leaf"));
    root.add_child(mid);

    let err = render(&mut root, &Mat4::IDENTITY).unwrap_err();
    let OrreryError::Render { node, source } = err else {
        panic!("expected a render error");
    };
    assert_eq!(node, "leaf");
    assert!(!matches!(*source, OrreryError::Render { .. }));
}

// ============================================================================
// Scene
// ============================================================================

#[test]
fn scene_renders_each_root_from_identity() {
    let log = Log::default();
    let mut scene = Scene::default();
    let mut first = recorded("first", &log);
    first.translate(5.0, 0.0, 0.0);
    scene.add_root(first);
    scene.add_root(recorded("second", &log));

    let mut backend = RecordingBackend::new();
    scene.render(&mut backend).unwrap();

    let calls = log.borrow();
    assert_eq!(calls.len(), 2);
    // Roots do not inherit from one another.
    assert!(mat_approx(&calls[1].1, &Mat4::IDENTITY));
    assert_eq!(backend.clears(), &[Vec4::new(0.0, 0.0, 0.0, 1.0)]);
}

#[test]
fn scene_root_access_and_counts() {
    let mut scene = Scene::default();
    let mut root = SceneNode::group();
    root.add_child(SceneNode::group());
    let index = scene.add_root(root);
    scene.add_root(SceneNode::group());

    assert_eq!(scene.node_count(), 3);
    assert_eq!(scene.roots().len(), 2);
    scene.root_mut(index).unwrap().move_up(2.0);
    assert!(scene.root_mut(5).is_none());
    let y = scene.roots()[index].transform().position().y;
    assert!((y - 2.0).abs() < EPSILON);
}

#[test]
fn scene_roots_mut_animates_every_root() {
    let log = Log::default();
    let mut scene = Scene::default();
    scene.add_root(recorded("first", &log));
    let mut second = recorded("second", &log);
    second.translate(2.0, 0.0, 0.0);
    scene.add_root(second);

    for root in scene.roots_mut() {
        root.move_up(4.0);
    }
    let mut backend = RecordingBackend::new();
    scene.render(&mut backend).unwrap();

    let calls = log.borrow();
    assert!(mat_approx(&calls[0].1, &Mat4::from_translation(Vec3::new(0.0, 4.0, 0.0))));
    assert!(mat_approx(&calls[1].1, &Mat4::from_translation(Vec3::new(2.0, 4.0, 0.0))));
}
