//! Property tests for scene graph bookkeeping.
//!
//! 1. The live count equals the root plus its descendants.
//! 2. Every descendant is listed in its parent's children exactly once.
//! 3. Removed ids are never live again, even after their slots are reused.
//! 4. Adding children never moves the parent.

use chatter_core::geometry::Point;
use chatter_render::{NodeId, Scene};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Add { pick: usize, x: i16, y: i16 },
    Remove { pick: usize },
    Clear { pick: usize },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (any::<usize>(), any::<i16>(), any::<i16>()).prop_map(|(pick, x, y)| Op::Add { pick, x, y }),
        1 => any::<usize>().prop_map(|pick| Op::Remove { pick }),
        1 => any::<usize>().prop_map(|pick| Op::Clear { pick }),
    ]
}

fn live(scene: &Scene) -> Vec<NodeId> {
    let mut all = vec![scene.root()];
    all.extend(scene.descendants(scene.root()));
    all
}

fn run(ops: &[Op]) -> (Scene, Vec<NodeId>) {
    let mut scene = Scene::new();
    let mut dead = Vec::new();
    for op in ops {
        let nodes = live(&scene);
        match *op {
            Op::Add { pick, x, y } => {
                let parent = nodes[pick % nodes.len()];
                let at = Point::new(f32::from(x), f32::from(y));
                assert!(scene.add_group(parent, at).is_some());
            }
            Op::Remove { pick } => {
                let id = nodes[pick % nodes.len()];
                if id != scene.root() {
                    dead.push(id);
                    dead.extend(scene.descendants(id));
                }
                scene.remove(id);
            }
            Op::Clear { pick } => {
                let id = nodes[pick % nodes.len()];
                dead.extend(scene.descendants(id));
                scene.clear_children(id);
            }
        }
    }
    (scene, dead)
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn live_count_matches_tree(ops in prop::collection::vec(op(), 0..60)) {
        let (scene, _) = run(&ops);
        prop_assert_eq!(scene.len(), live(&scene).len());
        prop_assert!(scene.contains(scene.root()));
    }

    #[test]
    fn children_lists_are_consistent(ops in prop::collection::vec(op(), 0..60)) {
        let (scene, _) = run(&ops);
        for id in scene.descendants(scene.root()) {
            let parent = scene.parent(id);
            prop_assert!(parent.is_some());
            let listed = scene
                .children(parent.unwrap_or(scene.root()))
                .iter()
                .filter(|c| **c == id)
                .count();
            prop_assert_eq!(listed, 1);
        }
    }

    #[test]
    fn removed_ids_stay_dead(ops in prop::collection::vec(op(), 0..60)) {
        let (scene, dead) = run(&ops);
        for id in dead {
            prop_assert!(!scene.contains(id));
            prop_assert!(scene.position(id).is_none());
        }
    }

    #[test]
    fn adding_children_keeps_parent_position(
        x in any::<i16>(),
        y in any::<i16>(),
        ops in prop::collection::vec(op(), 0..40),
    ) {
        let mut scene = Scene::new();
        let root = scene.root();
        let at = Point::new(f32::from(x), f32::from(y));
        let pinned = scene.add_group(root, at);
        prop_assert!(pinned.is_some());
        let pinned = pinned.unwrap_or(root);
        for op in &ops {
            if let Op::Add { x, y, .. } = *op {
                let child = Point::new(f32::from(x), f32::from(y));
                prop_assert!(scene.add_group(pinned, child).is_some());
            }
        }
        prop_assert_eq!(scene.position(pinned), Some(at));
        let adds = ops.iter().filter(|o| matches!(o, Op::Add { .. })).count();
        prop_assert_eq!(scene.children(pinned).len(), adds);
    }
}
