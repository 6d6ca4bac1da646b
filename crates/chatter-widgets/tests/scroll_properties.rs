//! Property tests for the touch-scroll viewport.
//!
//! 1. After any move, the content offset lies in `[min_y, max_y]` when the
//!    content overflows the viewport.
//! 2. With default config, content that fits never moves from `max_y`.
//! 3. With overscroll allowed, content that fits stays within `[max_y, min_y]`.
//! 4. Any gesture sequence ends idle after End or Cancel.
//! 5. Attach/detach cycles never leave listeners behind.

use chatter_core::event::{TouchEvent, TouchPhase, TouchPoint};
use chatter_core::geometry::Point;
use chatter_core::surface::{HeadlessSurface, InputSurface, TouchAction};
use chatter_render::Scene;
use chatter_widgets::{ScrollBounds, ScrollConfig, ScrollViewport};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Step {
    Press(f32),
    Drag(f32),
    TwoFinger(f32),
    Release,
    Cancel,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (-2000.0f32..2000.0).prop_map(Step::Press),
        (-4000.0f32..4000.0).prop_map(Step::Drag),
        (-2000.0f32..2000.0).prop_map(Step::TwoFinger),
        Just(Step::Release),
        Just(Step::Cancel),
    ]
}

fn event(step: &Step) -> TouchEvent {
    match *step {
        Step::Press(y) => TouchEvent::start(y),
        Step::Drag(y) => TouchEvent::moved(y),
        Step::TwoFinger(y) => TouchEvent::new(
            TouchPhase::Move,
            [TouchPoint::new(0, 0.0, y), TouchPoint::new(1, 5.0, y)],
        ),
        Step::Release => TouchEvent::end(),
        Step::Cancel => TouchEvent::cancel(),
    }
}

/// Replays `steps` and returns the content offset after each one.
fn replay(
    viewport_h: f32,
    content_h: f32,
    config: ScrollConfig,
    steps: &[Step],
) -> (Vec<f32>, ScrollViewport, HeadlessSurface) {
    let mut scene = Scene::new();
    let content = scene.root();
    scene.set_position(content, Point::new(0.0, 20.0));
    let mut surface = HeadlessSurface::new();
    let mut vp = ScrollViewport::new(content, viewport_h, 20.0, content_h).with_config(config);
    vp.attach(&mut surface);
    let ys = steps
        .iter()
        .map(|s| {
            vp.handle_touch(&event(s), &mut scene);
            scene.position(content).map(|p| p.y).unwrap_or(f32::NAN)
        })
        .collect();
    (ys, vp, surface)
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn overflowing_content_stays_in_range(
        viewport_h in 100.0f32..1000.0,
        extra in 1.0f32..5000.0,
        steps in prop::collection::vec(step(), 0..40),
    ) {
        let content_h = viewport_h + extra;
        let b = ScrollBounds::new(viewport_h, 20.0, content_h);
        let (ys, mut vp, mut surface) = replay(viewport_h, content_h, ScrollConfig::default(), &steps);
        for y in ys {
            prop_assert!(y >= b.min_y && y <= b.max_y, "{y} outside [{}, {}]", b.min_y, b.max_y);
        }
        vp.detach(&mut surface);
    }

    #[test]
    fn fitting_content_is_frozen_by_default(
        viewport_h in 100.0f32..1000.0,
        shortfall in 1.0f32..99.0,
        steps in prop::collection::vec(step(), 0..40),
    ) {
        let (ys, mut vp, mut surface) =
            replay(viewport_h, viewport_h - shortfall, ScrollConfig::default(), &steps);
        prop_assert!(ys.iter().all(|&y| y == 20.0));
        vp.detach(&mut surface);
    }

    #[test]
    fn fitting_content_with_overscroll_stays_between_rests(
        viewport_h in 100.0f32..1000.0,
        shortfall in 1.0f32..99.0,
        steps in prop::collection::vec(step(), 0..40),
    ) {
        let content_h = viewport_h - shortfall;
        let b = ScrollBounds::new(viewport_h, 20.0, content_h);
        let config = ScrollConfig::default().allow_overscroll_when_content_fits(true);
        let (ys, mut vp, mut surface) = replay(viewport_h, content_h, config, &steps);
        for y in ys {
            prop_assert!(y >= b.max_y && y <= b.min_y);
        }
        vp.detach(&mut surface);
    }

    #[test]
    fn release_or_cancel_always_idles(
        steps in prop::collection::vec(step(), 0..40),
        cancel in any::<bool>(),
    ) {
        let mut steps = steps;
        steps.push(if cancel { Step::Cancel } else { Step::Release });
        let (_, mut vp, mut surface) = replay(600.0, 3000.0, ScrollConfig::default(), &steps);
        prop_assert!(!vp.is_dragging());
        vp.detach(&mut surface);
    }

    #[test]
    fn attach_detach_cycles_balance(ops in prop::collection::vec(any::<bool>(), 0..20)) {
        let scene = Scene::new();
        let mut surface = HeadlessSurface::new();
        let mut vp = ScrollViewport::new(scene.root(), 600.0, 20.0, 3000.0);
        for attach in ops {
            if attach {
                vp.attach(&mut surface);
            } else {
                vp.detach(&mut surface);
            }
            let expected = if vp.is_attached() { 4 } else { 0 };
            prop_assert_eq!(surface.listener_count(), expected);
        }
        vp.detach(&mut surface);
        prop_assert_eq!(surface.listener_count(), 0);
        prop_assert_eq!(surface.touch_action(), TouchAction::Auto);
    }
}
