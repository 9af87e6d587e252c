// Host-side tests for shared state, the render loop, frame throttling and
// listener subscriptions.

use pitchutcha_core::constants::{IDLE_RADIANS_PER_FRAME, MAX_MANUAL_PITCH};
use pitchutcha_core::*;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn orientation_writer_is_seen_by_every_reader() {
    let (mut writer, reader) = orientation_channel(Orientation::default());
    let second = writer.reader();
    let next = Orientation::new(1.0, 0.2, 3.0);
    writer.set(next);
    assert_eq!(reader.get(), next);
    assert_eq!(second.get(), next);
    assert_eq!(writer.get(), next);
}

#[test]
fn drag_rotation_only_accumulates_while_dragging() {
    let (mut drag, flag) = drag_channel();
    drag.rotate_by(0.5, 0.5);
    assert_eq!(flag.input(), DragInput::default());

    drag.begin();
    assert!(flag.is_dragging());
    drag.rotate_by(0.25, 0.1);
    drag.rotate_by(0.25, f32::NAN);
    let input = flag.input();
    assert_eq!(input.manual_yaw, 0.25);
    assert_eq!(input.manual_pitch, 0.1);

    drag.rotate_by(0.0, 10.0);
    assert_eq!(flag.input().manual_pitch, MAX_MANUAL_PITCH);
    drag.end();
    assert!(!drag.is_dragging());
    // the manual offset survives the end of the drag
    assert_eq!(flag.input().manual_yaw, 0.25);
}

#[test]
fn idle_spin_pauses_while_dragging() {
    let (_writer, reader) = orientation_channel(Orientation::default());
    let (mut drag, flag) = drag_channel();
    let mut render_loop = RenderLoop::new(reader, flag, IdleSpin::default());

    let a = render_loop.frame().idle_angle;
    assert!((a - IDLE_RADIANS_PER_FRAME).abs() < 1e-6);
    drag.begin();
    let b = render_loop.frame().idle_angle;
    let c = render_loop.frame().idle_angle;
    assert_eq!(a, b);
    assert_eq!(b, c);
    drag.end();
    assert!(render_loop.frame().idle_angle > c);
}

#[test]
fn idle_angle_wraps_at_full_turn() {
    let (_writer, reader) = orientation_channel(Orientation::default());
    let (_drag, flag) = drag_channel();
    let mut render_loop = RenderLoop::new(
        reader,
        flag,
        IdleSpin {
            radians_per_frame: 2.0,
        },
    );
    for _ in 0..10 {
        let angle = render_loop.frame().idle_angle;
        assert!((0.0..std::f32::consts::TAU).contains(&angle));
    }
}

#[test]
fn pose_combines_narrative_idle_and_manual_rotation() {
    let (mut writer, reader) = orientation_channel(Orientation::default());
    let (mut drag, flag) = drag_channel();
    writer.set(Orientation::new(1.0, 0.3, 4.0));
    drag.begin();
    drag.rotate_by(0.5, -0.1);
    let mut render_loop = RenderLoop::new(reader, flag, IdleSpin::default());
    let pose = render_loop.frame();
    assert!((pose.yaw() - 1.5).abs() < 1e-6);
    assert!((pose.pitch() - 0.2).abs() < 1e-6);

    let camera = Camera::for_pose(&pose, 16.0 / 9.0);
    assert_eq!(camera.eye.z, 4.0);
    assert!(camera.projection_matrix().is_finite());
    assert!(camera.view_matrix().is_finite());
}

#[test]
fn resting_pose_has_identity_model_matrix() {
    let pose = Pose {
        orientation: Orientation::default(),
        idle_angle: 0.0,
        manual_yaw: 0.0,
        manual_pitch: 0.0,
    };
    assert!(pose.model_matrix().abs_diff_eq(glam::Mat4::IDENTITY, 1e-6));
    assert_eq!(Camera::for_pose(&pose, 0.0).aspect, 1.0);
    assert_eq!(Camera::for_pose(&pose, f32::NAN).aspect, 1.0);
}

#[test]
fn throttle_coalesces_to_latest_value() {
    let throttle: FrameThrottle<f32> = FrameThrottle::new();
    let handle = throttle.clone();
    assert!(!throttle.is_pending());
    handle.push(1.0);
    handle.push(2.0);
    handle.push(3.0);
    assert!(throttle.is_pending());
    assert_eq!(throttle.take(), Some(3.0));
    assert_eq!(throttle.take(), None);
}

#[test]
fn disposing_a_subscription_removes_the_listener() {
    let hub: EventHub<u32> = EventHub::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = seen.clone();
    let sub = hub.subscribe(move |v| log.borrow_mut().push(*v));
    hub.publish(&1);
    sub.dispose();
    hub.publish(&2);
    assert_eq!(*seen.borrow(), vec![1]);
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn dropping_a_subscription_keeps_the_listener() {
    let hub: EventHub<u32> = EventHub::new();
    let count = Rc::new(RefCell::new(0));
    let c = count.clone();
    drop(hub.subscribe(move |_| *c.borrow_mut() += 1));
    hub.publish(&7);
    assert_eq!(*count.borrow(), 1);
    assert_eq!(hub.listener_count(), 1);
}

#[test]
fn subscriptions_dispose_together_in_reverse_order() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut subs = Subscriptions::new();
    for i in 0..3 {
        let o = order.clone();
        subs.push(Subscription::new(move || o.borrow_mut().push(i)));
    }
    subs.push(Subscription::noop());
    assert_eq!(subs.len(), 3);
    subs.dispose_all();
    assert!(subs.is_empty());
    assert_eq!(*order.borrow(), vec![2, 1, 0]);
}

#[test]
fn listener_can_unsubscribe_during_publish() {
    let hub: EventHub<u32> = EventHub::new();
    let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
    let s = slot.clone();
    let calls = Rc::new(RefCell::new(0));
    let c = calls.clone();
    let sub = hub.subscribe(move |_| {
        *c.borrow_mut() += 1;
        if let Some(sub) = s.borrow_mut().take() {
            sub.dispose();
        }
    });
    *slot.borrow_mut() = Some(sub);
    hub.publish(&1);
    hub.publish(&2);
    assert_eq!(*calls.borrow(), 1);
}
