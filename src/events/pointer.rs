use crate::dom;
use pitchutcha_core::constants::DRAG_RADIANS_PER_PX;
use pitchutcha_core::{DragHandle, Subscriptions};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Canvas drag-to-orbit. Only the pointer that started the drag moves the globe.
struct PointerOrbit {
    drag: DragHandle,
    pointer_id: Option<i32>,
    last: (f32, f32),
}

impl PointerOrbit {
    fn down(&mut self, id: i32, x: f32, y: f32) {
        self.pointer_id = Some(id);
        self.last = (x, y);
        self.drag.begin();
    }

    fn moved(&mut self, id: i32, x: f32, y: f32) {
        if self.pointer_id != Some(id) {
            return;
        }
        let (dx, dy) = (x - self.last.0, y - self.last.1);
        self.last = (x, y);
        self.drag
            .rotate_by(dx * DRAG_RADIANS_PER_PX, dy * DRAG_RADIANS_PER_PX);
    }

    fn up(&mut self, id: i32) {
        if self.pointer_id == Some(id) {
            self.pointer_id = None;
            self.drag.end();
        }
    }
}

pub fn wire_pointer_orbit(
    canvas: &web::HtmlCanvasElement,
    drag: DragHandle,
    subs: &mut Subscriptions,
) {
    let orbit = Rc::new(RefCell::new(PointerOrbit {
        drag,
        pointer_id: None,
        last: (0.0, 0.0),
    }));

    let o = orbit.clone();
    let capture = canvas.clone();
    subs.push(dom::listen(canvas, "pointerdown", move |ev: web::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        o.borrow_mut()
            .down(ev.pointer_id(), ev.client_x() as f32, ev.client_y() as f32);
        _ = capture.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }));

    let o = orbit.clone();
    subs.push(dom::listen(canvas, "pointermove", move |ev: web::PointerEvent| {
        o.borrow_mut()
            .moved(ev.pointer_id(), ev.client_x() as f32, ev.client_y() as f32);
    }));

    for event in ["pointerup", "pointercancel", "lostpointercapture"] {
        let o = orbit.clone();
        subs.push(dom::listen(canvas, event, move |ev: web::PointerEvent| {
            o.borrow_mut().up(ev.pointer_id());
        }));
    }
    log::info!("[pointer] drag-to-orbit wired");
}
