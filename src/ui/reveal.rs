use crate::constants::CLASS_REVEALED;
use crate::dom;
use pitchutcha_core::constants::REVEAL_THRESHOLD;
use pitchutcha_core::site::{stagger_delay_ms, RevealTracker};
use pitchutcha_core::Subscription;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn reveal(el: &web::Element, order: usize) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html
            .style()
            .set_property("--reveal-delay", &format!("{}ms", stagger_delay_ms(order)));
    }
    dom::set_class(el, CLASS_REVEALED, true);
}

/// Observe `[data-reveal]` elements and reveal each once it is visible enough.
/// Without IntersectionObserver everything is revealed up front.
pub fn wire_reveal(document: &web::Document, selector: &str) -> Subscription {
    let elements = dom::query_all(document, selector);
    if elements.is_empty() {
        return Subscription::noop();
    }
    let tracker = Rc::new(RefCell::new(RevealTracker::new(elements.len())));
    let elements = Rc::new(elements);

    let els = elements.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            let mut order = 0usize;
            let mut tracker = tracker.borrow_mut();
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = els.iter().position(|e| *e == target) else {
                    continue;
                };
                if tracker.observe(index, entry.intersection_ratio() as f32) {
                    reveal(&target, order);
                    observer.unobserve(&target);
                    order += 1;
                }
            }
            if tracker.all_revealed() {
                observer.disconnect();
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    let thresholds = js_sys::Array::of2(
        &JsValue::from_f64(0.0),
        &JsValue::from_f64(REVEAL_THRESHOLD as f64),
    );
    init.set_threshold(&thresholds);
    let created =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init);
    let observer = match created {
        Ok(o) => o,
        Err(e) => {
            log::warn!("[reveal] IntersectionObserver unavailable ({:?}); revealing all", e);
            for (i, el) in elements.iter().enumerate() {
                reveal(el, i);
            }
            return Subscription::noop();
        }
    };
    for el in elements.iter() {
        observer.observe(el);
    }
    log::info!("[reveal] observing {} elements", elements.len());
    Subscription::new(move || {
        observer.disconnect();
        drop(callback);
    })
}
