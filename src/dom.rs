use pitchutcha_core::Subscription;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach `handler` for `event` on `target`; the returned subscription removes it.
pub fn listen<E: FromWasmAbi + 'static>(
    target: &web::EventTarget,
    event: &'static str,
    handler: impl FnMut(E) + 'static,
) -> Subscription {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[dom] could not listen for {}: {:?}", event, e);
        return Subscription::noop();
    }
    let target = target.clone();
    Subscription::new(move || {
        _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        drop(closure);
    })
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> Subscription {
    match document.get_element_by_id(element_id) {
        Some(el) => listen(&el, "click", move |_: web::MouseEvent| handler()),
        None => Subscription::noop(),
    }
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

/// Top of `el` in document coordinates (CSS pixels).
pub fn document_top(el: &web::Element) -> f32 {
    let scroll_y = web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0);
    (el.get_bounding_client_rect().top() + scroll_y) as f32
}

pub fn viewport_height() -> f32 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

pub fn viewport_width() -> f32 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

pub fn scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let list = el.class_list();
    _ = if on { list.add_1(class) } else { list.remove_1(class) };
}

pub fn set_hidden(el: &web::Element, hidden: bool) {
    if hidden {
        _ = el.set_attribute("hidden", "");
    } else {
        _ = el.remove_attribute("hidden");
    }
}

/// True while focus sits in a text field, so bare-letter shortcuts stay out of the way.
pub fn typing_in_input(document: &web::Document) -> bool {
    document
        .active_element()
        .map(|el| {
            let tag = el.tag_name();
            tag.eq_ignore_ascii_case("input") || tag.eq_ignore_ascii_case("textarea")
        })
        .unwrap_or(false)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
