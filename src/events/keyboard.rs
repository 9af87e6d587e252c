use crate::dom;
use crate::ui::PageUi;
use pitchutcha_core::site::{allowed_while_typing, shortcut_for};
use pitchutcha_core::Subscriptions;
use web_sys as web;

pub fn handle_keydown(ev: &web::KeyboardEvent, page: &PageUi) {
    let Some(shortcut) = shortcut_for(&ev.key(), ev.ctrl_key(), ev.meta_key(), ev.shift_key())
    else {
        return;
    };
    if dom::typing_in_input(&page.document) && !allowed_while_typing(shortcut) {
        return;
    }
    if page.handle_shortcut(shortcut) {
        log::debug!("[keys] {:?}", shortcut);
        ev.prevent_default();
    }
}

pub fn wire_keydown(window: &web::Window, page: PageUi, subs: &mut Subscriptions) {
    subs.push(dom::listen(window, "keydown", move |ev: web::KeyboardEvent| {
        handle_keydown(&ev, &page);
    }));
}
