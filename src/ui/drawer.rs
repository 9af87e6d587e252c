use crate::constants::{CLASS_BODY_LOCKED, CLASS_OPEN};
use crate::dom;
use pitchutcha_core::site::{Drawer, DrawerEvent};
use web_sys as web;

pub struct DrawerUi {
    drawer: Drawer,
    panel: web::Element,
    toggle: Option<web::Element>,
    body: Option<web::HtmlElement>,
}

impl DrawerUi {
    pub fn new(
        document: &web::Document,
        panel: web::Element,
        toggle: Option<web::Element>,
    ) -> Self {
        let ui = Self {
            drawer: Drawer::default(),
            panel,
            toggle,
            body: document.body(),
        };
        ui.render();
        ui
    }

    pub fn handle(&mut self, event: DrawerEvent) {
        if self.drawer.handle(event) {
            log::info!("[drawer] {:?} -> {:?}", event, self.drawer.state());
            self.render();
        }
    }

    fn render(&self) {
        let view = self.drawer.view();
        dom::set_class(&self.panel, CLASS_OPEN, view.open);
        if let Some(t) = &self.toggle {
            _ = t.set_attribute("aria-expanded", view.aria_expanded);
        }
        if let Some(body) = &self.body {
            dom::set_class(body, CLASS_BODY_LOCKED, view.body_locked);
        }
    }
}
