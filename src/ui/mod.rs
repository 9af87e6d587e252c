pub mod drawer;
pub mod palette;
pub mod preloader;
pub mod reveal;
pub mod search;
pub mod theme;
pub mod toc;

use crate::constants::*;
use crate::dom;
use pitchutcha_core::site::{CommandAction, DrawerEvent, Shortcut};
use pitchutcha_core::Subscriptions;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use drawer::DrawerUi;
use palette::PaletteUi;
use search::SearchUi;
use theme::ThemeUi;
use toc::TocUi;

/// Page chrome around the globe. Every part except the theme is optional:
/// a page without the matching markup simply goes without that feature.
#[derive(Clone)]
pub struct PageUi {
    pub document: web::Document,
    pub theme: Rc<RefCell<ThemeUi>>,
    pub drawer: Option<Rc<RefCell<DrawerUi>>>,
    pub palette: Option<Rc<RefCell<PaletteUi>>>,
    pub search: Option<Rc<RefCell<SearchUi>>>,
    pub toc: Option<Rc<RefCell<TocUi>>>,
}

impl PageUi {
    pub fn build(window: &web::Window, document: &web::Document) -> Self {
        let theme = Rc::new(RefCell::new(ThemeUi::new(window, document.clone())));
        let drawer = document.get_element_by_id(DRAWER_ID).map(|panel| {
            let toggle = document.get_element_by_id(DRAWER_TOGGLE_ID);
            Rc::new(RefCell::new(DrawerUi::new(document, panel, toggle)))
        });
        let palette = document.get_element_by_id(PALETTE_ID).map(|root| {
            let input = input_by_id(document, PALETTE_INPUT_ID);
            let list = document.get_element_by_id(PALETTE_LIST_ID);
            Rc::new(RefCell::new(PaletteUi::new(document.clone(), root, input, list)))
        });
        let search = document.get_element_by_id(SEARCH_ID).map(|root| {
            let input = input_by_id(document, SEARCH_INPUT_ID);
            let results = document.get_element_by_id(SEARCH_RESULTS_ID);
            let index = search::build_index(document, SEARCHABLE_SELECTOR);
            Rc::new(RefCell::new(SearchUi::new(
                document.clone(),
                root,
                input,
                results,
                index,
            )))
        });
        let toc = document
            .get_element_by_id(TOC_ID)
            .and_then(|_| TocUi::new(document, TOC_LINK_SELECTOR))
            .map(|t| Rc::new(RefCell::new(t)));
        log::info!(
            "[ui] drawer={} palette={} search={} toc={}",
            drawer.is_some(),
            palette.is_some(),
            search.is_some(),
            toc.is_some()
        );
        Self {
            document: document.clone(),
            theme,
            drawer,
            palette,
            search,
            toc,
        }
    }

    /// Click and input listeners for the page chrome.
    pub fn wire(&self, window: &web::Window, subs: &mut Subscriptions) {
        let theme = self.theme.clone();
        subs.push(dom::add_click_listener(&self.document, THEME_TOGGLE_ID, move || {
            theme.borrow_mut().toggle();
        }));

        if let Some(drawer) = &self.drawer {
            let d = drawer.clone();
            subs.push(dom::add_click_listener(&self.document, DRAWER_TOGGLE_ID, move || {
                d.borrow_mut().handle(DrawerEvent::Toggle);
            }));
            for link in dom::query_all(&self.document, DRAWER_LINK_SELECTOR) {
                let d = drawer.clone();
                subs.push(dom::listen(&link, "click", move |_: web::MouseEvent| {
                    d.borrow_mut().handle(DrawerEvent::LinkActivated);
                }));
            }
            let d = drawer.clone();
            subs.push(dom::listen(window, "resize", move |_: web::Event| {
                let width = dom::viewport_width();
                d.borrow_mut().handle(DrawerEvent::ViewportResized { width });
            }));
        }

        if let Some(palette) = &self.palette {
            if let Some(input) = input_by_id(&self.document, PALETTE_INPUT_ID) {
                let p = palette.clone();
                subs.push(dom::listen(&input, "input", move |_: web::Event| {
                    p.borrow_mut().on_input();
                }));
            }
            if let Some(list) = self.document.get_element_by_id(PALETTE_LIST_ID) {
                let page = self.clone();
                subs.push(dom::listen(&list, "click", move |ev: web::MouseEvent| {
                    let Some(index) = palette::clicked_index(&ev) else {
                        return;
                    };
                    let action = page
                        .palette
                        .as_ref()
                        .and_then(|p| p.borrow_mut().activate_index(index));
                    if let Some(action) = action {
                        page.dispatch(action);
                    }
                }));
            }
        }

        if let Some(search) = &self.search {
            let s = search.clone();
            subs.push(dom::add_click_listener(&self.document, SEARCH_OPEN_ID, move || {
                s.borrow_mut().open();
            }));
            if let Some(input) = input_by_id(&self.document, SEARCH_INPUT_ID) {
                let s = search.clone();
                subs.push(dom::listen(&input, "input", move |_: web::Event| {
                    s.borrow_mut().on_input();
                }));
            }
            if let Some(results) = self.document.get_element_by_id(SEARCH_RESULTS_ID) {
                let s = search.clone();
                // following a result link closes the modal; the browser does the jump
                subs.push(dom::listen(&results, "click", move |_: web::MouseEvent| {
                    s.borrow_mut().close();
                }));
            }
        }
    }

    pub fn dispatch(&self, action: CommandAction) {
        match action {
            CommandAction::ScrollTo(anchor) => match self.document.get_element_by_id(&anchor) {
                Some(el) => el.scroll_into_view(),
                None => log::warn!("[ui] no element #{}", anchor),
            },
            CommandAction::Navigate(href) => {
                if let Some(w) = web::window() {
                    if let Err(e) = w.location().set_href(&href) {
                        log::error!("[ui] navigation to {} failed: {:?}", href, e);
                    }
                }
            }
            CommandAction::ToggleTheme => {
                self.theme.borrow_mut().toggle();
            }
            CommandAction::OpenSearch => {
                if let Some(s) = &self.search {
                    s.borrow_mut().open();
                }
            }
        }
    }

    /// Returns true when the shortcut was consumed.
    pub fn handle_shortcut(&self, shortcut: Shortcut) -> bool {
        let palette_open = self.palette.as_ref().is_some_and(|p| p.borrow().is_open());
        let search_open = self.search.as_ref().is_some_and(|s| s.borrow().is_open());
        match shortcut {
            Shortcut::TogglePalette => {
                let Some(p) = &self.palette else {
                    return false;
                };
                if let Some(s) = &self.search {
                    s.borrow_mut().close();
                }
                p.borrow_mut().toggle();
                true
            }
            Shortcut::OpenSearch => {
                if palette_open {
                    return false;
                }
                match &self.search {
                    Some(s) => {
                        s.borrow_mut().open();
                        true
                    }
                    None => false,
                }
            }
            Shortcut::ToggleTheme => {
                self.theme.borrow_mut().toggle();
                true
            }
            Shortcut::Close => {
                if let Some(p) = &self.palette {
                    p.borrow_mut().close();
                }
                if let Some(s) = &self.search {
                    s.borrow_mut().close();
                }
                if let Some(d) = &self.drawer {
                    d.borrow_mut().handle(DrawerEvent::EscapePressed);
                }
                true
            }
            Shortcut::SelectPrev | Shortcut::SelectNext if palette_open => {
                let delta = if shortcut == Shortcut::SelectPrev { -1 } else { 1 };
                if let Some(p) = &self.palette {
                    p.borrow_mut().move_selection(delta);
                }
                true
            }
            Shortcut::Activate if palette_open => {
                let action = self.palette.as_ref().and_then(|p| p.borrow_mut().activate());
                if let Some(action) = action {
                    self.dispatch(action);
                }
                true
            }
            Shortcut::FocusNext | Shortcut::FocusPrev if search_open => {
                if let Some(s) = &self.search {
                    let mut s = s.borrow_mut();
                    if shortcut == Shortcut::FocusPrev {
                        s.focus_prev();
                    } else {
                        s.focus_next();
                    }
                }
                true
            }
            _ => false,
        }
    }
}

fn input_by_id(document: &web::Document, id: &str) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}
