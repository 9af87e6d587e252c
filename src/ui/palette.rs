use crate::constants::{CLASS_OPEN, CLASS_SELECTED};
use crate::dom;
use pitchutcha_core::site::{CommandAction, CommandPalette};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct PaletteUi {
    palette: CommandPalette,
    document: web::Document,
    root: web::Element,
    input: Option<web::HtmlInputElement>,
    list: Option<web::Element>,
}

impl PaletteUi {
    pub fn new(
        document: web::Document,
        root: web::Element,
        input: Option<web::HtmlInputElement>,
        list: Option<web::Element>,
    ) -> Self {
        Self {
            palette: CommandPalette::pitchutcha(),
            document,
            root,
            input,
            list,
        }
    }

    pub fn is_open(&self) -> bool {
        self.palette.is_open()
    }

    pub fn toggle(&mut self) {
        self.palette.toggle();
        self.render(true);
    }

    pub fn close(&mut self) {
        if self.palette.is_open() {
            self.palette.close();
            self.render(false);
        }
    }

    pub fn on_input(&mut self) {
        let query = self.input.as_ref().map(|i| i.value()).unwrap_or_default();
        self.palette.set_query(&query);
        self.render_list();
    }

    pub fn move_selection(&mut self, delta: i32) {
        self.palette.move_selection(delta);
        self.render_list();
    }

    pub fn activate(&mut self) -> Option<CommandAction> {
        let action = self.palette.activate();
        self.render(false);
        action
    }

    /// Activate the result at `index` (mouse click on a list item).
    pub fn activate_index(&mut self, index: usize) -> Option<CommandAction> {
        let current = self.palette.selected_index() as i32;
        self.palette.move_selection(index as i32 - current);
        self.activate()
    }

    fn render(&self, focus: bool) {
        dom::set_class(&self.root, CLASS_OPEN, self.palette.is_open());
        dom::set_hidden(&self.root, !self.palette.is_open());
        if let Some(input) = &self.input {
            if self.palette.is_open() {
                input.set_value(self.palette.query());
                if focus {
                    _ = input.focus();
                }
            }
        }
        self.render_list();
    }

    fn render_list(&self) {
        let Some(list) = &self.list else {
            return;
        };
        list.set_inner_html("");
        for (i, cmd) in self.palette.results().enumerate() {
            let Ok(item) = self.document.create_element("li") else {
                continue;
            };
            item.set_text_content(Some(&cmd.title));
            _ = item.set_attribute("data-index", &i.to_string());
            _ = item.set_attribute("role", "option");
            let selected = i == self.palette.selected_index();
            _ = item.set_attribute("aria-selected", if selected { "true" } else { "false" });
            dom::set_class(&item, CLASS_SELECTED, selected);
            _ = list.append_child(&item);
        }
    }
}

/// Index of the `[data-index]` list item an event landed on.
pub fn clicked_index(ev: &web::MouseEvent) -> Option<usize> {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest("[data-index]").ok().flatten())
        .and_then(|el| el.get_attribute("data-index"))
        .and_then(|s| s.parse().ok())
}
