use crate::constants::CLASS_OPEN;
use crate::dom;
use pitchutcha_core::constants::SEARCH_RESULT_LIMIT;
use pitchutcha_core::site::{FocusTrap, SearchEntry, SearchIndex};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct SearchUi {
    index: SearchIndex,
    document: web::Document,
    root: web::Element,
    input: Option<web::HtmlInputElement>,
    results: Option<web::Element>,
    trap: FocusTrap,
    open: bool,
}

/// Index every `section[id]`: its first heading is the title, its text the body.
pub fn build_index(document: &web::Document, selector: &str) -> SearchIndex {
    let entries: Vec<SearchEntry> = dom::query_all(document, selector)
        .into_iter()
        .map(|section| {
            let title = section
                .query_selector("h1, h2, h3")
                .ok()
                .flatten()
                .and_then(|h| h.text_content())
                .unwrap_or_else(|| section.id());
            let body = section.text_content().unwrap_or_default();
            SearchEntry::new(title.trim(), section.id(), body)
        })
        .collect();
    log::info!("[search] indexed {} sections", entries.len());
    SearchIndex::new(entries)
}

impl SearchUi {
    pub fn new(
        document: web::Document,
        root: web::Element,
        input: Option<web::HtmlInputElement>,
        results: Option<web::Element>,
        index: SearchIndex,
    ) -> Self {
        Self {
            index,
            document,
            root,
            input,
            results,
            trap: FocusTrap::new(1),
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
        dom::set_class(&self.root, CLASS_OPEN, true);
        dom::set_hidden(&self.root, false);
        if let Some(input) = &self.input {
            input.set_value("");
        }
        self.render_results();
        self.trap = FocusTrap::new(self.focusables().len());
        self.focus_current();
    }

    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        dom::set_class(&self.root, CLASS_OPEN, false);
        dom::set_hidden(&self.root, true);
    }

    pub fn on_input(&mut self) {
        self.render_results();
        self.trap.resize(self.focusables().len());
    }

    pub fn focus_next(&mut self) {
        self.trap.next();
        self.focus_current();
    }

    pub fn focus_prev(&mut self) {
        self.trap.prev();
        self.focus_current();
    }

    fn focusables(&self) -> Vec<web::HtmlElement> {
        let mut out: Vec<web::HtmlElement> = Vec::new();
        if let Some(input) = &self.input {
            out.push(input.clone().unchecked_into());
        }
        if let Some(results) = &self.results {
            if let Ok(list) = results.query_selector_all("a") {
                out.extend(
                    (0..list.length())
                        .filter_map(|i| list.get(i))
                        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok()),
                );
            }
        }
        out
    }

    fn focus_current(&self) {
        if let Some(el) = self.focusables().get(self.trap.index()) {
            _ = el.focus();
        }
    }

    fn render_results(&self) {
        let Some(results) = &self.results else {
            return;
        };
        results.set_inner_html("");
        let query = self.input.as_ref().map(|i| i.value()).unwrap_or_default();
        for hit in self.index.search(&query, SEARCH_RESULT_LIMIT) {
            let (Ok(item), Ok(link)) = (
                self.document.create_element("li"),
                self.document.create_element("a"),
            ) else {
                continue;
            };
            _ = link.set_attribute("href", &format!("#{}", hit.entry.anchor));
            link.set_text_content(Some(&hit.entry.title));
            _ = item.append_child(&link);
            _ = results.append_child(&item);
        }
    }
}
