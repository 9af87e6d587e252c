use crate::constants::CLASS_ACTIVE;
use crate::dom;
use pitchutcha_core::constants::SCROLLSPY_ACTIVATION_MARGIN_PX;
use pitchutcha_core::site::{Heading, ScrollSpy};
use web_sys as web;

/// Table-of-contents highlighter.
pub struct TocUi {
    document: web::Document,
    spy: ScrollSpy,
    links: Vec<(String, web::Element)>,
    active: Option<String>,
}

impl TocUi {
    /// Returns `None` when the page has no TOC links pointing at real headings.
    pub fn new(document: &web::Document, link_selector: &str) -> Option<Self> {
        let mut links = Vec::new();
        let mut headings = Vec::new();
        for link in dom::query_all(document, link_selector) {
            let Some(anchor) = link
                .get_attribute("href")
                .and_then(|h| h.strip_prefix('#').map(str::to_string))
            else {
                continue;
            };
            let Some(target) = document.get_element_by_id(&anchor) else {
                continue;
            };
            headings.push(Heading::new(anchor.clone(), dom::document_top(&target)));
            links.push((anchor, link));
        }
        if headings.is_empty() {
            return None;
        }
        match ScrollSpy::new(headings, SCROLLSPY_ACTIVATION_MARGIN_PX) {
            Ok(spy) => Some(Self {
                document: document.clone(),
                spy,
                links,
                active: None,
            }),
            Err(e) => {
                log::warn!("[toc] scroll-spy disabled: {}", e);
                None
            }
        }
    }

    /// Re-measure heading offsets after a reflow.
    pub fn relayout(&mut self) {
        let headings = self
            .links
            .iter()
            .filter_map(|(anchor, _)| {
                let target = self.document.get_element_by_id(anchor)?;
                Some(Heading::new(anchor.clone(), dom::document_top(&target)))
            })
            .collect();
        if let Err(e) = self.spy.relayout(headings) {
            log::warn!("[toc] relayout skipped: {}", e);
        }
    }

    pub fn update(&mut self, scroll_y: f32) {
        let next = self.spy.active(scroll_y).map(|h| h.anchor.clone());
        if next == self.active {
            return;
        }
        for (anchor, link) in &self.links {
            dom::set_class(link, CLASS_ACTIVE, Some(anchor) == next.as_ref());
        }
        self.active = next;
    }
}
