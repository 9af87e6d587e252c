use crate::constants::CHAPTER_SELECTOR;
use crate::dom;
use crate::ui::toc::TocUi;
use pitchutcha_core::{
    ChapterAnchor, ChapterLayout, FrameThrottle, ScrollMetrics, ScrollSource, Subscriptions,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Reads scroll metrics for the narrative container from the live page.
#[derive(Clone)]
pub struct DomScrollSource {
    document: web::Document,
    container: web::Element,
}

impl DomScrollSource {
    pub fn new(document: web::Document, container: web::Element) -> Self {
        Self {
            document,
            container,
        }
    }

    pub fn container_top(&self) -> f32 {
        dom::document_top(&self.container)
    }

    /// Container height minus one viewport: the distance the page scrolls
    /// while the container is in view.
    pub fn scrollable_height(&self) -> f32 {
        let height = self.container.get_bounding_client_rect().height() as f32;
        (height - dom::viewport_height()).max(0.0)
    }

    /// Chapter anchors with offsets relative to the top of the container.
    pub fn anchors(&self) -> Vec<ChapterAnchor> {
        let container_top = self.container_top();
        dom::query_all(&self.document, CHAPTER_SELECTOR)
            .into_iter()
            .map(|el| ChapterAnchor::new(el.id(), dom::document_top(&el) - container_top))
            .collect()
    }

    pub fn layout(&self) -> ChapterLayout {
        ChapterLayout::new(self.anchors(), self.scrollable_height())
    }
}

impl ScrollSource for DomScrollSource {
    fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics::new(dom::scroll_y(), self.container_top(), self.scrollable_height())
    }
}

pub struct ScrollWiring {
    pub source: DomScrollSource,
    pub narrative: FrameThrottle<ScrollMetrics>,
    pub layouts: FrameThrottle<ChapterLayout>,
    pub toc_scroll: FrameThrottle<f32>,
    pub toc: Option<Rc<RefCell<TocUi>>>,
    pub canvas: web::HtmlCanvasElement,
}

/// Scroll and resize only record the latest value; the frame loop consumes it.
/// Resize and late `load` re-measure anchors and headings, since a reflow
/// moves them.
pub fn wire_scroll(window: &web::Window, w: ScrollWiring, subs: &mut Subscriptions) {
    let push = {
        let source = w.source.clone();
        let narrative = w.narrative.clone();
        let toc_scroll = w.toc_scroll.clone();
        move || {
            narrative.push(source.metrics());
            toc_scroll.push(dom::scroll_y());
        }
    };
    push();

    let on_scroll = push.clone();
    subs.push(dom::listen(window, "scroll", move |_: web::Event| on_scroll()));

    let relayout = {
        let source = w.source.clone();
        let layouts = w.layouts.clone();
        let toc = w.toc.clone();
        move || {
            layouts.push(source.layout());
            if let Some(toc) = &toc {
                toc.borrow_mut().relayout();
            }
            push();
        }
    };

    dom::sync_canvas_backing_size(&w.canvas);
    let canvas = w.canvas.clone();
    let on_resize = relayout.clone();
    subs.push(dom::listen(window, "resize", move |_: web::Event| {
        dom::sync_canvas_backing_size(&canvas);
        on_resize();
    }));
    // images and web fonts can shift anchors after init
    subs.push(dom::listen(window, "load", move |_: web::Event| relayout()));
}
