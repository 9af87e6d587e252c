use crate::constants::{CLASS_DONE, CLASS_VISIBLE};
use crate::dom;
use pitchutcha_core::site::{PreloaderPhase, PreloaderTimeline};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drives the preloader counter, its fade-out and the hero entrance from the
/// frame loop.
pub struct PreloaderUi {
    timeline: PreloaderTimeline,
    root: Option<web::Element>,
    counter: Option<web::Element>,
    hero_items: Vec<web::Element>,
    hero_shown: usize,
    last_counter: Option<u32>,
    finished: bool,
}

impl PreloaderUi {
    pub fn new(
        root: Option<web::Element>,
        counter: Option<web::Element>,
        hero_items: Vec<web::Element>,
    ) -> Self {
        Self {
            timeline: PreloaderTimeline::default(),
            root,
            counter,
            hero_items,
            hero_shown: 0,
            last_counter: None,
            finished: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn tick(&mut self, elapsed_ms: f64) {
        if self.finished {
            return;
        }
        match self.timeline.phase_at(elapsed_ms) {
            PreloaderPhase::Counting { counter } => self.show_counter(counter),
            PreloaderPhase::Revealing { opacity } => {
                self.show_counter(100);
                self.set_opacity(opacity);
            }
            PreloaderPhase::Done => {
                if let Some(root) = &self.root {
                    if !root.class_list().contains(CLASS_DONE) {
                        dom::set_class(root, CLASS_DONE, true);
                        dom::set_hidden(root, true);
                        log::info!("[preloader] done after {:.0}ms", elapsed_ms);
                    }
                }
            }
        }
        while self.hero_shown < self.hero_items.len()
            && self.timeline.hero_item_visible(self.hero_shown, elapsed_ms)
        {
            dom::set_class(&self.hero_items[self.hero_shown], CLASS_VISIBLE, true);
            self.hero_shown += 1;
        }
        self.finished = self.hero_shown == self.hero_items.len()
            && matches!(self.timeline.phase_at(elapsed_ms), PreloaderPhase::Done);
    }

    fn show_counter(&mut self, value: u32) {
        if self.last_counter == Some(value) {
            return;
        }
        if let Some(c) = &self.counter {
            c.set_text_content(Some(&value.to_string()));
        }
        self.last_counter = Some(value);
    }

    fn set_opacity(&self, opacity: f32) {
        if let Some(html) = self.root.as_ref().and_then(|r| r.dyn_ref::<web::HtmlElement>()) {
            _ = html.style().set_property("opacity", &format!("{:.3}", opacity));
        }
    }
}
