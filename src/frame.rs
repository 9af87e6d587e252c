use crate::render;
use crate::ui::preloader::PreloaderUi;
use crate::ui::PageUi;
use instant::Instant;
use pitchutcha_core::{FrameThrottle, NarrativeContext, RenderLoop, Subscriptions};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub narrative: NarrativeContext,
    pub render_loop: RenderLoop,
    pub gpu: Option<render::GpuState<'a>>,
    pub canvas: web::HtmlCanvasElement,

    pub page: PageUi,
    pub toc_scroll: FrameThrottle<f32>,
    pub preloader: PreloaderUi,
    pub subscriptions: Subscriptions,

    pub start: Instant,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        // at most one narrative update per frame, from the latest scroll sample
        self.narrative.tick();
        let pose = self.render_loop.frame();

        if !self.preloader.is_finished() {
            let elapsed_ms = (now - self.start).as_secs_f64() * 1000.0;
            self.preloader.tick(elapsed_ms);
        }
        if let Some(scroll_y) = self.toc_scroll.take() {
            if let Some(toc) = &self.page.toc {
                toc.borrow_mut().update(scroll_y);
            }
        }

        let theme = self.page.theme.borrow().current();
        if let Some(g) = &mut self.gpu {
            g.set_theme(theme);
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(dt_sec, &pose) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}; page runs without the globe", e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
