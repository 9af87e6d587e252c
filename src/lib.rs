#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use instant::Instant;
use pitchutcha_core::{
    drag_channel, ChapterLayout, FrameThrottle, NarrativeConfig, NarrativeContext,
    OrientationTable, Subscriptions,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod render;
mod ui;

fn build_narrative(source: Option<&events::DomScrollSource>) -> NarrativeContext {
    let config = NarrativeConfig::default();
    let table = OrientationTable::pitchutcha();
    let layout = match source {
        Some(source) => source.layout(),
        None => {
            log::warn!("[narrative] missing #{}", NARRATIVE_ID);
            ChapterLayout::default()
        }
    };
    NarrativeContext::build(&layout.anchors, &table, layout.scrollable_height, config)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pitchutcha-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let start = Instant::now();
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let mut subscriptions = Subscriptions::new();

    // Narrative: scroll position drives the globe orientation
    let source = document
        .get_element_by_id(NARRATIVE_ID)
        .map(|container| events::DomScrollSource::new(document.clone(), container));
    let narrative = build_narrative(source.as_ref());
    if let Some(body) = document.body() {
        subscriptions.push(narrative.on_chapter_change(move |change| {
            _ = body.set_attribute(ATTR_CHAPTER, &change.id);
        }));
    }

    let (drag, drag_flag) = drag_channel();
    let render_loop = narrative.render_loop(drag_flag);
    events::wire_pointer_orbit(&canvas, drag, &mut subscriptions);

    // Page chrome
    let page = ui::PageUi::build(&window, &document);
    page.wire(&window, &mut subscriptions);
    events::wire_keydown(&window, page.clone(), &mut subscriptions);
    subscriptions.push(ui::reveal::wire_reveal(&document, REVEAL_SELECTOR));

    let toc_scroll: FrameThrottle<f32> = FrameThrottle::new();
    match source {
        Some(source) => events::wire_scroll(
            &window,
            events::scroll::ScrollWiring {
                source,
                narrative: narrative.throttle(),
                layouts: narrative.layouts(),
                toc_scroll: toc_scroll.clone(),
                toc: page.toc.clone(),
                canvas: canvas.clone(),
            },
            &mut subscriptions,
        ),
        None => dom::sync_canvas_backing_size(&canvas),
    }
    let preloader = ui::preloader::PreloaderUi::new(
        document.get_element_by_id(PRELOADER_ID),
        document.get_element_by_id(PRELOADER_COUNTER_ID),
        dom::query_all(&document, HERO_ITEM_SELECTOR),
    );

    let gpu = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        narrative,
        render_loop,
        gpu,
        canvas,
        page,
        toc_scroll,
        preloader,
        subscriptions,
        start,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
