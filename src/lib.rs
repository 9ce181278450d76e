#![cfg(target_arch = "wasm32")]
//! Scroll-driven 3D showcase: three meshes stacked one per page section, a
//! background particle field, and a pointer-parallax camera, rendered with
//! WebGPU on a fixed full-viewport canvas while the page scrolls behind it.

use crate::core::{InputEvent, SceneSim};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scrollscape starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("scene-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #scene-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Backing store must be sized before the surface is configured
    dom::sync_canvas_backing_size(&canvas);

    let queue: events::EventQueue = Rc::new(RefCell::new(Vec::new()));
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        queue: queue.clone(),
    });

    let (vw, vh) = dom::viewport_css_size();
    let mut sim = SceneSim::new(vw, vh);
    // Pick up a mid-page reload before the first scroll event fires
    sim.handle_event(InputEvent::Scroll {
        offset_y: dom::scroll_y(),
    });

    let gpu = frame::init_gpu(&canvas).await;
    if gpu.is_none() {
        log::error!("WebGPU unavailable; page will stay blank");
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        sim,
        events: queue,
        canvas,
        gpu,
        start_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
