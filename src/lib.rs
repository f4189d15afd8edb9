#![cfg(target_arch = "wasm32")]
use origin_core::effects::{CoordinateLockIn, CurvedGrid, GlitchCoordinate, HorizonArc};
use origin_core::{CanvasEffect, Journey, JourneyConfig};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod frame;
mod listener;
mod sizing;

use constants::*;

thread_local! {
    static MOUNTED: RefCell<Vec<frame::Mounted>> = const { RefCell::new(Vec::new()) };
}

type EffectFactory = fn() -> Box<dyn CanvasEffect>;

fn journey() -> Box<dyn CanvasEffect> {
    Box::new(Journey::from_config(&JourneyConfig::default()))
}

fn effects() -> [(&'static str, EffectFactory); 5] {
    [
        (JOURNEY_CANVAS_ID, journey as EffectFactory),
        (GRID_CANVAS_ID, || Box::new(CurvedGrid::new()) as Box<dyn CanvasEffect>),
        (ARC_CANVAS_ID, || Box::new(HorizonArc::new()) as Box<dyn CanvasEffect>),
        (LOCK_IN_CANVAS_ID, || Box::new(CoordinateLockIn::new()) as Box<dyn CanvasEffect>),
        (GLITCH_CANVAS_ID, || Box::new(GlitchCoordinate::new()) as Box<dyn CanvasEffect>),
    ]
}

/// Give the journey's scroll container its scroll extent and pin the canvas
/// to the viewport while it scrolls past.
fn size_journey_container(canvas: &web::HtmlCanvasElement) {
    let pinned = canvas.style();
    _ = pinned.set_property("position", "sticky");
    _ = pinned.set_property("top", "0");
    _ = pinned.set_property("display", "block");
    let Some(parent) = canvas
        .parent_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    let style = parent.style();
    _ = style.set_property("position", "relative");
    _ = style.set_property("height", &format!("{}vh", JOURNEY_HEIGHT_VH));
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("origin-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    teardown();

    let mut mounted = Vec::new();
    for (id, make) in effects() {
        let Some(canvas) = dom::canvas_by_id(&document, id) else {
            log::debug!("#{} not present, skipping", id);
            continue;
        };
        if id == JOURNEY_CANVAS_ID {
            size_journey_container(&canvas);
        }
        match frame::mount(canvas, make()) {
            Ok(m) => mounted.push(m),
            Err(e) => log::error!("#{} mount error: {:?}", id, e),
        }
    }
    log::info!("{} effect(s) mounted", mounted.len());
    MOUNTED.with(|m| m.borrow_mut().extend(mounted));
    Ok(())
}

/// Stop every mounted effect: pending frames are cancelled and listeners
/// removed.
#[wasm_bindgen]
pub fn teardown() {
    let mounted = MOUNTED.with(|m| std::mem::take(&mut *m.borrow_mut()));
    for m in mounted {
        log::debug!("tearing down {}", m.name());
        m.unmount();
    }
}
