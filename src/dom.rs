use crate::constants::MAX_DEVICE_PIXEL_RATIO;
use crate::sizing::{backing_size, capped_dpr};
use origin_core::{ScrollSample, Sizing};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()
}

/// 2D context; `opaque` surfaces are requested without an alpha channel.
pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
    opaque: bool,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    let options = js_sys::Object::new();
    _ = js_sys::Reflect::set(&options, &JsValue::from_str("alpha"), &JsValue::from_bool(!opaque));
    canvas
        .get_context_with_context_options("2d", &options)
        .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    let raw = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    capped_dpr(raw, MAX_DEVICE_PIXEL_RATIO)
}

fn window_size() -> (f64, f64) {
    web::window()
        .map(|w| {
            let num = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            (num(w.inner_width()), num(w.inner_height()))
        })
        .unwrap_or((0.0, 0.0))
}

/// The element whose scroll position and box drive an effect.
fn container(canvas: &web::HtmlCanvasElement) -> web::Element {
    canvas
        .parent_element()
        .unwrap_or_else(|| canvas.clone().unchecked_into())
}

/// Logical (CSS px) size the canvas should cover.
pub fn css_size(canvas: &web::HtmlCanvasElement, sizing: Sizing) -> (f64, f64) {
    match sizing {
        Sizing::Viewport => window_size(),
        Sizing::Container => {
            let rect = container(canvas).get_bounding_client_rect();
            (rect.width(), rect.height())
        }
        Sizing::Fixed(size) => (size.x as f64, size.y as f64),
    }
}

/// Reallocate the backing buffer for `css` at `dpr` and pin the CSS size.
pub fn apply_backing_size(canvas: &web::HtmlCanvasElement, css: (f64, f64), dpr: f64) {
    let (w_px, h_px) = backing_size(css.0, css.1, dpr);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", css.0));
    _ = style.set_property("height", &format!("{}px", css.1));
}

pub fn scroll_sample(canvas: &web::HtmlCanvasElement) -> ScrollSample {
    let Some(window) = web::window() else {
        return ScrollSample::default();
    };
    let (_, viewport_height) = window_size();
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(viewport_height);
    let rect = container(canvas).get_bounding_client_rect();
    ScrollSample {
        scroll_y: window.scroll_y().unwrap_or(0.0) as f32,
        document_height: document_height as f32,
        viewport_height: viewport_height as f32,
        element_top: rect.top() as f32,
        element_height: rect.height() as f32,
    }
}
