use crate::core::Span;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has unexpected type: {:?}", id, e))
}

pub fn create<T: JsCast>(document: &web::Document, tag: &str) -> anyhow::Result<T> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("<{}> has unexpected type: {:?}", tag, e))
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::debug!("style {}={} rejected: {:?}", property, value, e);
    }
}

#[inline]
pub fn clear_style(el: &web::HtmlElement, property: &str) {
    _ = el.style().remove_property(property);
}

/// Match the canvas backing store to the CSS size of `host` times devicePixelRatio.
/// Returns the new size in physical pixels.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    host: &web::Element,
) -> (u32, u32) {
    let dpr = device_pixel_ratio();
    let w_px = ((host.client_width() as f64) * dpr) as u32;
    let h_px = ((host.client_height() as f64) * dpr) as u32;
    let (w_px, h_px) = (w_px.max(1), h_px.max(1));
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
    (w_px, h_px)
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

pub fn viewport_height() -> f64 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_y() -> f64 {
    web::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Vertical extent of `el` in document coordinates.
pub fn document_span(el: &web::Element) -> Span {
    let rect = el.get_bounding_client_rect();
    Span {
        top: rect.top() + scroll_y(),
        height: rect.height(),
    }
}

/// Coarse touch capability check, evaluated once per mount.
pub fn is_touch_device() -> bool {
    let Some(window) = web::window() else {
        return false;
    };
    let has_ontouchstart =
        js_sys::Reflect::has(&window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
    has_ontouchstart || window.navigator().max_touch_points() > 0
}
