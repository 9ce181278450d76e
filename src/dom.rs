use crate::constants::MAX_DPR;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current vertical scroll offset in CSS pixels.
#[inline]
pub fn scroll_y() -> f32 {
    web::window().map(|w| w.scroll_y().unwrap_or(0.0) as f32).unwrap_or(0.0)
}

/// Viewport size in CSS pixels. Falls back to 1x1 so downstream math never
/// divides by zero before the first resize event.
pub fn viewport_css_size() -> (f32, f32) {
    if let Some(w) = web::window() {
        let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
        let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
        (width.max(1.0) as f32, height.max(1.0) as f32)
    } else {
        (1.0, 1.0)
    }
}

/// Keep the canvas backing store at CSS size * devicePixelRatio (capped).
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_DPR);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
