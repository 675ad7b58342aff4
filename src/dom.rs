use log::{debug, warn};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlVideoElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// Smooth-scrolls to the element with `id` ("#faq" or "faq"). Returns false
/// when no such element is on the page.
pub fn scroll_to_section(id: &str) -> bool {
    let id = id.trim_start_matches('#');
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        debug!("No section #{} on the page", id);
        return false;
    };
    let mut options = ScrollIntoViewOptions::new();
    options.behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let mut options = ScrollToOptions::new();
        options.top(0.0);
        options.behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Vertical scroll offset and the largest offset the document allows.
pub fn scroll_metrics() -> Result<(f64, f64), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let y = window.scroll_y()?;
    let viewport = window.inner_height()?.as_f64().unwrap_or(0.0);
    let height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_height() as f64)
        .unwrap_or(viewport);
    Ok((y, (height - viewport).max(0.0)))
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Starts playback. Browsers may refuse autoplay; that rejection is expected
/// and only logged.
pub fn play_muted(video: &HtmlVideoElement) {
    video.set_muted(true);
    match video.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                debug!("Autoplay refused: {:?}", e);
            }
        }),
        Err(e) => warn!("Video play failed: {:?}", e),
    }
}

pub fn restart(video: &HtmlVideoElement) {
    video.set_current_time(0.0);
    video.load();
}
