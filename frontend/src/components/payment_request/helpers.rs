//! Browser utilities for the payment request editor.
//!
//! - **User Feedback**: temporary toast notifications.
//! - **Dirty Tracking**: MD5 of the serialized document, mirrored into the
//!   global `app_dirty` flag the page's `beforeunload` handler reads.
//! - **Clock**: today's date from the browser, for the date autofill.
//! - **Downloads**: turning exported PNG bytes into an object URL.

use common::model::date::CalendarDate;
use common::model::document::PaymentDocument;
use js_sys::{Array, Date, Reflect, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlElement, Url};

/// Displays a temporary notification message at the bottom of the screen.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Computes the MD5 hash of a string and returns it as a hex digest.
pub fn compute_md5(input: &str) -> String {
    format!("{:x}", md5::compute(input))
}

/// Hash of the document as it would be sent to the backend.
pub fn document_md5(document: &PaymentDocument) -> String {
    compute_md5(&serde_json::to_string(document).unwrap_or_default())
}

/// Sets the global `app_dirty` flag so closing the tab can warn about unsaved edits.
pub fn set_window_dirty_flag(dirty: bool) {
    if let Some(window) = web_sys::window() {
        let _ = Reflect::set(
            &window,
            &JsValue::from_str("app_dirty"),
            &JsValue::from_bool(dirty),
        );
    }
}

/// Today's date in the browser's local time zone.
pub fn today() -> CalendarDate {
    let now = Date::new_0();
    CalendarDate::new(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
}

/// Wraps PNG bytes in a `Blob` and returns an object URL pointing at it.
pub fn png_object_url(bytes: &[u8]) -> Result<String, JsValue> {
    let parts = Array::of1(&Uint8Array::from(bytes).into());
    let options = BlobPropertyBag::new();
    options.set_type("image/png");
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    Url::create_object_url_with_blob(&blob)
}

pub fn revoke_object_url(url: &str) {
    if Url::revoke_object_url(url).is_err() {
        gloo_console::warn!("Could not release the export preview");
    }
}
