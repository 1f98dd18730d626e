//! Small DOM utilities for the plant page.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config::TOAST_DURATION_MS;

/// Shows a short-lived notice at the bottom of the screen.
///
/// Used for problems that are handled locally (an invalid price, a plant that
/// vanished from the list) and must not take the page into its error state.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    toast.set_class_name("toast");
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
        Timeout::new(TOAST_DURATION_MS, move || {
            html_toast.remove();
        })
        .forget();
    }
}

/// Text shown for a price: always two decimals.
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::format_price;

    #[test]
    fn prices_show_two_decimals() {
        assert_eq!(format_price(10.0), "10.00");
        assert_eq!(format_price(4.5), "4.50");
        assert_eq!(format_price(7.129), "7.13");
    }
}
