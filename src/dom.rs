use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, Window};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// Smoothly scrolls to the element matching `href` (e.g. `"#features"`).
///
/// Returns `false` without touching the scroll position when there is no
/// such element or `href` is not a valid selector.
pub fn scroll_to_fragment(href: &str) -> bool {
    let target = match document().map(|doc| doc.query_selector(href)) {
        Ok(Ok(Some(element))) => element,
        Ok(Ok(None)) => {
            log::debug!("no scroll target for {}", href);
            return false;
        }
        Ok(Err(_)) | Err(_) => return false,
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// A window `scroll` listener that lives exactly as long as this value.
///
/// The handler receives the current vertical offset once on subscription and
/// again on every scroll event. Dropping the subscription removes the listener.
pub struct ScrollSubscription {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollSubscription {
    pub fn new<F>(mut on_scroll: F) -> Result<Self, DomError>
    where
        F: FnMut(f64) + 'static,
    {
        let window = window()?;
        on_scroll(window.scroll_y()?);

        let source = window.clone();
        let callback = Closure::wrap(Box::new(move || {
            if let Ok(offset) = source.scroll_y() {
                on_scroll(offset);
            }
        }) as Box<dyn FnMut()>);

        window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())?;
        Ok(Self { window, callback })
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove scroll listener: {}", DomError::from(err));
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen_test::*;
    use web_sys::Event;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn scroll_offset() -> f64 {
        window().unwrap().scroll_y().unwrap()
    }

    #[wasm_bindgen_test]
    fn missing_target_leaves_scroll_alone() {
        let before = scroll_offset();
        assert!(!scroll_to_fragment("#nope"));
        assert_eq!(scroll_offset(), before);
    }

    #[wasm_bindgen_test]
    fn invalid_selector_is_ignored() {
        let before = scroll_offset();
        assert!(!scroll_to_fragment("##bad"));
        assert_eq!(scroll_offset(), before);
    }

    #[wasm_bindgen_test]
    fn present_target_is_scrolled_to() {
        let doc = document().unwrap();
        let target = doc.create_element("section").unwrap();
        target.set_id("x");
        doc.body().unwrap().append_child(&target).unwrap();

        assert!(scroll_to_fragment("#x"));
        target.remove();
    }

    #[wasm_bindgen_test]
    fn subscription_reports_until_dropped() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let subscription = ScrollSubscription::new(move |_| counter.set(counter.get() + 1)).unwrap();
        assert_eq!(calls.get(), 1, "current offset is delivered on subscribe");

        let window = window().unwrap();
        window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
        assert_eq!(calls.get(), 2);

        drop(subscription);
        window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
        assert_eq!(calls.get(), 2);
    }
}
