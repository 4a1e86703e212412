use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::dom::DomError;

/// One-shot visibility of a page section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    /// Feeds one intersection observation. Returns `true` only on the
    /// `Hidden -> Revealed` transition; a revealed state never changes.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        match self {
            RevealState::Hidden if is_intersecting => {
                *self = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(self) -> bool {
        self == RevealState::Revealed
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Entrance {
    FadeUp { offset_px: f64 },
    ScaleIn { from: f64 },
    Fade,
}

impl Entrance {
    pub fn style(self, state: RevealState, duration_s: f64, delay_s: f64) -> String {
        let shown = state.is_revealed();
        let opacity = if shown { 1 } else { 0 };
        let transform = match self {
            Entrance::FadeUp { offset_px } => {
                Some(format!("translateY({}px)", if shown { 0.0 } else { offset_px }))
            }
            Entrance::ScaleIn { from } => Some(format!("scale({})", if shown { 1.0 } else { from })),
            Entrance::Fade => None,
        };
        let timing = format!("{:.2}s ease-out {:.2}s", duration_s, delay_s);

        match transform {
            Some(transform) => format!(
                "opacity: {}; transform: {}; transition: opacity {timing}, transform {timing};",
                opacity, transform
            ),
            None => format!("opacity: {}; transition: opacity {timing};", opacity),
        }
    }
}

/// Delay for the `index`-th item of a staggered group.
pub fn stagger(index: usize, step_s: f64) -> f64 {
    index as f64 * step_s
}

/// Watches a single element and fires once when it first intersects the
/// viewport shrunk by the given root margin. Dropping it stops observing.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn attach<F>(element: &Element, root_margin: &str, on_reveal: F) -> Result<Self, DomError>
    where
        F: FnOnce() + 'static,
    {
        let mut state = RevealState::Hidden;
        let mut on_reveal = Some(on_reveal);
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
            if state.observe(intersecting) {
                observer.disconnect();
                if let Some(on_reveal) = on_reveal.take() {
                    on_reveal();
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Binds a section to a reveal signal. Attach the returned ref to the
/// section's root element.
#[hook]
pub fn use_reveal() -> (NodeRef, RevealState) {
    let node = use_node_ref();
    let state = use_state_eq(RevealState::default);

    {
        let node = node.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let observer = match node.cast::<Element>() {
                    Some(element) => {
                        let setter = state.setter();
                        let attached = RevealObserver::attach(&element, config::REVEAL_ROOT_MARGIN, move || {
                            setter.set(RevealState::Revealed)
                        });
                        match attached {
                            Ok(observer) => Some(observer),
                            Err(err) => {
                                log::warn!("reveal observer unavailable, showing section: {}", err);
                                state.set(RevealState::Revealed);
                                None
                            }
                        }
                    }
                    None => {
                        log::warn!("reveal target not mounted, showing section");
                        state.set(RevealState::Revealed);
                        None
                    }
                };
                move || drop(observer)
            },
            (),
        );
    }

    (node, *state)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;
    use crate::dom::document;

    wasm_bindgen_test_configure!(run_in_browser);

    fn place(element: &Element, top_px: i32) {
        element
            .set_attribute(
                "style",
                &format!("position: fixed; left: 0; top: {}px; width: 200px; height: 200px;", top_px),
            )
            .unwrap();
    }

    fn fixed_box(top_px: i32) -> Element {
        let doc = document().unwrap();
        let element = doc.create_element("div").unwrap();
        place(&element, top_px);
        doc.body().unwrap().append_child(&element).unwrap();
        element
    }

    fn mount_point() -> Element {
        let doc = document().unwrap();
        let root = doc.create_element("div").unwrap();
        doc.body().unwrap().append_child(&root).unwrap();
        root
    }

    #[wasm_bindgen_test]
    async fn fires_once_even_after_leaving_and_reentering() {
        let element = fixed_box(200);
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let _observer = RevealObserver::attach(&element, config::REVEAL_ROOT_MARGIN, move || {
            counter.set(counter.get() + 1)
        })
        .unwrap();

        TimeoutFuture::new(200).await;
        assert_eq!(fired.get(), 1);

        place(&element, 100_000);
        TimeoutFuture::new(200).await;
        place(&element, 200);
        TimeoutFuture::new(200).await;
        assert_eq!(fired.get(), 1);

        element.remove();
    }

    #[wasm_bindgen_test]
    async fn stays_silent_while_off_screen() {
        let element = fixed_box(100_000);
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let _observer = RevealObserver::attach(&element, config::REVEAL_ROOT_MARGIN, move || {
            counter.set(counter.get() + 1)
        })
        .unwrap();

        TimeoutFuture::new(200).await;
        assert_eq!(fired.get(), 0);
        element.remove();
    }

    #[wasm_bindgen_test]
    async fn dropped_observer_never_fires() {
        let element = fixed_box(100_000);
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let observer = RevealObserver::attach(&element, config::REVEAL_ROOT_MARGIN, move || {
            counter.set(counter.get() + 1)
        })
        .unwrap();
        drop(observer);

        place(&element, 200);
        TimeoutFuture::new(200).await;
        assert_eq!(fired.get(), 0);
        element.remove();
    }

    #[function_component(VisibleSection)]
    fn visible_section() -> Html {
        let (node, state) = use_reveal();
        html! {
            <section ref={node} style="position: fixed; left: 0; top: 200px; width: 200px; height: 200px;">
                { format!("{:?}", state) }
            </section>
        }
    }

    #[function_component(DetachedSection)]
    fn detached_section() -> Html {
        let (_node, state) = use_reveal();
        html! { <p>{ format!("{:?}", state) }</p> }
    }

    #[wasm_bindgen_test]
    async fn section_in_view_is_revealed() {
        let root = mount_point();
        yew::Renderer::<VisibleSection>::with_root(root.clone()).render();
        TimeoutFuture::new(300).await;
        assert_eq!(root.text_content().unwrap_or_default().trim(), "Revealed");
    }

    #[wasm_bindgen_test]
    async fn section_without_mounted_ref_is_shown() {
        let root = mount_point();
        yew::Renderer::<DetachedSection>::with_root(root.clone()).render();
        TimeoutFuture::new(100).await;
        assert_eq!(root.text_content().unwrap_or_default(), "Revealed");
    }
}
