use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;
use crate::icons::{self, IconGlyph, Shape};

#[derive(Properties, PartialEq)]
pub struct IconProps {
    /// Kebab-case icon name, e.g. `"arrow-right"`.
    pub name: AttrValue,
    #[prop_or(config::DEFAULT_ICON_SIZE)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub color: Option<AttrValue>,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let glyph = use_state(|| None::<IconGlyph>);

    {
        let glyph = glyph.clone();
        use_effect_with_deps(
            move |name: &AttrValue| {
                let name = name.clone();
                spawn_local(async move {
                    glyph.set(Some(icons::resolve(&name)));
                });
                || ()
            },
            props.name.clone(),
        );
    }

    let size = props.size.to_string();
    match *glyph {
        None => html! {
            <div class={props.class.clone()} style={format!("width: {0}px; height: {0}px;", props.size)}></div>
        },
        Some(glyph) => {
            let stroke = props.color.clone().unwrap_or_else(|| AttrValue::from("currentColor"));
            html! {
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width={size.clone()}
                    height={size}
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke={stroke}
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    class={props.class.clone()}
                >
                    { for glyph.shapes().iter().map(render_shape) }
                </svg>
            }
        }
    }
}

fn render_shape(shape: &Shape) -> Html {
    match *shape {
        Shape::Path(d) => html! { <path d={d} /> },
        Shape::Circle { cx, cy, r } => html! { <circle cx={cx} cy={cy} r={r} /> },
        Shape::Rect { x, y, width, height, rx } => html! {
            <rect x={x} y={y} width={width} height={height} rx={rx} />
        },
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use gloo_timers::callback::Timeout;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::Element;

    use super::*;
    use crate::dom::document;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_point() -> Element {
        let doc = document().unwrap();
        let root = doc.create_element("div").unwrap();
        doc.body().unwrap().append_child(&root).unwrap();
        root
    }

    #[function_component(RenamedIcon)]
    fn renamed_icon() -> Html {
        let name = use_state(|| AttrValue::from("menu"));
        {
            let name = name.clone();
            use_effect_with_deps(
                move |_| {
                    let timeout = Timeout::new(300, move || name.set(AttrValue::from("x")));
                    move || drop(timeout)
                },
                (),
            );
        }
        html! { <Icon name={(*name).clone()} size={20} /> }
    }

    #[wasm_bindgen_test]
    async fn resolves_to_inline_svg() {
        let root = mount_point();
        let props = IconProps {
            name: AttrValue::from("arrow-right"),
            size: 20,
            class: Classes::new(),
            color: Some(AttrValue::from("red")),
        };
        yew::Renderer::<Icon>::with_root_and_props(root.clone(), props).render();
        TimeoutFuture::new(100).await;

        let markup = root.inner_html();
        assert!(markup.contains("<svg"), "{}", markup);
        assert!(markup.contains("width=\"20\""), "{}", markup);
        assert!(markup.contains("stroke=\"red\""), "{}", markup);
        assert!(markup.contains("M5 12h14"), "{}", markup);
        assert!(!markup.contains("width: 20px"), "{}", markup);
    }

    #[wasm_bindgen_test]
    async fn unknown_name_renders_fallback_glyph() {
        let root = mount_point();
        let props = IconProps {
            name: AttrValue::from("no-such-icon"),
            size: 24,
            class: Classes::new(),
            color: None,
        };
        yew::Renderer::<Icon>::with_root_and_props(root.clone(), props).render();
        TimeoutFuture::new(100).await;

        let markup = root.inner_html();
        assert!(markup.contains("M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3"), "{}", markup);
        assert!(markup.contains("stroke=\"currentColor\""), "{}", markup);
    }

    #[wasm_bindgen_test]
    async fn resolves_again_when_name_changes() {
        let root = mount_point();
        yew::Renderer::<RenamedIcon>::with_root(root.clone()).render();

        TimeoutFuture::new(100).await;
        assert!(root.inner_html().contains("M4 6h16"));

        TimeoutFuture::new(500).await;
        let markup = root.inner_html();
        assert!(markup.contains("M18 6 6 18"), "{}", markup);
        assert!(!markup.contains("M4 6h16"), "{}", markup);
    }
}
