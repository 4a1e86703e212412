use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icon::Icon;
use crate::config;
use crate::content::{BRAND, BRAND_ICON, MENU_CLOSE_ICON, MENU_ICON, NAV_LINKS};
use crate::dom::{scroll_to_fragment, ScrollSubscription};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    Scrolled(f64),
    ToggleMenu,
    LinkActivated,
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: NavAction) -> Rc<Self> {
        let mut next = *self;
        match action {
            NavAction::Scrolled(offset) => next.scrolled = offset > config::NAV_SCROLL_THRESHOLD_PX,
            NavAction::ToggleMenu => next.menu_open = !next.menu_open,
            NavAction::LinkActivated => next.menu_open = false,
        }
        Rc::new(next)
    }
}

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let nav = use_reducer_eq(NavState::default);

    {
        let dispatcher = nav.dispatcher();
        use_effect_with_deps(
            move |_| {
                let subscription = ScrollSubscription::new(move |offset| {
                    dispatcher.dispatch(NavAction::Scrolled(offset))
                })
                .map_err(|err| log::warn!("scroll tracking disabled: {}", err))
                .ok();
                move || drop(subscription)
            },
            (),
        );
    }

    let toggle_menu = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::ToggleMenu))
    };

    let desktop_links = NAV_LINKS.iter().map(|link| {
        let href = link.href;
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_fragment(href);
        });
        html! { <a key={href} href={href} class="nav-link" onclick={onclick}>{link.label}</a> }
    });

    let mobile_menu = if nav.menu_open {
        let links = NAV_LINKS.iter().map(|link| {
            let href = link.href;
            let dispatcher = nav.dispatcher();
            let onclick = Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                scroll_to_fragment(href);
                dispatcher.dispatch(NavAction::LinkActivated);
            });
            html! { <a key={href} href={href} class="mobile-nav-link" onclick={onclick}>{link.label}</a> }
        });
        html! {
            <div class="mobile-menu">
                { for links }
                <button class="btn-primary">{"Подключить кошелёк"}</button>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <header class={classes!("site-header", nav.scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        transition: all 0.3s;
                        background: transparent;
                    }
                    .site-header.scrolled {
                        background: rgba(2, 6, 23, 0.8);
                        backdrop-filter: blur(24px);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .nav-bar {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1rem 0;
                    }
                    .nav-links {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: #94a3b8;
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .nav-link:hover {
                        color: #fff;
                    }
                    .nav-actions {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .menu-toggle {
                        display: none;
                        padding: 0.5rem;
                        background: none;
                        border: none;
                        color: #fff;
                        cursor: pointer;
                    }
                    .mobile-menu {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        margin-top: 1rem;
                        padding: 1rem 0;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        animation: menu-open 0.2s ease-out;
                    }
                    .mobile-nav-link {
                        color: #cbd5e1;
                        padding: 0.5rem 0;
                        text-decoration: none;
                    }
                    @keyframes menu-open {
                        from { opacity: 0; transform: translateY(-8px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @media (max-width: 768px) {
                        .nav-links, .nav-wallet { display: none; }
                        .menu-toggle { display: block; }
                    }
                    @media (min-width: 769px) {
                        .mobile-menu { display: none; }
                    }
                "#}
            </style>
            <nav class="container">
                <div class="nav-bar">
                    <a href="#" class="brand">
                        <div class="brand-mark">
                            <Icon name={BRAND_ICON} size={24} />
                        </div>
                        <span class="brand-name">{BRAND}</span>
                    </a>
                    <div class="nav-links">
                        { for desktop_links }
                    </div>
                    <div class="nav-actions">
                        <button class="btn-primary nav-wallet">{"Подключить кошелёк"}</button>
                        <button class="menu-toggle" onclick={toggle_menu}>
                            <Icon name={if nav.menu_open { MENU_CLOSE_ICON } else { MENU_ICON }} size={24} />
                        </button>
                    </div>
                </div>
                { mobile_menu }
            </nav>
        </header>
    }
}
