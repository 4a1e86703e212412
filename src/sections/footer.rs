use yew::prelude::*;

use crate::components::icon::Icon;
use crate::content::{BRAND, BRAND_ICON, FOOTER_COLUMNS, FOOTER_LEGAL, FOOTER_SOCIALS};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        background: #020617;
                        padding: 4rem 0 2rem;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr;
                        gap: 3rem;
                        margin-bottom: 3rem;
                    }
                    .footer-about {
                        color: #94a3b8;
                        max-width: 24rem;
                        margin: 1rem 0 1.5rem;
                    }
                    .footer-socials {
                        display: flex;
                        gap: 1rem;
                    }
                    .footer-column h4 {
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .footer-column ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }
                    .footer-column li {
                        margin-bottom: 0.75rem;
                    }
                    .footer-column a, .footer-legal a {
                        color: #94a3b8;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .footer-column a:hover {
                        color: #22d3ee;
                    }
                    .footer-bottom {
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        padding-top: 2rem;
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1rem;
                        color: #64748b;
                        font-size: 0.875rem;
                    }
                    .footer-legal {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .footer-legal a:hover {
                        color: #fff;
                    }
                    @media (max-width: 768px) {
                        .footer-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <a href="#" class="brand">
                            <div class="brand-mark">
                                <Icon name={BRAND_ICON} size={24} />
                            </div>
                            <span class="brand-name">{BRAND}</span>
                        </a>
                        <p class="footer-about">
                            {"Инновационный DeFi протокол нового поколения. Безопасность, скорость и доходность в одном месте."}
                        </p>
                        <div class="footer-socials">
                            { for FOOTER_SOCIALS.iter().map(|icon| html! {
                                <a key={*icon} href="#" class="social-button">
                                    <Icon name={*icon} size={20} />
                                </a>
                            }) }
                        </div>
                    </div>
                    { for FOOTER_COLUMNS.iter().map(|column| html! {
                        <div key={column.title} class="footer-column">
                            <h4>{column.title}</h4>
                            <ul>
                                { for column.links.iter().map(|label| html! {
                                    <li key={*label}><a href="#">{*label}</a></li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
                <div class="footer-bottom">
                    <p>{"© 2024 Nexus Protocol. Все права защищены."}</p>
                    <div class="footer-legal">
                        { for FOOTER_LEGAL.iter().map(|label| html! {
                            <a key={*label} href="#">{*label}</a>
                        }) }
                    </div>
                </div>
            </div>
        </footer>
    }
}
