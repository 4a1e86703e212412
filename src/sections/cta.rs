use yew::prelude::*;

use crate::components::icon::Icon;
use crate::content::{CTA_PERKS, DOCS_ICON, PERK_ICON, PROCEED_ICON};
use crate::reveal::{use_reveal, Entrance};

#[function_component(CtaSection)]
pub fn cta_section() -> Html {
    let (node, reveal) = use_reveal();
    let card_style = Entrance::FadeUp { offset_px: 30.0 }.style(reveal, 0.6, 0.0);

    html! {
        <section class="section cta" ref={node}>
            <style>
                {r#"
                    .cta {
                        position: relative;
                        overflow: hidden;
                    }
                    .cta-backdrop {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to right, rgba(8, 145, 178, 0.2), rgba(147, 51, 234, 0.2));
                    }
                    .cta-veil {
                        position: absolute;
                        inset: 0;
                        background: rgba(2, 6, 23, 0.5);
                        backdrop-filter: blur(4px);
                    }
                    .cta-card {
                        position: relative;
                        z-index: 10;
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 4rem 2rem;
                        border-radius: 1.5rem;
                        text-align: center;
                        border: 1px solid rgba(6, 182, 212, 0.2);
                    }
                    .cta-card h2 {
                        font-size: clamp(1.875rem, 4vw, 3rem);
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }
                    .cta-card > p {
                        color: #94a3b8;
                        font-size: 1.125rem;
                        max-width: 42rem;
                        margin: 0 auto 2rem;
                    }
                    .cta-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                    }
                    .cta-perks {
                        margin-top: 2rem;
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1.5rem;
                        font-size: 0.875rem;
                        color: #64748b;
                    }
                    .cta-perk {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                "#}
            </style>
            <div class="cta-backdrop"></div>
            <div class="cta-veil"></div>
            <div class="container">
                <div class="cta-card glass" style={card_style}>
                    <h2>
                        {"Готовы начать? "}
                        <span class="gradient-text">{"Присоединяйтесь"}</span>
                        {" к революции DeFi"}
                    </h2>
                    <p>
                        {"Присоединяйтесь к 150,000+ пользователей, которые уже зарабатывают с Nexus. Получите бонус 50 NEX токенов при первом депозите."}
                    </p>
                    <div class="cta-actions">
                        <button class="btn-primary btn-icon">
                            <span>{"Начать сейчас"}</span>
                            <Icon name={PROCEED_ICON} size={20} />
                        </button>
                        <button class="btn-secondary btn-icon">
                            <Icon name={DOCS_ICON} size={20} />
                            <span>{"Документация"}</span>
                        </button>
                    </div>
                    <div class="cta-perks">
                        { for CTA_PERKS.iter().map(|perk| html! {
                            <div key={*perk} class="cta-perk">
                                <Icon name={PERK_ICON} size={16} class="text-cyan" />
                                <span>{*perk}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
