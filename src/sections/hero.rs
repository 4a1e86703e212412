use yew::prelude::*;

use crate::components::icon::Icon;
use crate::content::{HERO_BADGES, HERO_TAG_ICON, PROCEED_ICON};

fn enter_delay(delay_s: f64) -> String {
    format!("animation-delay: {}s;", delay_s)
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        padding-top: 5rem;
                    }
                    .hero-glow {
                        position: absolute;
                        width: 24rem;
                        height: 24rem;
                        border-radius: 9999px;
                        filter: blur(128px);
                        animation: pulse-slow 4s ease-in-out infinite;
                    }
                    .hero-glow.cyan { top: 25%; left: 25%; background: rgba(6, 182, 212, 0.2); }
                    .hero-glow.purple { bottom: 25%; right: 25%; background: rgba(168, 85, 247, 0.2); animation-delay: 1s; }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .hero-enter {
                        opacity: 0;
                        animation: hero-enter 0.6s ease-out forwards;
                    }
                    .hero-fade {
                        opacity: 0;
                        animation: hero-fade 0.6s ease-out forwards;
                    }
                    .hero-tag {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        color: #22d3ee;
                        font-size: 0.875rem;
                        font-weight: 500;
                        margin-bottom: 1.5rem;
                    }
                    .hero h1 {
                        font-size: clamp(3rem, 8vw, 6rem);
                        font-weight: 900;
                        letter-spacing: -0.05em;
                        margin-bottom: 1.5rem;
                    }
                    .hero-lead {
                        font-size: 1.25rem;
                        color: #94a3b8;
                        max-width: 42rem;
                        margin: 0 auto 2.5rem;
                        line-height: 1.6;
                    }
                    .hero-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                    }
                    .hero-badges {
                        margin-top: 4rem;
                        display: flex;
                        justify-content: center;
                        gap: 2rem;
                        color: #64748b;
                        font-size: 0.875rem;
                    }
                    .hero-badge {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .scroll-indicator {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                    }
                    .scroll-mouse {
                        width: 1.5rem;
                        height: 2.5rem;
                        border-radius: 9999px;
                        border: 2px solid rgba(255, 255, 255, 0.2);
                        display: flex;
                        justify-content: center;
                        padding: 0.5rem;
                    }
                    .scroll-dot {
                        width: 0.25rem;
                        height: 0.5rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.6);
                        animation: scroll-bounce 1.5s ease-in-out infinite;
                    }
                    @keyframes hero-enter {
                        from { opacity: 0; transform: translateY(30px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes hero-fade {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    @keyframes scroll-bounce {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(12px); }
                    }
                    @keyframes pulse-slow {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.5; }
                    }
                "#}
            </style>
            <div class="hero-glow cyan"></div>
            <div class="hero-glow purple"></div>

            <div class="container">
                <div class="hero-content">
                    <div class="hero-enter" style={enter_delay(0.0)}>
                        <span class="hero-tag glass">
                            <Icon name={HERO_TAG_ICON} size={16} />
                            <span>{"Новое поколение DeFi"}</span>
                        </span>
                    </div>
                    <h1 class="hero-enter" style={enter_delay(0.1)}>
                        <span class="gradient-text">{"Децентрализованные"}</span>
                        <br />
                        <span>{"финансы 2.0"}</span>
                    </h1>
                    <p class="hero-lead hero-enter" style={enter_delay(0.2)}>
                        {"Nexus — это инновационный протокол ликвидности с мгновенными свопами, минимальными комиссиями и максимальной безопасностью ваших активов"}
                    </p>
                    <div class="hero-actions hero-enter" style={enter_delay(0.3)}>
                        <button class="btn-primary btn-icon">
                            <span>{"Начать использовать"}</span>
                            <Icon name={PROCEED_ICON} size={20} />
                        </button>
                        <button class="btn-secondary">{"Узнать больше"}</button>
                    </div>
                    <div class="hero-badges hero-fade" style={enter_delay(0.5)}>
                        { for HERO_BADGES.iter().map(|badge| html! {
                            <div class="hero-badge" key={badge.label}>
                                <Icon name={badge.icon} size={16} class="text-cyan" />
                                <span>{badge.label}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>

            <div class="scroll-indicator hero-fade" style={enter_delay(1.0)}>
                <div class="scroll-mouse">
                    <div class="scroll-dot"></div>
                </div>
            </div>
        </section>
    }
}
