use yew::prelude::*;

use crate::components::icon::Icon;
use crate::content::FEATURES;
use crate::reveal::{stagger, use_reveal, Entrance};

#[function_component(Features)]
pub fn features() -> Html {
    let (node, reveal) = use_reveal();
    let header_style = Entrance::FadeUp { offset_px: 20.0 }.style(reveal, 0.6, 0.0);

    let cards = FEATURES.iter().enumerate().map(|(index, feature)| {
        let style = Entrance::FadeUp { offset_px: 30.0 }.style(reveal, 0.5, stagger(index, 0.1));
        html! {
            <div key={feature.title} class="feature-card glass glass-hover" style={style}>
                <div class={classes!("feature-icon", feature.accent)}>
                    <Icon name={feature.icon} size={28} />
                </div>
                <h3>{feature.title}</h3>
                <p>{feature.description}</p>
                <div class="feature-sheen"></div>
            </div>
        }
    });

    html! {
        <section id="features" class="section" ref={node}>
            <style>
                {r#"
                    .feature-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
                        gap: 1.5rem;
                    }
                    .feature-card {
                        position: relative;
                        overflow: hidden;
                        padding: 2rem;
                        border-radius: 1rem;
                    }
                    .feature-icon {
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 0.75rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 1.5rem;
                        color: #fff;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
                    }
                    .feature-card h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        margin-bottom: 0.75rem;
                        transition: color 0.2s;
                    }
                    .feature-card:hover h3 {
                        color: #22d3ee;
                    }
                    .feature-card p {
                        color: #94a3b8;
                        line-height: 1.6;
                    }
                    .feature-sheen {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        background: linear-gradient(135deg, rgba(6, 182, 212, 0.05), rgba(168, 85, 247, 0.05));
                        opacity: 0;
                        transition: opacity 0.3s;
                    }
                    .feature-card:hover .feature-sheen {
                        opacity: 1;
                    }
                "#}
            </style>
            <div class="container">
                <div class="section-header" style={header_style}>
                    <h2>{"Почему выбирают "}<span class="gradient-text">{"Nexus"}</span></h2>
                    <p>{"Инновационные решения для максимальной эффективности ваших криптоактивов"}</p>
                </div>
                <div class="feature-grid">
                    { for cards }
                </div>
            </div>
        </section>
    }
}
