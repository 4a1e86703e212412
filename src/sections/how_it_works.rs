use yew::prelude::*;

use crate::components::icon::Icon;
use crate::content::STEPS;
use crate::reveal::{stagger, use_reveal, Entrance};

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    let (node, reveal) = use_reveal();
    let header_style = Entrance::FadeUp { offset_px: 20.0 }.style(reveal, 0.6, 0.0);
    let last = STEPS.len().saturating_sub(1);

    let steps = STEPS.iter().enumerate().map(|(index, step)| {
        let style = Entrance::FadeUp { offset_px: 30.0 }.style(reveal, 0.5, stagger(index, 0.15));
        html! {
            <div key={step.number} class="step" style={style}>
                <div class="step-card glass">
                    <span class="step-number">{step.number}</span>
                    <div class="step-icon">
                        <Icon name={step.icon} size={32} />
                    </div>
                    <h3>{step.title}</h3>
                    <p>{step.description}</p>
                </div>
                if index < last {
                    <div class="step-connector"></div>
                }
            </div>
        }
    });

    html! {
        <section id="about" class="section" ref={node}>
            <style>
                {r#"
                    .steps {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                        gap: 2rem;
                    }
                    .step {
                        position: relative;
                    }
                    .step-card {
                        position: relative;
                        overflow: hidden;
                        height: 100%;
                        padding: 2rem;
                        border-radius: 1rem;
                    }
                    .step-number {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        font-size: 3.75rem;
                        font-weight: 900;
                        opacity: 0.1;
                        transition: opacity 0.2s;
                    }
                    .step-card:hover .step-number {
                        opacity: 0.2;
                    }
                    .step-icon {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 1.5rem;
                        color: #fff;
                        background: linear-gradient(135deg, #06b6d4, #2563eb);
                        box-shadow: 0 10px 15px rgba(6, 182, 212, 0.2);
                    }
                    .step-card h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin-bottom: 0.75rem;
                    }
                    .step-card p {
                        color: #94a3b8;
                        line-height: 1.6;
                    }
                    .step-connector {
                        position: absolute;
                        top: 50%;
                        right: -1rem;
                        width: 2rem;
                        height: 1px;
                        background: linear-gradient(to right, rgba(6, 182, 212, 0.5), transparent);
                    }
                    @media (max-width: 768px) {
                        .step-connector { display: none; }
                    }
                "#}
            </style>
            <div class="container">
                <div class="section-header" style={header_style}>
                    <h2>{"Как это "}<span class="gradient-text">{"работает"}</span></h2>
                    <p>{"Начните использовать протокол за три простых шага"}</p>
                </div>
                <div class="steps">
                    { for steps }
                </div>
            </div>
        </section>
    }
}
