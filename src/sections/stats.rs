use yew::prelude::*;

use crate::components::icon::Icon;
use crate::content::STATS;
use crate::reveal::{stagger, use_reveal, Entrance};

#[function_component(Stats)]
pub fn stats() -> Html {
    let (node, reveal) = use_reveal();
    let backdrop_style = Entrance::Fade.style(reveal, 0.6, 0.0);

    html! {
        <section id="stats" class="section stats" ref={node}>
            <style>
                {r#"
                    .stats {
                        position: relative;
                        overflow: hidden;
                    }
                    .stats-backdrop {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom, rgba(8, 51, 68, 0.2), rgba(59, 7, 100, 0.2));
                    }
                    .stats-grid {
                        position: relative;
                        z-index: 10;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
                        gap: 1.5rem;
                    }
                    .stat-card {
                        padding: 2rem;
                        border-radius: 1rem;
                        text-align: center;
                    }
                    .stat-icon {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 0.75rem;
                        background: rgba(6, 182, 212, 0.1);
                        color: #22d3ee;
                        margin-bottom: 1rem;
                        transition: transform 0.2s;
                    }
                    .stat-card:hover .stat-icon {
                        transform: scale(1.1);
                    }
                    .stat-value {
                        font-size: 2.25rem;
                        font-weight: 900;
                        margin-bottom: 0.5rem;
                    }
                    .stat-label {
                        color: #94a3b8;
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                "#}
            </style>
            <div class="stats-backdrop" style={backdrop_style}></div>
            <div class="container">
                <div class="stats-grid">
                    { for STATS.iter().enumerate().map(|(index, stat)| {
                        let style = Entrance::ScaleIn { from: 0.9 }.style(reveal, 0.5, stagger(index, 0.1));
                        html! {
                            <div key={stat.label} class="stat-card glass" style={style}>
                                <div class="stat-icon">
                                    <Icon name={stat.icon} size={24} />
                                </div>
                                <div class="stat-value gradient-text">{stat.value}</div>
                                <div class="stat-label">{stat.label}</div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
