use yew::prelude::*;

use crate::components::icon::Icon;
use crate::content::{TEAM, TEAM_SHARED_SOCIAL};
use crate::reveal::{stagger, use_reveal, Entrance};

#[function_component(Team)]
pub fn team() -> Html {
    let (node, reveal) = use_reveal();
    let header_style = Entrance::FadeUp { offset_px: 20.0 }.style(reveal, 0.6, 0.0);

    html! {
        <section id="team" class="section" ref={node}>
            <style>
                {r#"
                    .team-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
                        gap: 1.5rem;
                    }
                    .member-card {
                        border-radius: 1rem;
                        overflow: hidden;
                    }
                    .member-photo {
                        aspect-ratio: 1 / 1;
                        overflow: hidden;
                    }
                    .member-photo img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s;
                    }
                    .member-card:hover .member-photo img {
                        transform: scale(1.1);
                    }
                    .member-info {
                        padding: 1.5rem;
                    }
                    .member-info h3 {
                        font-size: 1.125rem;
                        font-weight: 700;
                        margin-bottom: 0.25rem;
                    }
                    .member-role {
                        color: #22d3ee;
                        font-size: 0.875rem;
                        margin-bottom: 1rem;
                    }
                    .member-socials {
                        display: flex;
                        gap: 0.75rem;
                    }
                "#}
            </style>
            <div class="container">
                <div class="section-header" style={header_style}>
                    <h2>{"Наша "}<span class="gradient-text">{"команда"}</span></h2>
                    <p>{"Эксперты с опытом в блокчейне, финансах и разработке"}</p>
                </div>
                <div class="team-grid">
                    { for TEAM.iter().enumerate().map(|(index, member)| {
                        let style = Entrance::FadeUp { offset_px: 30.0 }.style(reveal, 0.5, stagger(index, 0.1));
                        html! {
                            <div key={member.name} class="member-card glass glass-hover" style={style}>
                                <div class="member-photo">
                                    <img src={member.image} alt={member.name} />
                                </div>
                                <div class="member-info">
                                    <h3>{member.name}</h3>
                                    <p class="member-role">{member.role}</p>
                                    <div class="member-socials">
                                        <button class="social-button small">
                                            <Icon name={member.social} size={16} />
                                        </button>
                                        <button class="social-button small">
                                            <Icon name={TEAM_SHARED_SOCIAL} size={16} />
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
