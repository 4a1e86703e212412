use log::info;
use yew::prelude::*;

mod config;
mod content;
mod dom;
mod icons;
mod reveal;
mod components {
    pub mod icon;
    pub mod navigation;
}
mod sections {
    pub mod cta;
    pub mod features;
    pub mod footer;
    pub mod hero;
    pub mod how_it_works;
    pub mod stats;
    pub mod team;
}

use components::navigation::Navigation;
use sections::{
    cta::CtaSection,
    features::Features,
    footer::Footer,
    hero::Hero,
    how_it_works::HowItWorks,
    stats::Stats,
    team::Team,
};

#[function_component]
fn App() -> Html {
    html! {
        <div class="page">
            <Navigation />
            <Hero />
            <Features />
            <Stats />
            <HowItWorks />
            <Team />
            <CtaSection />
            <Footer />
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
