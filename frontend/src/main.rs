use std::rc::Rc;

use yew::prelude::*;

mod config;
mod error;
mod animation {
    pub mod counter;
    pub mod entrance;
}
mod components {
    pub mod carousel;
    pub mod header;
    pub mod hero;
    pub mod lazy;
    pub mod newsletter;
    pub mod stats;
    pub mod video;
}
mod pages {
    pub mod landing;
}
mod utils {
    pub mod format;
    pub mod frame;
    pub mod visibility;
}

use config::LandingConfig;
use pages::landing::Landing;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo(|_| config::load(), ());

    html! {
        <ContextProvider<Rc<LandingConfig>> context={config}>
            <Landing />
        </ContextProvider<Rc<LandingConfig>>>
    }
}

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
