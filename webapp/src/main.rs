#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;
use common::config::MapConfig;

mod components;
use components::navigation::NavBar;

mod home;
use home::Landing;

mod map;
use map::OrphanagesMap;

mod orphanage;
use orphanage::{CreateOrphanage, OrphanageDetail};

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Landing {},
        #[route("/app")]
        OrphanagesMap {},
        #[nest("/orphanages")]
            #[route("/create")]
            CreateOrphanage {},
            #[route("/:id")]
            OrphanageDetail { id: String },
}

#[component]
pub fn App() -> Element {
    // the map provider token is injected here once; everything downstream
    // reads the config from context rather than ambient process state
    use_context_provider(MapConfig::from_build_env);

    rsx! {
        style { "{common::style::APP_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
