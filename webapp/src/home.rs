use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;

#[component]
pub fn Landing() -> Element {
    rsx! {
        div { class: "container", style: "text-align: center; padding-top: 96px;",
            h1 { style: "font-size: 2.5rem; color: #0089a5;", "Visit an orphanage" }
            p { style: "margin-top: 16px; font-size: 1.125rem;",
                "Bring happiness to many children's days near you."
            }
            div { style: "margin-top: 40px;",
                Link { to: Route::OrphanagesMap {}, class: "btn btn-primary", "See the map" }
            }
        }
    }
}
