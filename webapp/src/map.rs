use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{
    Route,
    common::{config::MapConfig, maps::static_map_url},
};
use api::orphanage::*;

#[component]
pub fn OrphanagesMap() -> Element {
    let mut orphanages_future: Resource<anyhow::Result<Vec<OrphanageSummary>>> =
        use_resource(move || async move { list_orphanages().await });

    match &*orphanages_future.read() {
        Some(Ok(orphanages)) => rsx! {
            div { class: "container",
                h1 { "Orphanages" }
                p { style: "color: #8fa7b3;", "{orphanages.len()} found" }

                if orphanages.is_empty() {
                    div { class: "empty-state",
                        p { "No orphanages registered yet." }
                        Link { to: Route::CreateOrphanage {}, "Register the first one" }
                    }
                } else {
                    div { class: "orphanage-grid",
                        for orphanage in orphanages.iter() {
                            OrphanageCard { key: "{orphanage.id}", summary: orphanage.clone() }
                        }
                    }
                }
            }
        },
        Some(Err(err)) => rsx! {
            div { class: "container error-state",
                h1 { "Error Loading Orphanages" }
                p { "There was an error loading the orphanage list: {err}" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| orphanages_future.restart(),
                    "Try again"
                }
            }
        },
        None => rsx! {
            div { class: "container",
                div {
                    class: "skeleton",
                    style: "height: 40px; width: 200px; margin-bottom: 16px;",
                }
                div { class: "orphanage-grid",
                    for _ in 0..6 {
                        div { class: "skeleton", style: "height: 220px;" }
                    }
                }
            }
        },
    }
}

#[derive(Clone, PartialEq, Props)]
struct OrphanageCardProps {
    summary: OrphanageSummary,
}

#[component]
fn OrphanageCard(props: OrphanageCardProps) -> Element {
    let config = use_context::<MapConfig>();
    let summary = props.summary;

    rsx! {
        div { class: "orphanage-card",
            Link {
                to: Route::OrphanageDetail {
                    id: summary.id.clone(),
                },
                img {
                    src: static_map_url(&config, summary.latitude, summary.longitude),
                    alt: "{summary.name}",
                    loading: "lazy",
                }
                div { class: "card-info",
                    p { style: "font-weight: 600; color: #4d6f80;", "{summary.name}" }
                }
            }
        }
    }
}
