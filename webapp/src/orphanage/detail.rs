use dioxus::prelude::*;

use crate::{
    common::{
        config::MapConfig,
        maps::{directions_link, static_map_url, whatsapp_link},
    },
    orphanage::photos::PhotoViewer,
};
use api::orphanage::*;

/// Class suffix and label for the weekend-availability block; exactly one
/// of the two variants is ever rendered.
pub fn weekend_variant(open_on_weekends: bool) -> (&'static str, &'static str) {
    if open_on_weekends {
        ("open-on-weekends", "Open on weekends")
    } else {
        ("open-on-weekends not-open", "Closed on weekends")
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct OrphanageDetailProps {
    // This is a String because we get it from the Router
    id: String,
}

#[component]
pub fn OrphanageDetail(props: OrphanageDetailProps) -> Element {
    let config = use_context::<MapConfig>();

    // rerunning the resource when the route parameter changes drops the
    // in-flight future, so a stale response can never land on top of a
    // newer record
    let id = use_memo(use_reactive(&props.id, |id| id));
    let mut orphanage_future: Resource<anyhow::Result<Orphanage>> =
        use_resource(move || async move {
            let id = id();
            get_orphanage(&id).await
        });

    match &*orphanage_future.read() {
        Some(Ok(orphanage)) => {
            let orphanage = orphanage.clone();
            let (weekend_class, weekend_label) = weekend_variant(orphanage.open_on_weekends);

            rsx! {
                div { class: "container",
                    div { class: "orphanage-detail",
                        PhotoViewer {
                            key: "{id()}",
                            images: orphanage.images.clone(),
                            alt: orphanage.name.clone(),
                        }

                        div { class: "orphanage-detail-content",
                            h1 { "{orphanage.name}" }
                            p { "{orphanage.about}" }

                            div { class: "map-container",
                                img {
                                    class: "static-map",
                                    src: static_map_url(&config, orphanage.latitude, orphanage.longitude),
                                    alt: "Map showing the location of {orphanage.name}",
                                }
                                footer {
                                    a {
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        href: directions_link(orphanage.latitude, orphanage.longitude),
                                        "View directions on Google Maps"
                                    }
                                }
                            }

                            hr { style: "margin: 40px 0; border: 1px solid #d3e2e5;" }

                            h2 { "Visiting instructions" }
                            p { "{orphanage.instructions}" }

                            div { class: "open-details",
                                div { class: "hour", "{orphanage.opening_hours}" }
                                div { class: "{weekend_class}", "{weekend_label}" }
                            }

                            a {
                                class: "contact-button",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                href: whatsapp_link(&orphanage.whatsapp),
                                "Contact via WhatsApp"
                            }
                        }
                    }
                }
            }
        }
        Some(Err(err)) => rsx! {
            div { class: "container error-state",
                h1 { "Error Loading Orphanage" }
                p { "There was an error loading the orphanage: {err}" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| orphanage_future.restart(),
                    "Try again"
                }
            }
        },
        None => rsx! {
            OrphanageDetailSkeleton {}
        },
    }
}

#[component]
fn OrphanageDetailSkeleton() -> Element {
    rsx! {
        div { class: "container",
            div {
                class: "skeleton",
                style: "height: 300px; margin-bottom: 16px;",
            }
            div {
                class: "skeleton",
                style: "height: 40px; width: 200px; margin-bottom: 16px;",
            }
            div {
                class: "skeleton",
                style: "height: 24px; width: 80%; margin-bottom: 8px;",
            }
            div {
                class: "skeleton",
                style: "height: 280px; margin-bottom: 16px;",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekend_variant_picks_exactly_one_branch() {
        let (open_class, open_label) = weekend_variant(true);
        let (closed_class, closed_label) = weekend_variant(false);

        assert_eq!(open_label, "Open on weekends");
        assert!(!open_class.contains("not-open"));

        assert_eq!(closed_label, "Closed on weekends");
        assert!(closed_class.contains("not-open"));
    }
}
