use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::info;

use crate::Route;
use api::orphanage::*;

#[component]
pub fn CreateOrphanage() -> Element {
    let nav = navigator();
    let mut status_signal = use_signal(String::new);

    rsx! {
        div { class: "container",
            h1 { "Register an orphanage" }

            // photo upload goes through a separate backend surface, so the
            // form only collects the descriptive fields
            form {
                class: "orphanage-form",
                style: "margin-top: 24px;",
                onsubmit: move |event| async move {
                    let values = event.values();
                    let field = |name: &str| {
                        values.get(name).map(|v| v.as_value()).unwrap_or_default()
                    };
                    let latitude = match field("latitude").parse::<f64>() {
                        Ok(v) => v,
                        Err(_) => {
                            status_signal.set(String::from("Latitude must be a number"));
                            return;
                        }
                    };
                    let longitude = match field("longitude").parse::<f64>() {
                        Ok(v) => v,
                        Err(_) => {
                            status_signal.set(String::from("Longitude must be a number"));
                            return;
                        }
                    };
                    let req = CreateOrphanageReq {
                        name: field("name"),
                        about: field("about"),
                        whatsapp: field("whatsapp"),
                        instructions: field("instructions"),
                        latitude,
                        longitude,
                        opening_hours: field("opening_hours"),
                        open_on_weekends: matches!(
                            field("open_on_weekends").as_str(),
                            "true" | "on"
                        ),
                    };
                    match create_orphanage(&req).await {
                        Ok(resp) => {
                            info!("registered orphanage {}", resp.id);
                            nav.push(Route::OrphanageDetail { id: resp.id });
                        }
                        Err(err) => {
                            status_signal.set(format!("Error registering orphanage: {err}"));
                        }
                    }
                },

                label { "Name" }
                input { name: "name", r#type: "text" }

                label { "About" }
                textarea { name: "about", rows: "5" }

                label { "WhatsApp number" }
                input { name: "whatsapp", r#type: "text" }

                label { "Latitude" }
                input { name: "latitude", r#type: "text" }

                label { "Longitude" }
                input { name: "longitude", r#type: "text" }

                label { "Visiting instructions" }
                textarea { name: "instructions", rows: "5" }

                label { "Opening hours" }
                input { name: "opening_hours", r#type: "text" }

                div {
                    input {
                        id: "open-on-weekends-checkbox",
                        name: "open_on_weekends",
                        r#type: "checkbox",
                        value: "true",
                    }
                    label {
                        r#for: "open-on-weekends-checkbox",
                        style: "margin-left: 8px;",
                        "Open on weekends"
                    }
                }

                input { class: "btn btn-primary", r#type: "submit", value: "Register" }

                if !status_signal().is_empty() {
                    span { "{status_signal()}" }
                }
            }
        }
    }
}
