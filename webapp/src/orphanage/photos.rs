use dioxus::prelude::*;

use api::orphanage::OrphanageImage;

/// The index actually rendered at full size.
///
/// The active index is clamped so a record with fewer photos than a
/// previously selected index can never cause an out-of-bounds render.
pub fn display_index(active: usize, len: usize) -> usize {
    active.min(len.saturating_sub(1))
}

#[derive(Clone, PartialEq, Props)]
pub struct PhotoViewerProps {
    images: Vec<OrphanageImage>,
    alt: String,
}

// the caller keys this component on the orphanage id, so swapping in a
// new record remounts the viewer and the active index starts back at 0
#[component]
pub fn PhotoViewer(props: PhotoViewerProps) -> Element {
    let mut active_signal = use_signal(|| 0usize);

    if props.images.is_empty() {
        return rsx! {
            div { class: "no-photos", "No photos have been added yet." }
        };
    }

    let shown = display_index(active_signal(), props.images.len());

    rsx! {
        img {
            class: "photo-full",
            src: "{props.images[shown].url}",
            alt: "{props.alt}",
        }

        div { class: "photo-thumbnails",
            for (index , image) in props.images.iter().enumerate() {
                button {
                    key: "{image.id}",
                    class: if index == shown { "active" } else { "" },
                    r#type: "button",
                    onclick: move |_| active_signal.set(index),
                    img { src: "{image.url}", alt: "" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_index_starts_at_zero() {
        assert_eq!(display_index(0, 4), 0);
    }

    #[test]
    fn display_index_passes_valid_selection_through() {
        assert_eq!(display_index(2, 4), 2);
        assert_eq!(display_index(3, 4), 3);
    }

    #[test]
    fn display_index_clamps_to_last_photo() {
        // a stale selection from a larger record clamps instead of overflowing
        assert_eq!(display_index(5, 2), 1);
    }

    #[test]
    fn display_index_single_photo_is_always_zero() {
        assert_eq!(display_index(0, 1), 0);
        assert_eq!(display_index(7, 1), 0);
    }

    #[test]
    fn display_index_empty_does_not_underflow() {
        assert_eq!(display_index(0, 0), 0);
    }
}
