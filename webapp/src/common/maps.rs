use crate::common::config::MapConfig;

/// Static map image centered on the given coordinates with a single
/// marker, sized for the 280px-tall detail view container.
///
/// The provider's static endpoint takes longitude before latitude.
pub fn static_map_url(config: &MapConfig, latitude: f64, longitude: f64) -> String {
    format!(
        "https://api.mapbox.com/styles/v1/mapbox/light-v10/static/pin-l+15c3d6({longitude},{latitude})/{longitude},{latitude},15,0/600x280@2x?access_token={}",
        config.mapbox_token
    )
}

/// External navigation deep link, pre-filled with the record's coordinates.
pub fn directions_link(latitude: f64, longitude: f64) -> String {
    format!("https://www.google.com/maps/dir/?api=1&destination={latitude},{longitude}")
}

/// Outbound contact link; the number is expected to already be in the
/// digits-only format the messaging service requires.
pub fn whatsapp_link(whatsapp: &str) -> String {
    format!("https://wa.me/{whatsapp}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_link_contains_literal_coordinates() {
        let link = directions_link(-23.5, -46.6);

        assert!(link.contains("-23.5,-46.6"));
        assert!(link.starts_with("https://www.google.com/maps/dir/"));
    }

    #[test]
    fn whatsapp_link_is_base_plus_number() {
        assert_eq!(
            whatsapp_link("5511999999999"),
            "https://wa.me/5511999999999"
        );
    }

    #[test]
    fn static_map_url_carries_token_and_coordinates() {
        let config = MapConfig {
            mapbox_token: String::from("pk.test"),
        };

        let url = static_map_url(&config, -23.5, -46.6);

        assert!(url.contains("access_token=pk.test"));
        // marker and center both use lon,lat order
        assert!(url.contains("(-46.6,-23.5)"));
        assert!(url.contains("/-46.6,-23.5,15,0/"));
    }
}
