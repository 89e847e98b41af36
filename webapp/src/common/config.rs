use tracing::warn;

// configuration injected at startup
//
// the token is baked in at build time since this runs in the browser;
// components get the struct from context and never consult the
// environment themselves
#[derive(Clone, Debug, PartialEq)]
pub struct MapConfig {
    pub mapbox_token: String,
}

impl MapConfig {
    pub fn from_build_env() -> Self {
        let mapbox_token = match option_env!("MAPBOX_TOKEN") {
            Some(token) => String::from(token),
            None => {
                warn!("MAPBOX_TOKEN was not set at build time, maps will not render");
                String::new()
            }
        };

        MapConfig { mapbox_token }
    }
}
