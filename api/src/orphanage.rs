use gloo_net::http::Request;

use serde::{Deserialize, Serialize};

// structs and types

// the core orphanage record, owned by the backend and fetched fresh
// whenever a detail view mounts
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Orphanage {
    pub name: String,
    pub about: String,
    pub whatsapp: String,
    pub instructions: String,
    pub latitude: f64,
    pub longitude: f64,
    pub opening_hours: String,
    pub open_on_weekends: bool,
    // display order is meaningful, so this stays a Vec
    pub images: Vec<OrphanageImage>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrphanageImage {
    pub id: String,
    pub url: String,
}

// the subset of the record returned by the index endpoint, enough to
// place a marker and link to the detail view
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrphanageSummary {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

// messages

// fetch the full record for a particular orphanage
pub async fn get_orphanage(id: &str) -> anyhow::Result<Orphanage> {
    let resp = Request::get(format!("/api/orphanages/{id}").as_str())
        .send()
        .await?;

    if resp.ok() {
        Ok(resp.json().await?)
    } else {
        Err(anyhow::Error::msg(resp.text().await?))
    }
}

// fetch the summaries for every registered orphanage
pub async fn list_orphanages() -> anyhow::Result<Vec<OrphanageSummary>> {
    let resp = Request::get("/api/orphanages").send().await?;

    if resp.ok() {
        Ok(resp.json().await?)
    } else {
        Err(anyhow::Error::msg(resp.text().await?))
    }
}

// register a new orphanage
//
// note that photo upload happens through a separate backend surface,
// so this request carries only the descriptive fields
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateOrphanageReq {
    pub name: String,
    pub about: String,
    pub whatsapp: String,
    pub instructions: String,
    pub latitude: f64,
    pub longitude: f64,
    pub opening_hours: String,
    pub open_on_weekends: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateOrphanageResp {
    pub id: String,
}

pub async fn create_orphanage(req: &CreateOrphanageReq) -> anyhow::Result<CreateOrphanageResp> {
    let resp = Request::post("/api/orphanages").json(req)?.send().await?;

    if resp.ok() {
        Ok(resp.json().await?)
    } else {
        Err(anyhow::Error::msg(resp.text().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orphanage_from_backend_payload() {
        let payload = r#"{
            "name": "Lar das Meninas",
            "about": "A home for girls aged 6 to 14.",
            "whatsapp": "5511999999999",
            "instructions": "Ring the bell at the side gate.",
            "latitude": -23.5,
            "longitude": -46.6,
            "opening_hours": "Monday to Friday, 8am to 6pm",
            "open_on_weekends": true,
            "images": [
                { "id": "7", "url": "https://img.example/7.jpg" },
                { "id": "3", "url": "https://img.example/3.jpg" }
            ]
        }"#;

        let orphanage: Orphanage = serde_json::from_str(payload).unwrap();

        assert_eq!(orphanage.name, "Lar das Meninas");
        assert_eq!(orphanage.whatsapp, "5511999999999");
        assert_eq!(orphanage.latitude, -23.5);
        assert_eq!(orphanage.longitude, -46.6);
        assert!(orphanage.open_on_weekends);

        // the backend sends images in display order and we keep it
        assert_eq!(orphanage.images.len(), 2);
        assert_eq!(orphanage.images[0].id, "7");
        assert_eq!(orphanage.images[1].url, "https://img.example/3.jpg");
    }

    #[test]
    fn summary_list_from_backend_payload() {
        let payload = r#"[
            { "id": "1", "name": "Lar das Meninas", "latitude": -23.5, "longitude": -46.6 }
        ]"#;

        let summaries: Vec<OrphanageSummary> = serde_json::from_str(payload).unwrap();

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].id, "1");
        assert_eq!(summaries[0].name, "Lar das Meninas");
    }

    #[test]
    fn create_request_wire_shape() {
        let req = CreateOrphanageReq {
            name: String::from("Casa Esperança"),
            about: String::from(""),
            whatsapp: String::from("5511888888888"),
            instructions: String::from(""),
            latitude: -22.9,
            longitude: -43.2,
            opening_hours: String::from("9am to 5pm"),
            open_on_weekends: false,
        };

        let value = serde_json::to_value(&req).unwrap();

        assert_eq!(value["name"], "Casa Esperança");
        assert_eq!(value["opening_hours"], "9am to 5pm");
        assert_eq!(value["open_on_weekends"], false);
    }
}
