//! Transfer object for carriers.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Carrier;

/// Read-only snapshot of a [`Carrier`] for crossing a serialization boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierDto {
    id: String,
    no: u32,
    name: String,
    display_name: String,
    is_crawlable: bool,
    is_popup_enabled: bool,
    #[serde(rename = "popupURL")]
    popup_url: String,
}

impl CarrierDto {
    pub fn new(
        id: impl Into<String>,
        no: u32,
        name: impl Into<String>,
        display_name: impl Into<String>,
        is_crawlable: bool,
        is_popup_enabled: bool,
        popup_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            no,
            name: name.into(),
            display_name: display_name.into(),
            is_crawlable,
            is_popup_enabled,
            popup_url: popup_url.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn no(&self) -> u32 {
        self.no
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn is_crawlable(&self) -> bool {
        self.is_crawlable
    }

    pub fn is_popup_enabled(&self) -> bool {
        self.is_popup_enabled
    }

    pub fn popup_url(&self) -> &str {
        &self.popup_url
    }
}

impl From<Carrier> for CarrierDto {
    fn from(carrier: Carrier) -> Self {
        Self::new(
            carrier.id(),
            carrier.no(),
            carrier.name(),
            carrier.display_name(),
            carrier.is_crawlable(),
            carrier.is_popup_enabled(),
            carrier.popup_url(),
        )
    }
}

impl From<CarrierDto> for Carrier {
    fn from(dto: CarrierDto) -> Self {
        Carrier::new(
            dto.id,
            dto.no,
            dto.name,
            dto.display_name,
            dto.is_crawlable,
            dto.is_popup_enabled,
            dto.popup_url,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_entity_copies_every_field() {
        let carrier = Carrier::new("1", 1, "A", "A-1", true, false, "https://a.example");

        let dto = CarrierDto::from(carrier.clone());

        assert_eq!(dto.id(), carrier.id());
        assert_eq!(dto.no(), carrier.no());
        assert_eq!(dto.name(), carrier.name());
        assert_eq!(dto.display_name(), carrier.display_name());
        assert_eq!(dto.is_crawlable(), carrier.is_crawlable());
        assert_eq!(dto.is_popup_enabled(), carrier.is_popup_enabled());
        assert_eq!(dto.popup_url(), carrier.popup_url());
    }

    #[test]
    fn test_json_field_names() {
        let dto = CarrierDto::new("1", 1, "A", "A-1", true, false, "");

        let value = serde_json::to_value(&dto).unwrap();

        assert_eq!(
            value,
            json!({
                "id": "1",
                "no": 1,
                "name": "A",
                "displayName": "A-1",
                "isCrawlable": true,
                "isPopupEnabled": false,
                "popupURL": ""
            })
        );
    }
}
