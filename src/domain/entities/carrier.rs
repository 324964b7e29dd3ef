//! Carrier entity describing a shipping company.

/// A shipping carrier that trackers can be attached to.
///
/// Carriers are reference data: they are built once by a repository or a
/// caller and never change afterwards, so every field is read through an
/// accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carrier {
    id: String,
    no: u32,
    name: String,
    display_name: String,
    is_crawlable: bool,
    is_popup_enabled: bool,
    popup_url: String,
}

impl Carrier {
    /// Creates a new Carrier instance.
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

    /// Ordinal used to sort carriers in pickers.
    pub fn no(&self) -> u32 {
        self.no
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Whether delivery status can be fetched by scraping the carrier site.
    pub fn is_crawlable(&self) -> bool {
        self.is_crawlable
    }

    /// Whether the carrier's own tracking page should open in a popup instead.
    pub fn is_popup_enabled(&self) -> bool {
        self.is_popup_enabled
    }

    pub fn popup_url(&self) -> &str {
        &self.popup_url
    }
}
