use crate::crawler::ScrapedOrganization;
use serde::{Deserialize, Serialize};

/// One organization as persisted in the dataset
///
/// Fields serialize in declaration order, which is the persisted format:
/// `Category`, `Name`, `Description`, `Address`, `Postcode`, `URL`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrganizationRecord {
    pub category: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub postcode: String,
    #[serde(rename = "URL")]
    pub url: String,
}

impl From<ScrapedOrganization> for OrganizationRecord {
    /// Absent optional fields become empty strings
    fn from(org: ScrapedOrganization) -> Self {
        Self {
            category: org.category,
            name: org.name,
            description: org.description.unwrap_or_default(),
            address: org.address.unwrap_or_default(),
            postcode: org.postcode.unwrap_or_default(),
            url: org.url,
        }
    }
}
