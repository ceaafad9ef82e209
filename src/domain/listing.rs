// src/domain/listing.rs

use crate::errors::ServerError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A listing as typed into the form. Price stays display-formatted ("$3,950,000").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingInput {
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "propertyType", alias = "type")]
    pub property_type: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub description: String,
}

impl ListingInput {
    /// Builds a listing from decoded form fields; missing fields are empty.
    pub fn from_form(fields: &HashMap<String, String>) -> Self {
        let field = |key: &str| fields.get(key).map(|v| v.trim().to_string()).unwrap_or_default();

        Self {
            name: field("name"),
            property_type: field("property_type"),
            location: field("location"),
            price: field("price"),
            // Keep the description's inner formatting, only trim the ends.
            description: field("description"),
        }
    }

    /// The only rule for submission: a description to analyze.
    pub fn validate(&self) -> Result<(), ServerError> {
        if self.description.trim().is_empty() {
            return Err(ServerError::BadRequest(
                "Property description is required".into(),
            ));
        }
        Ok(())
    }

    pub fn display_name(&self) -> &str {
        or_placeholder(&self.name, "Unnamed Property")
    }

    pub fn display_type(&self) -> &str {
        or_placeholder(&self.property_type, "N/A")
    }

    pub fn display_location(&self) -> &str {
        or_placeholder(&self.location, "N/A")
    }

    pub fn display_price(&self) -> &str {
        or_placeholder(&self.price, "N/A")
    }

    /// Lowercase, dash-separated name for download filenames.
    pub fn slug(&self) -> String {
        let slug = self
            .name
            .to_lowercase()
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("-");

        if slug.is_empty() {
            "listing".to_string()
        } else {
            slug
        }
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}
