use crate::domain::ports::AddressView;
use crate::utils::error::{AddressError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Concrete address value object with three ordered line slots. Slots are
/// plain strings; an unset slot is the empty string, never a missing field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub line1: String,
    #[serde(default)]
    pub line2: String,
    #[serde(default)]
    pub line3: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub post_code: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub telephone: String,
}

impl Address {
    /// Builds an address from a raw checkout response payload. Missing or
    /// non-string fields degrade to empty strings; only a payload that is
    /// not a JSON object is rejected.
    pub fn from_response(payload: &Value) -> Result<Self> {
        let obj = payload
            .as_object()
            .ok_or_else(|| AddressError::PayloadError {
                message: "address payload is not a JSON object".to_string(),
            })?;

        let text = |key: &str| -> String {
            obj.get(key)
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        let mut address = Address {
            line1: text("AddressLine1"),
            line2: text("AddressLine2"),
            line3: text("AddressLine3"),
            company: None,
            first_name: String::new(),
            last_name: String::new(),
            city: text("City"),
            state: text("StateOrRegion"),
            post_code: text("PostalCode"),
            country_code: text("CountryCode"),
            telephone: text("Phone"),
        };
        address.set_name(&text("Name"));

        tracing::debug!(
            "parsed address payload for country {:?}",
            address.country_code
        );
        Ok(address)
    }

    /// Parses a payload from its JSON text form. See [`Address::from_response`].
    pub fn from_json(payload: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(payload)?;
        Self::from_response(&value)
    }
}

impl AddressView for Address {
    fn lines(&self) -> Vec<String> {
        vec![self.line1.clone(), self.line2.clone(), self.line3.clone()]
    }

    fn company(&self) -> Option<String> {
        self.company.clone()
    }

    fn first_name(&self) -> String {
        self.first_name.clone()
    }

    fn last_name(&self) -> String {
        self.last_name.clone()
    }

    fn city(&self) -> String {
        self.city.clone()
    }

    fn state(&self) -> String {
        self.state.clone()
    }

    fn post_code(&self) -> String {
        self.post_code.clone()
    }

    fn country_code(&self) -> String {
        self.country_code.clone()
    }

    fn telephone(&self) -> String {
        self.telephone.clone()
    }

    fn line(&self, number: usize) -> Option<String> {
        match number {
            1 => Some(self.line1.clone()),
            2 => Some(self.line2.clone()),
            3 => Some(self.line3.clone()),
            _ => None,
        }
    }

    // The upstream payload carries a single full name; split at the last
    // space so multi-word first names survive.
    fn set_name(&mut self, name: &str) {
        match name.trim().rsplit_once(' ') {
            Some((first, last)) => {
                self.first_name = first.to_string();
                self.last_name = last.to_string();
            }
            None => {
                self.first_name = name.trim().to_string();
                self.last_name = String::new();
            }
        }
    }

    fn set_lines(&mut self, lines: Vec<String>) {
        let mut slots = lines.into_iter();
        self.line1 = slots.next().unwrap_or_default();
        self.line2 = slots.next().unwrap_or_default();
        self.line3 = slots.next().unwrap_or_default();
    }

    fn set_city(&mut self, city: &str) {
        self.city = city.to_string();
    }

    fn set_state(&mut self, state: &str) {
        self.state = state.to_string();
    }

    fn set_post_code(&mut self, post_code: &str) {
        self.post_code = post_code.to_string();
    }

    fn set_country_code(&mut self, country_code: &str) {
        self.country_code = country_code.to_string();
    }

    fn set_telephone(&mut self, telephone: &str) {
        self.telephone = telephone.to_string();
    }

    fn set_company(&mut self, company: &str) {
        self.company = Some(company.to_string());
    }
}
