//! Issuer and client identity blocks.

use serde::{Deserialize, Serialize};

/// Company block printed in the quotation header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuerIdentity {
    pub name: String,
    pub address_line1: String,
    pub address_line2: String,
    pub region: String,
    pub phone: String,
    pub email: String,
    /// Tax identification number, printed as provided.
    pub tax_id: String,
    /// Business registry number, printed as provided.
    pub registry_id: String,
}

impl Default for IssuerIdentity {
    fn default() -> Self {
        Self {
            name: "Rebar Supply Co.".to_string(),
            address_line1: "1 Steelworks Road".to_string(),
            address_line2: "00-001 Steeltown".to_string(),
            region: String::new(),
            phone: String::new(),
            email: String::new(),
            tax_id: String::new(),
            registry_id: String::new(),
        }
    }
}

/// Client block: free-text name and email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientIdentity {
    pub name: String,
    pub email: String,
}

impl ClientIdentity {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Name shown in the document; blank input gets a placeholder.
    pub fn display_name(&self) -> &str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            "Valued client"
        } else {
            trimmed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_client_name_gets_placeholder() {
        assert_eq!(ClientIdentity::new("  ", "").display_name(), "Valued client");
        assert_eq!(
            ClientIdentity::new("Acme Construction", "a@b.c").display_name(),
            "Acme Construction"
        );
    }
}
