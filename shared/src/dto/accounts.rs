use serde::{Deserialize, Serialize};

/// A customer account held with the bank
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub account_number: String,
    pub account_name: String,
    #[serde(default)]
    pub account_type: String,
    pub balance: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "NGN".to_string()
}

/// Name enquiry for a destination account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidateAccountRequest {
    pub account_number: String,
    pub bank_code: String,
}

/// Result of a name enquiry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountValidation {
    pub account_number: String,
    pub account_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
}
