use serde::{Deserialize, Serialize};

/// Customer lookup against a biller (meter number, smartcard, phone number)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidateCustomerRequest {
    pub biller_id: String,
    pub customer_id: String,
}

/// Result of a biller customer lookup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerValidation {
    pub customer_id: String,
    pub customer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Bill payment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayBillRequest {
    pub biller_id: String,
    pub customer_id: String,
    pub amount: f64,
    pub passcode: String,
}
