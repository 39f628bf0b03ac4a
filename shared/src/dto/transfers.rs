use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Outgoing transfer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransferRequest {
    pub account_number: String,
    pub bank_code: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narration: Option<String>,
    pub passcode: String,
}

/// Receipt returned for transfers and bill payments
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionReceipt {
    pub reference: String,
    pub status: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Account statement request for an inclusive date range
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatementRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_receipt_parses_rfc3339_timestamp() {
        let receipt: TransactionReceipt = serde_json::from_value(json!({
            "reference": "TRF-001",
            "status": "successful",
            "amount": 2500.0,
            "created_at": "2024-05-01T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(receipt.created_at.map(|t| t.timestamp()), Some(1_714_557_600));
    }

    #[test]
    fn test_statement_dates_serialize_as_iso() {
        let request = StatementRequest {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"start_date": "2024-01-01", "end_date": "2024-01-31"})
        );
    }
}
