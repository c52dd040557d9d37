//! Historical SMS request log entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One inbound text message, as logged by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmsRequest {
    pub id: String,
    pub request_text: String,
    pub timestamp: DateTime<Utc>,
    pub customer_phone: String,
}
