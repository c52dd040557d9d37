//! Customer model as returned by the FitScript API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A FitScript customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Phone number in E.164 form, the customer's identifier
    pub phone: String,
    /// First name
    pub firstname: String,
    pub is_admin: bool,
    /// When the customer signed up
    pub date_registered: DateTime<Utc>,
    pub premium: bool,
    /// Opaque per-customer value, not used by the website
    pub dashboard_secret: String,
    /// Last time a login code was issued
    pub recent_code_refresh: Option<DateTime<Utc>>,
}
