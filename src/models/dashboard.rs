// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard-data payload.

use super::{BenchmarkSet, Customer, Goal};
use serde::{Deserialize, Serialize};

/// Everything the dashboard page needs, fetched in one call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardData {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub customer: Customer,
    pub goal: Goal,
    #[serde(default)]
    pub benchmarks: BenchmarkSet,
}
