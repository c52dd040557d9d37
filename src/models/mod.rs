// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Records returned by the FitScript API.

pub mod benchmark;
pub mod customer;
pub mod dashboard;
pub mod goal;
pub mod request;

pub use benchmark::{exercise_label, Benchmark, BenchmarkEntry, BenchmarkSet, Exercise};
pub use customer::Customer;
pub use dashboard::DashboardData;
pub use goal::{FrequencyBitmap, FrequencyError, Goal, DAY_LABELS};
pub use request::SmsRequest;
