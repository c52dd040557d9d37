// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Benchmark records and their two payload shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded strength or endurance benchmark.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Benchmark {
    pub id: String,
    /// Exercise type, e.g. `bench` or `mile`
    #[serde(rename = "type")]
    pub exercise_type: String,
    pub value: String,
    pub units: String,
    pub customer_phone: String,
    pub timestamp: DateTime<Utc>,
}

/// Exercises the dashboard knows how to label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exercise {
    Bench,
    Squat,
    Deadlift,
    Mile,
}

impl Exercise {
    pub const ALL: [Exercise; 4] = [
        Exercise::Bench,
        Exercise::Squat,
        Exercise::Deadlift,
        Exercise::Mile,
    ];

    /// Wire name used as the benchmark `type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Exercise::Bench => "bench",
            Exercise::Squat => "squat",
            Exercise::Deadlift => "deadlift",
            Exercise::Mile => "mile",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Exercise::Bench => "Bench Press",
            Exercise::Squat => "Back Squat",
            Exercise::Deadlift => "Standard Deadlift",
            Exercise::Mile => "1 Mile Run",
        }
    }

    /// Units assumed when the API does not send any.
    pub fn default_units(&self) -> &'static str {
        match self {
            Exercise::Mile => "minutes",
            _ => "lbs",
        }
    }

    pub fn from_type(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

/// Display label for any exercise type, known or not.
pub fn exercise_label(exercise_type: &str) -> String {
    Exercise::from_type(exercise_type)
        .map(|e| e.label().to_string())
        .unwrap_or_else(|| exercise_type.to_string())
}

/// One benchmark row as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkEntry {
    pub exercise_type: String,
    /// `None` when the customer has not recorded this benchmark yet
    pub value: Option<String>,
    pub units: String,
}

impl BenchmarkEntry {
    pub fn label(&self) -> String {
        exercise_label(&self.exercise_type)
    }
}

/// Benchmarks as carried on the dashboard-data payload.
///
/// Older API versions send three fixed fields; newer ones send an ordered
/// list of typed records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BenchmarkSet {
    List(Vec<Benchmark>),
    Legacy {
        bench: Option<f64>,
        squat: Option<f64>,
        deadlift: Option<f64>,
    },
}

impl Default for BenchmarkSet {
    fn default() -> Self {
        BenchmarkSet::List(Vec::new())
    }
}

impl BenchmarkSet {
    /// Normalize either shape into ordered dashboard rows.
    pub fn entries(&self) -> Vec<BenchmarkEntry> {
        match self {
            BenchmarkSet::List(records) => records
                .iter()
                .map(|b| BenchmarkEntry {
                    exercise_type: b.exercise_type.clone(),
                    value: Some(b.value.clone()),
                    units: b.units.clone(),
                })
                .collect(),
            BenchmarkSet::Legacy {
                bench,
                squat,
                deadlift,
            } => [
                (Exercise::Bench, bench),
                (Exercise::Squat, squat),
                (Exercise::Deadlift, deadlift),
            ]
            .into_iter()
            .map(|(exercise, value)| BenchmarkEntry {
                exercise_type: exercise.as_str().to_string(),
                value: value.map(|v| v.to_string()),
                units: exercise.default_units().to_string(),
            })
            .collect(),
        }
    }
}
