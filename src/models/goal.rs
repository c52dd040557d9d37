// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Goal model and the weekly workout frequency bitmap.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Short day labels, Monday first, matching bitmap positions.
pub const DAY_LABELS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// A customer's current fitness goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    /// Free-text goal
    pub value: String,
    /// Raw frequency string, see [`FrequencyBitmap`]
    pub frequency: Option<String>,
    /// Owning customer's phone
    pub phone: String,
    pub timestamp: DateTime<Utc>,
}

impl Goal {
    /// Parsed workout frequency, `None` if absent or malformed.
    pub fn frequency_bitmap(&self) -> Option<FrequencyBitmap> {
        let raw = self.frequency.as_deref()?;
        match raw.parse() {
            Ok(bitmap) => Some(bitmap),
            Err(e) => {
                tracing::warn!(frequency = %raw, error = %e, "Ignoring malformed goal frequency");
                None
            }
        }
    }
}

/// Which days of the week the customer works out, Monday through Sunday.
///
/// The wire form is a 7-character string of `'0'`/`'1'` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrequencyBitmap([bool; 7]);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FrequencyError {
    #[error("frequency must be exactly 7 characters, got {0}")]
    Length(usize),

    #[error("frequency may only contain '0' and '1', found {0:?}")]
    Character(char),

    #[error("day index {0} is out of range")]
    Day(usize),
}

impl FrequencyBitmap {
    /// Whether the customer works out on `day` (0 = Monday).
    pub fn is_set(&self, day: usize) -> bool {
        self.0.get(day).copied().unwrap_or(false)
    }

    /// Flip the flag for `day`, leaving every other day unchanged.
    pub fn toggle(&mut self, day: usize) -> Result<(), FrequencyError> {
        let flag = self.0.get_mut(day).ok_or(FrequencyError::Day(day))?;
        *flag = !*flag;
        Ok(())
    }

    /// Copy of this bitmap with `day` flipped.
    pub fn toggled(mut self, day: usize) -> Result<Self, FrequencyError> {
        self.toggle(day)?;
        Ok(self)
    }

    /// Number of workout days per week.
    pub fn days_per_week(&self) -> usize {
        self.0.iter().filter(|d| **d).count()
    }
}

impl FromStr for FrequencyBitmap {
    type Err = FrequencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 7 {
            return Err(FrequencyError::Length(len));
        }

        let mut days = [false; 7];
        for (slot, c) in days.iter_mut().zip(s.chars()) {
            *slot = match c {
                '1' => true,
                '0' => false,
                other => return Err(FrequencyError::Character(other)),
            };
        }
        Ok(Self(days))
    }
}

impl fmt::Display for FrequencyBitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for day in self.0 {
            f.write_str(if day { "1" } else { "0" })?;
        }
        Ok(())
    }
}
