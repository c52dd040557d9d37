// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Signup form validation.

/// Required phone prefix (US numbers only).
pub const PHONE_PREFIX: &str = "+1";

/// Length of a `+1XXXXXXXXXX` phone number.
pub const PHONE_LEN: usize = 12;

pub const REASON_PREFIX: &str = "Phone # must start with +1";
pub const REASON_LENGTH: &str = "Please enter a valid phone number";
pub const REASON_RECAPTCHA: &str = "Please complete the reCAPTCHA";

/// Outcome of checking the signup form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupCheck {
    /// Whether the form may be submitted
    pub allowed: bool,
    /// Why submission is blocked; empty when allowed
    pub reason: &'static str,
    /// Phone alone is well-formed (drives the check mark next to the input)
    pub phone_ok: bool,
}

/// Decide whether signup may proceed.
pub fn validate_signup(phone: &str, recaptcha_completed: bool) -> SignupCheck {
    let blocked = |reason, phone_ok| SignupCheck {
        allowed: false,
        reason,
        phone_ok,
    };

    if !phone.starts_with(PHONE_PREFIX) {
        return blocked(REASON_PREFIX, false);
    }
    if phone.len() != PHONE_LEN {
        return blocked(REASON_LENGTH, false);
    }
    if !recaptcha_completed {
        return blocked(REASON_RECAPTCHA, true);
    }

    SignupCheck {
        allowed: true,
        reason: "",
        phone_ok: true,
    }
}

/// Whether typed phone input is acceptable at all: digits, `+`, `(` and `)`.
pub fn phone_input_accepted(input: &str) -> bool {
    input
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '(' | ')'))
}
