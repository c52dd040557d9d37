// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - API clients and form logic.

pub mod editor;
pub mod fitscript;
pub mod recaptcha;
pub mod signup;

pub use editor::{EditableField, FieldEditor};
pub use fitscript::{ApiMessage, FitScriptClient, GoalSetting, LoginResponse, VerifiedToken};
pub use recaptcha::RecaptchaVerifier;
pub use signup::{phone_input_accepted, validate_signup, SignupCheck};
