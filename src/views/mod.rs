// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Server-rendered pages.

pub mod dashboard;
pub mod landing;
pub mod layout;
pub mod login;

pub use dashboard::{DashboardView, EditTarget};
pub use landing::LandingView;
pub use login::LoginView;
