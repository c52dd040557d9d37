// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard login page.

use super::layout;
use crate::toast::Toast;
use maud::{html, Markup};

pub struct LoginView<'a> {
    /// Prefilled phone (empty for the generic login page)
    pub phone: &'a str,
    /// API reported no customer with this phone
    pub unknown_phone: bool,
    pub toast: Option<&'a Toast>,
}

pub fn page(view: &LoginView<'_>) -> Markup {
    layout::base(
        "Log in - FitScript",
        view.toast,
        html! {
            (layout::navbar())
            form method="post" action="/dashboard/login"
                class="flex flex-col gap-10 text-black mt-20 pt-10 text-xl items-center" {
                h1 { "Login" }
                @if view.unknown_phone {
                    p class="text-base text-red-600" {
                        "We couldn't find a FitScript account for that number."
                    }
                }
                input
                    name="phone"
                    type="tel"
                    placeholder="Phone number"
                    value=(view.phone)
                    class="bg-gray-100 w-1/3 px-2 py-1";
                input
                    name="password"
                    type="password"
                    placeholder="Password"
                    class="bg-gray-100 w-1/3 px-2 py-1";
                button type="submit" class="px-4 py-2 bg-red-500 text-white" { "Log In" }
            }
        },
    )
}
