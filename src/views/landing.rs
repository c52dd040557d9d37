// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Marketing landing page with the signup form.

use super::layout;
use crate::services::SignupCheck;
use crate::toast::Toast;
use maud::{html, Markup};

const NAVIGATION: [(&str, &str); 4] = [
    ("Product", "#"),
    ("Features", "#"),
    ("Marketplace", "#"),
    ("Company", "#"),
];

const FEATURES: [(&str, &str); 3] = [
    (
        "Workouts by text",
        "Get a workout planned around your goal delivered straight to your phone. No app to install.",
    ),
    (
        "Built around your week",
        "Tell FitScript which days you train and it schedules around them.",
    ),
    (
        "Track your progress",
        "Record benchmarks like your bench press or mile time and get weights, reps and paces that fit.",
    ),
];

/// Everything the landing page renders.
pub struct LandingView<'a> {
    pub recaptcha_site_key: &'a str,
    /// Previously entered phone, refilled after a rejected submit
    pub phone: &'a str,
    pub firstname: &'a str,
    /// Signup check for the refilled phone (reCAPTCHA always starts unsolved)
    pub check: SignupCheck,
    pub toast: Option<&'a Toast>,
}

pub fn page(view: &LandingView<'_>) -> Markup {
    layout::base(
        "FitScript - Your personal trainer, by text",
        view.toast,
        html! {
            script src="https://www.google.com/recaptcha/api.js" async defer {}
            div class="relative isolate overflow-hidden bg-white" {
                (header())
                div class="mx-auto max-w-7xl px-6 pt-24 pb-24 sm:pb-32 lg:flex lg:px-8 lg:py-40" {
                    div class="mx-auto max-w-2xl lg:mx-0 lg:max-w-xl lg:flex-shrink-0 lg:pt-8" {
                        h1 class="mt-10 text-4xl font-bold tracking-tight text-gray-900 sm:text-6xl" {
                            "Your personal trainer, one text away"
                        }
                        p class="mt-6 text-lg leading-8 text-gray-600" {
                            "FitScript texts you workouts built for your goal and your schedule. "
                            "Sign up with your phone number to get started."
                        }
                        (signup_form(view))
                    }
                }
                (features())
            }
        },
    )
}

fn header() -> Markup {
    html! {
        header {
            nav class="flex items-center justify-between p-6 lg:px-8" aria-label="Global" {
                div class="flex lg:flex-1" {
                    a href="/" class="-m-1.5 p-1.5 text-xl font-semibold text-gray-900" { "FitScript" }
                }
                div class="hidden lg:flex lg:gap-x-12" {
                    @for (name, href) in NAVIGATION {
                        a href=(href) class="text-sm font-semibold leading-6 text-gray-900" { (name) }
                    }
                }
                div class="lg:flex lg:flex-1 lg:justify-end" {
                    a href="/dashboard/login" class="text-sm font-semibold leading-6 text-gray-900" {
                        "Log in " span aria-hidden="true" { "→" }
                    }
                }
            }
        }
    }
}

fn signup_form(view: &LandingView<'_>) -> Markup {
    html! {
        form method="post" action="/signup" class="mt-10 flex flex-col gap-4 max-w-md" {
            label for="phone" class="text-sm font-medium text-gray-900" { "Phone number" }
            div class="flex items-center gap-2" {
                input
                    id="phone"
                    name="phone"
                    type="tel"
                    inputmode="tel"
                    placeholder="+15551234567"
                    pattern="[0-9+()]*"
                    maxlength="12"
                    value=(view.phone)
                    class="w-full rounded-md border border-gray-300 px-3 py-2 text-gray-900";
                @if view.check.phone_ok {
                    span class="text-green-600" aria-label="Phone number looks good" { "✓" }
                }
            }
            label for="firstname" class="text-sm font-medium text-gray-900" { "First name" }
            input
                id="firstname"
                name="firstname"
                type="text"
                maxlength="64"
                value=(view.firstname)
                class="w-full rounded-md border border-gray-300 px-3 py-2 text-gray-900";
            div class="g-recaptcha" data-sitekey=(view.recaptcha_site_key) {}
            @if !view.phone.is_empty() && !view.check.reason.is_empty() {
                p class="text-sm text-red-600" { (view.check.reason) }
            }
            button
                type="submit"
                class="rounded-md bg-green-600 px-3.5 py-2.5 text-sm font-semibold text-white shadow-sm hover:bg-green-500" {
                "Sign up"
            }
        }
    }
}

fn features() -> Markup {
    html! {
        div class="mx-auto max-w-7xl px-6 pb-24 lg:px-8" {
            dl class="grid grid-cols-1 gap-8 sm:grid-cols-3" {
                @for (title, description) in FEATURES {
                    div {
                        dt class="font-semibold text-gray-900" { (title) }
                        dd class="mt-1 text-gray-600" { (description) }
                    }
                }
            }
        }
    }
}
