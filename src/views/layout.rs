// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared page chrome.

use crate::toast::{Toast, ToastKind};
use maud::{html, Markup, DOCTYPE};

/// Full HTML document around `content`.
pub fn base(title: &str, toast: Option<&Toast>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src="https://cdn.tailwindcss.com" {}
            }
            body class="bg-white min-h-screen" {
                @if let Some(toast) = toast {
                    (toast_banner(toast))
                }
                (content)
            }
        }
    }
}

/// Top-left home link used on the login and dashboard pages.
pub fn navbar() -> Markup {
    html! {
        div class="absolute inset-x-0 top-0 z-10 py-3 mx-4 flex gap-4 text-gray-900 items-center" {
            a href="/" class="text-2xl font-semibold" { "FitScript" }
        }
    }
}

fn toast_banner(toast: &Toast) -> Markup {
    let colors = match toast.kind {
        ToastKind::Success => "bg-green-50 text-green-800 border-green-300",
        ToastKind::Error => "bg-red-50 text-red-800 border-red-300",
    };

    html! {
        div
            role="status"
            data-toast=(toast.kind.as_str())
            class={ "fixed top-4 right-4 z-50 rounded-md border px-4 py-3 shadow " (colors) } {
            (toast.message)
        }
    }
}

/// Generic not-found page.
pub fn not_found() -> Markup {
    base(
        "404 Not Found",
        None,
        html! {
            div class="min-h-screen flex items-center justify-center bg-gray-50" {
                div class="text-center" {
                    h1 class="text-6xl font-bold text-gray-900 mb-4" { "404" }
                    p class="text-xl text-gray-600 mb-8" { "This page could not be found." }
                    a href="/" class="text-green-600 hover:text-green-800 underline" {
                        "Go back home"
                    }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_is_escaped() {
        let toast = Toast::error(Some("<script>alert(1)</script>"));
        let page = base("t", Some(&toast), html! {}).into_string();

        assert!(page.contains("Error: &lt;script&gt;"));
        assert!(page.contains(r#"data-toast="error""#));
    }
}
