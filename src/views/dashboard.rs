// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Customer dashboard: goal, workout frequency and benchmarks, each with an
//! inline view/edit toggle.
//!
//! Edit state travels in the query string (`?edit=goal`,
//! `?edit=frequency&draft=1010100`, `?edit=benchmark&exercise=bench`). Each
//! editor is a form whose Cancel and Confirm buttons post back with an
//! `intent`.

use super::layout;
use crate::middleware::session::dashboard_path;
use crate::models::{BenchmarkEntry, DashboardData, Exercise, FrequencyBitmap, DAY_LABELS};
use crate::services::EditableField;
use crate::time_utils::format_member_since;
use crate::toast::Toast;
use maud::{html, Markup};

const TABS: [(&str, bool); 3] = [("Fitness", true), ("Billing", false), ("Settings", false)];

const PRIMARY_BUTTON: &str = "rounded-2xl px-2 py-1 text-sm bg-black font-medium text-white hover:opacity-80";
const CANCEL_BUTTON: &str =
    "rounded-full px-2 text-sm bg-white border-black border-2 font-medium text-black hover:opacity-80";

/// Which field, if any, is in edit mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    Goal,
    /// Frequency editor, with the draft carried over from the last toggle
    Frequency { draft: Option<FrequencyBitmap> },
    Benchmark { exercise_type: String },
}

/// One benchmark row with its editor.
pub struct BenchmarkRow {
    pub entry: BenchmarkEntry,
    pub value: EditableField<String>,
}

/// Everything the dashboard renders.
pub struct DashboardView<'a> {
    pub phone: &'a str,
    pub greeting: &'a str,
    pub data: &'a DashboardData,
    pub goal: EditableField<String>,
    pub frequency: EditableField<FrequencyBitmap>,
    pub benchmarks: Vec<BenchmarkRow>,
    pub toast: Option<&'a Toast>,
}

impl<'a> DashboardView<'a> {
    /// Seed every field from fetched data and open the editor named by `edit`.
    pub fn new(
        phone: &'a str,
        greeting: &'a str,
        data: &'a DashboardData,
        edit: Option<EditTarget>,
        toast: Option<&'a Toast>,
    ) -> Self {
        let mut goal = EditableField::new(data.goal.value.clone());
        let mut frequency = EditableField::new(data.goal.frequency_bitmap().unwrap_or_default());
        let mut benchmarks: Vec<BenchmarkRow> = with_standard_exercises(data.benchmarks.entries())
            .into_iter()
            .map(|entry| BenchmarkRow {
                value: EditableField::new(entry.value.clone().unwrap_or_default()),
                entry,
            })
            .collect();

        match edit {
            Some(EditTarget::Goal) => goal.begin_edit(),
            Some(EditTarget::Frequency { draft }) => {
                frequency.begin_edit();
                if let Some(draft) = draft {
                    frequency.update_draft(draft);
                }
            }
            Some(EditTarget::Benchmark { exercise_type }) => {
                if let Some(row) = benchmarks
                    .iter_mut()
                    .find(|r| r.entry.exercise_type.eq_ignore_ascii_case(&exercise_type))
                {
                    row.value.begin_edit();
                }
            }
            None => {}
        }

        Self {
            phone,
            greeting,
            data,
            goal,
            frequency,
            benchmarks,
            toast,
        }
    }
}

/// Make sure every standard exercise has a row, appending empty ones after
/// whatever the API sent.
fn with_standard_exercises(mut entries: Vec<BenchmarkEntry>) -> Vec<BenchmarkEntry> {
    for exercise in Exercise::ALL {
        let present = entries
            .iter()
            .any(|e| Exercise::from_type(&e.exercise_type) == Some(exercise));
        if !present {
            entries.push(BenchmarkEntry {
                exercise_type: exercise.as_str().to_string(),
                value: None,
                units: exercise.default_units().to_string(),
            });
        }
    }
    entries
}

pub fn page(view: &DashboardView<'_>) -> Markup {
    let base = dashboard_path(view.phone);

    layout::base(
        "Dashboard - FitScript",
        view.toast,
        html! {
            div class="relative isolate bg-white min-h-screen" {
                (layout::navbar())
                div class="mx-auto flex max-w-4xl flex-col md:px-8 xl:px-0" {
                    main class="flex-1" {
                        div class="relative mx-auto max-w-4xl md:px-8 xl:px-0 pt-20 pb-16" {
                            (heading(view))
                            div class="px-4 sm:px-6 md:px-0 py-6" {
                                (tabs())
                                (goal_section(view, &base))
                                (benchmark_section(view, &base))
                            }
                        }
                    }
                }
            }
        },
    )
}

fn heading(view: &DashboardView<'_>) -> Markup {
    let customer = &view.data.customer;

    html! {
        div class="px-4 sm:px-6 md:px-0" {
            h1 class="text-4xl font-bold tracking-tight text-gray-900" {
                (view.greeting) " " (customer.firstname)
            }
            p class="pt-1 text-sm text-gray-500" {
                "Member since " (format_member_since(customer.date_registered))
            }
            div class="flex gap-4 items-center" {
                @if !customer.premium {
                    button type="button" class="underline pt-2 text-gray-400 text-sm" {
                        "Upgrade to FitScript Premium"
                    }
                }
                form method="post" action="/dashboard/logout" {
                    button type="submit" class="underline pt-2 text-gray-400 text-sm" { "Log out" }
                }
            }
        }
    }
}

fn tabs() -> Markup {
    html! {
        div class="border-b border-gray-200" {
            nav class="-mb-px flex space-x-8" {
                @for (name, current) in TABS {
                    @let state = if current {
                        "border-green-500 text-green-600"
                    } else {
                        "border-transparent text-gray-500 hover:border-gray-300 hover:text-gray-700"
                    };
                    a href="#" class={ "whitespace-nowrap py-4 px-1 border-b-2 font-medium text-sm " (state) } {
                        (name)
                    }
                }
            }
        }
    }
}

fn goal_section(view: &DashboardView<'_>, base: &str) -> Markup {
    html! {
        div class="mt-10 divide-y divide-gray-200" {
            div class="space-y-1" {
                h3 class="text-2xl font-medium leading-6 text-gray-900" { "Current Goal" }
                p class="max-w-2xl text-sm text-gray-500" {
                    "This is what you're actively working towards. FitScript will remember "
                    "this and craft your workouts with your goal in mind."
                }
            }
            dl class="mt-6 divide-y divide-gray-200" {
                div class="py-4 sm:grid sm:grid-cols-3 sm:gap-4 sm:py-5" id="goal" {
                    dt class="text-lg font-medium text-gray-900" { "Goal" }
                    dd class="mt-1 flex gap-2 justify-between items-center text-sm text-gray-700 sm:col-span-2 sm:mt-0" {
                        @if view.goal.is_editing() {
                            form method="post" action={ (base) "/goal" } class="flex w-full gap-3 items-center" {
                                textarea name="value" class="w-80 break-all p-2 border-gray-400 border rounded-sm" {
                                    (view.goal.shown())
                                }
                                (edit_buttons())
                            }
                        } @else {
                            span class="max-w-sm break-all" { (view.goal.shown()) }
                            (update_link(&format!("{}?edit=goal", base)))
                        }
                    }
                }
                div class="py-4 sm:grid sm:grid-cols-3 sm:gap-4 sm:py-5" id="frequency" {
                    dt class="text-lg font-medium text-gray-900" { "Workout Frequency" }
                    dd class="mt-1 flex gap-2 justify-between items-center text-sm text-gray-700 sm:col-span-2 sm:mt-0" {
                        span class="flex-grow" { (frequency_days(&view.frequency, base)) }
                        span class="text-gray-500 whitespace-nowrap" {
                            (view.frequency.shown().days_per_week()) " days/week"
                        }
                        @if view.frequency.is_editing() {
                            form method="post" action={ (base) "/frequency" } class="flex items-center gap-3" {
                                input type="hidden" name="frequency" value=(view.frequency.shown().to_string());
                                (edit_buttons())
                            }
                        } @else {
                            (update_link(&format!("{}?edit=frequency", base)))
                        }
                    }
                }
            }
        }
    }
}

/// Day checkboxes. While editing, each day links to the same page with that
/// day flipped in the draft.
fn frequency_days(field: &EditableField<FrequencyBitmap>, base: &str) -> Markup {
    let bitmap = *field.shown();

    html! {
        fieldset class="gap-3 md:gap-5 flex" {
            legend class="sr-only" { "Frequency" }
            @for (day, label) in DAY_LABELS.into_iter().enumerate() {
                div class="relative flex flex-col items-center justify-center px-1" {
                    div class="text-lg text-black pb-2" { (label) }
                    @if field.is_editing() {
                        @if let Ok(toggled) = bitmap.toggled(day) {
                            a href={ (base) "?edit=frequency&draft=" (toggled.to_string()) }
                                role="checkbox"
                                aria-checked=(if bitmap.is_set(day) { "true" } else { "false" })
                                aria-label=(label)
                                class="flex h-6 w-6 items-center justify-center rounded border border-gray-400 text-black" {
                                @if bitmap.is_set(day) { "✓" }
                            }
                        }
                    } @else {
                        input type="checkbox" disabled checked[bitmap.is_set(day)]
                            aria-label=(label)
                            class="h-6 w-6 rounded border-gray-300 text-black";
                    }
                }
            }
        }
    }
}

fn benchmark_section(view: &DashboardView<'_>, base: &str) -> Markup {
    html! {
        div class="mt-10 divide-y divide-gray-200" {
            div class="space-y-1" {
                h3 class="text-xl font-medium leading-6 text-gray-900" { "Benchmarks" }
                p class="max-w-2xl text-sm text-gray-500" {
                    "Record your current fitness level with these benchmarks. We'll use these "
                    "to track your progress and give you personalized workouts with weights, "
                    "reps, times, and distances."
                }
            }
            dl class="mt-6 divide-y divide-gray-200" {
                @for row in &view.benchmarks {
                    (benchmark_row(row, base))
                }
            }
        }
    }
}

fn benchmark_row(row: &BenchmarkRow, base: &str) -> Markup {
    let exercise_type = &row.entry.exercise_type;

    html! {
        div class="py-4 sm:grid sm:grid-cols-3 sm:gap-4 sm:py-5" data-exercise=(exercise_type) {
            dt class="text-sm font-medium text-gray-900" { (row.entry.label()) }
            dd class="mt-1 flex gap-2 items-center text-sm text-gray-700 sm:col-span-2 sm:mt-0" {
                @if row.value.is_editing() {
                    form method="post" action={ (base) "/benchmark" } class="flex w-full gap-3 items-center" {
                        input type="hidden" name="exercise" value=(exercise_type);
                        input type="text" name="value" value=(row.value.shown())
                            class="w-32 p-1 border-gray-400 border rounded-sm";
                        input type="text" name="units" value=(row.entry.units)
                            class="w-24 p-1 border-gray-400 border rounded-sm";
                        (edit_buttons())
                    }
                } @else {
                    span class="flex-grow" {
                        @if row.value.shown().is_empty() {
                            span class="text-gray-400" { "Not recorded" }
                        } @else {
                            (row.value.shown()) " " (row.entry.units)
                        }
                    }
                    (update_link(&format!(
                        "{}?edit=benchmark&exercise={}",
                        base,
                        urlencoding::encode(exercise_type)
                    )))
                }
            }
        }
    }
}

fn update_link(href: &str) -> Markup {
    html! {
        span class="ml-4 flex-shrink-0" {
            a href=(href) class=(PRIMARY_BUTTON) { "Update" }
        }
    }
}

/// Cancel and Confirm both submit the form; the `intent` decides whether
/// the draft is sent.
fn edit_buttons() -> Markup {
    html! {
        span class="ml-4 flex items-center gap-3" {
            button type="submit" name="intent" value="cancel" class=(CANCEL_BUTTON) aria-label="Cancel" { "✕" }
            button type="submit" name="intent" value="confirm" class=(PRIMARY_BUTTON) { "Confirm" }
        }
    }
}
