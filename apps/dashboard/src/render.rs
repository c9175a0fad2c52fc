//! Plain-text rendering of the dashboard layout and derived views.

use std::fmt::Write as _;

use shared::{
    domain::{Outcome, Selection},
    protocol::{CorrelationView, DashboardLayout, Publication, RatioView},
};

use crate::controller::events::{UiError, UiEvent};

const NO_DATA: &str = "  (no launches match the current selection)";

fn outcome_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Failure => "failure (0)",
        Outcome::Success => "success (1)",
    }
}

pub fn render_layout(layout: &DashboardLayout) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", layout.title);
    let _ = writeln!(out, "{}:", layout.site_placeholder);
    for option in &layout.site_options {
        let _ = writeln!(out, "  {:<16} [{}]", option.label, option.value);
    }
    let slider = layout.payload_slider;
    let marks: Vec<String> = slider.marks().iter().map(|mark| format!("{mark}")).collect();
    let _ = writeln!(
        out,
        "Payload range (Kg): slider [{}, {}] step {} (marks {})",
        slider.min,
        slider.max,
        slider.step,
        marks.join(" ")
    );
    let _ = writeln!(
        out,
        "Dataset payload bounds: {}",
        layout.payload_bounds
    );
    let _ = write!(out, "Initial selection: {}", render_selection(&layout.initial_selection));
    out
}

pub fn render_selection(selection: &Selection) -> String {
    format!(
        "site {} payload {}",
        selection.site_filter, selection.payload_range
    )
}

fn render_ratio(out: &mut String, title: &str, ratio: &RatioView) {
    let _ = writeln!(out, "{title}");
    if ratio.is_empty() {
        let _ = writeln!(out, "{NO_DATA}");
        return;
    }
    match ratio {
        RatioView::SuccessesBySite { slices } => {
            for slice in slices {
                let _ = writeln!(
                    out,
                    "  {:<16} {:>4} successes {:>6.1}%",
                    slice.site.as_str(),
                    slice.success_count,
                    slice.share * 100.0
                );
            }
        }
        RatioView::OutcomesForSite { slices, .. } => {
            let total: u64 = slices.iter().map(|slice| slice.launch_count).sum();
            for slice in slices {
                let share = slice.launch_count as f64 / total as f64 * 100.0;
                let _ = writeln!(
                    out,
                    "  {:<16} {:>4} launches {:>6.1}%",
                    outcome_label(slice.outcome),
                    slice.launch_count,
                    share
                );
            }
        }
    }
}

fn render_correlation(out: &mut String, title: &str, correlation: &CorrelationView) {
    let _ = writeln!(out, "{title}");
    if correlation.is_empty() {
        let _ = writeln!(out, "{NO_DATA}");
        return;
    }
    for category in correlation.booster_categories() {
        let points: Vec<String> = correlation
            .points_for(category)
            .map(|point| format!("{}kg:{}", point.payload_mass_kg, point.outcome.as_class()))
            .collect();
        let _ = writeln!(
            out,
            "  {:<8} {:>3} points  {}",
            category.as_str(),
            points.len(),
            points.join(" ")
        );
    }
}

pub fn render_publication(publication: &Publication) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "-- update #{}: {}",
        publication.revision,
        render_selection(&publication.selection)
    );
    render_ratio(&mut out, &publication.titles.ratio, &publication.ratio);
    render_correlation(&mut out, &publication.titles.correlation, &publication.correlation);
    out
}

pub fn render_error(error: &UiError) -> String {
    format!(
        "error [{:?}/{:?}]: {}",
        error.context(),
        error.category(),
        error.message()
    )
}

pub fn render_event(event: &UiEvent) -> String {
    match event {
        UiEvent::Published(publication) => render_publication(publication),
        UiEvent::Info(message) => format!("note: {message}"),
        UiEvent::Error(error) => render_error(error),
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
