//! Progress Bar Component

use leptos::prelude::*;

/// Placeholder progress bar; the value is supplied, not computed here.
#[component]
pub fn ProgressBar(progress: u32) -> impl IntoView {
    view! {
        <div
            class="progress-track"
            role="progressbar"
            aria-valuemax="100"
            aria-valuenow=progress.to_string()
        >
            <div class="progress-fill" style:width=format!("{progress}%") />
        </div>
    }
}
