//! Loading and error banners.

use leptos::*;

/// Progress banner shown while the (free-tier, therefore slow) server wakes up.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading-banner">
            <p>"אם יונתן היה מוכן לשלם על שרת זה היה מהיר יותר"</p>
            <div class="progress-bar">
                <div class="progress-fill"></div>
            </div>
        </div>
    }
}

#[component]
pub fn ErrorBanner(message: String) -> impl IntoView {
    view! {
        <p class="status error">{message}</p>
    }
}
