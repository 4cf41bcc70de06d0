use leptos::*;

use crate::components::{Hero, MinimalNav};

/// Landing page at `/`. Also rendered for unknown paths.
#[component]
pub fn HomePage() -> impl IntoView {
    // Always open at the top, even when arriving from a scrolled page.
    create_effect(move |_| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    view! {
        <div class="home-page">
            <MinimalNav/>
            <Hero/>
        </div>
    }
}
