//! Landing page navigation with the partner logos.

use leptos::*;
use leptos_router::A;

use crate::{CLUB_LOGO, CLUB_URL, DUK_LOGO, DUK_URL};

/// Club and university logos, each linking to its site.
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <div class="logo">
            <a href=CLUB_URL target="_blank" rel="noopener noreferrer" class="logo-link">
                <img src=CLUB_LOGO alt="TCS AI Club" class="logo-image"/>
            </a>
            <div class="logo-separator"></div>
            <a href=DUK_URL target="_blank" rel="noopener noreferrer" class="logo-link">
                <img src=DUK_LOGO alt="Digital University Kerala" class="logo-image"/>
            </a>
        </div>
    }
}

#[component]
pub fn MinimalNav() -> impl IntoView {
    view! {
        <nav class="nav">
            <Logo/>
            <A href="/submit" class="nav-cta">"Submit Problem"</A>
        </nav>

        // Fixed call to action on small screens
        <div class="nav-mobile-cta">
            <A href="/submit" class="nav-cta">"Submit Problem"</A>
        </div>
    }
}
