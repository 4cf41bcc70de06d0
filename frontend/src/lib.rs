//! TCS AI Club x DUK Portal - Frontend Rust/Leptos Application
//!
//! A WebAssembly single-page app where community members submit AI
//! problem statements. Submissions go straight to the Supabase
//! `problem_submissions` table through its REST interface.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Router                                                      │
//! │  ├── /        HomePage   (MinimalNav, Hero)                  │
//! │  ├── /submit  SubmitPage (ProblemSubmissionForm)             │
//! │  └── /*any    HomePage                                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ToastViewport                                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Supabase settings and UI constants
//! - [`components`] - UI components (nav, hero, form, toasts)
//! - [`pages`] - Routed pages
//! - [`services`] - Supabase store over `gloo-net`

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod pages;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Components
pub use components::*;

// Pages
pub use pages::*;

// Services
pub use services::*;

// =============================================================================
// Application Root
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let toaster = provide_toaster();

    view! {
        <Title text=APP_TITLE/>

        <Router>
            <main>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/submit" view=SubmitPage/>
                    // Unknown paths land on the home page
                    <Route path="/*any" view=HomePage/>
                </Routes>
            </main>
        </Router>

        <ToastViewport toaster=toaster/>
    }
}
