use leptos::*;
use leptos_meta::Title;

use crate::components::ProblemSubmissionForm;

/// The submission form at `/submit`.
#[component]
pub fn SubmitPage() -> impl IntoView {
    view! {
        <Title text="Submit a Problem | TCS AI Club x DUK"/>
        <ProblemSubmissionForm/>
    }
}
