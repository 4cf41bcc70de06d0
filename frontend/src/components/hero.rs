//! Hero section component

use leptos::*;
use leptos_router::A;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "💡",
        title: "Innovation Focus",
        description: "AI, ML, Data Science, Computer Vision, NLP, and IoT solutions",
    },
    Feature {
        icon: "👥",
        title: "Collaboration",
        description: "Industry-academic partnership for real-world problem solving",
    },
    Feature {
        icon: "🧠",
        title: "Expert Network",
        description: "Access to TCS expertise and DUK's research capabilities",
    },
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <div class="hero-background"></div>
            <div class="hero-grid"></div>

            <div class="hero-content">
                <h1>"TCS AI Club x DUK"</h1>
                <h2 class="subtitle">"Submit Your AI Problem Statement"</h2>

                <A href="/submit" class="hero-cta">"Get Started"</A>

                <div class="features">
                    {FEATURES
                        .iter()
                        .map(|feature| view! {
                            <div class="feature">
                                <div class="feature-icon">{feature.icon}</div>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
