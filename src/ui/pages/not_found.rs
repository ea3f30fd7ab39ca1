//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::{AnimateInMode, AnimationDirection, RevealConfig};
use crate::ui::motion::FadeInList;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    let lines = vec!["404", "Page Not Found", "The page you're looking for doesn't exist or has been moved."];

    view! {
        <div class="not-found">
            <FadeInList
                list=lines
                key=|line: &&'static str| *line
                render=|line: &'static str| view! { <p>{line}</p> }
                config=RevealConfig::new().fade_from(AnimationDirection::Bottom)
                animate_in=AnimateInMode::Immediate(true)
            />

            <A href="/" attr:class="landing-btn">
                "Go Home"
            </A>
        </div>
    }
}
