//! Landing page component
//!
//! A scroll-animated marketing page built from staggered reveal lists:
//! - Hero highlights revealed immediately on load
//! - "How it works" steps revealed once when scrolled into view
//! - Testimonials that fade out and back in as they leave and enter the viewport
//! - A showcase list orchestrated by a button through an external control handle

use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::{AnimateInMode, AnimationDirection, Displacement, RevealConfig, TransitionPreset};
use crate::ui::motion::{FadeInList, use_reveal_controls};

/// A titled blurb rendered as a card
#[derive(Clone, Debug, PartialEq)]
pub struct Highlight {
    pub slug: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

const fn highlight(slug: &'static str, title: &'static str, body: &'static str) -> Highlight {
    Highlight { slug, title, body }
}

const HERO: [Highlight; 3] = [
    highlight("fast", "Fast", "Pages render on the server and hydrate in milliseconds."),
    highlight("smooth", "Smooth", "Every section eases into place as you scroll."),
    highlight("focused", "Focused", "One clear call to action per screen."),
];

const STEPS: [Highlight; 4] = [
    highlight("talk", "1. Talk to us", "Tell us what your course or clinic needs."),
    highlight("plan", "2. Plan", "We outline the pages and the story they tell."),
    highlight("build", "3. Build", "Design and development happen side by side."),
    highlight("launch", "4. Launch", "Your site goes live with analytics in place."),
];

const TESTIMONIALS: [Highlight; 3] = [
    highlight("ana", "Ana, clinic owner", "\"Our contact requests doubled in a month.\""),
    highlight("joao", "João, course director", "\"Students find the right course on the first visit.\""),
    highlight("lia", "Lia, marketing lead", "\"The page feels alive without being distracting.\""),
];

const SHOWCASE: [Highlight; 4] = [
    highlight("left", "From the left", "Horizontal offset, negative sign."),
    highlight("right", "From the right", "Horizontal offset, positive sign."),
    highlight("top", "From the top", "Vertical offset, negative sign."),
    highlight("bottom", "From the bottom", "Vertical offset, positive sign."),
];

/// Landing page with scroll-triggered reveal sections
#[component]
pub fn LandingPage() -> impl IntoView {
    let showcase = use_reveal_controls();
    let showcase_pose = showcase.pose();

    let (started, set_started) = signal(0u32);
    let (finished, set_finished) = signal(0u32);

    let hero_config = RevealConfig::new()
        .row()
        .gap("1.5rem")
        .fade_from(AnimationDirection::Left)
        .stagger(Duration::from_millis(150))
        .preset(TransitionPreset::Snappy);

    let steps_config = RevealConfig::new()
        .gap("1rem")
        .fade_from(AnimationDirection::Bottom)
        .preset(TransitionPreset::Smooth);

    let testimonials_config = RevealConfig::new()
        .gap("1rem")
        .fade_from(AnimationDirection::Right)
        .displacement(Displacement::new(60.0).unwrap_or_default());

    let showcase_config = RevealConfig::new()
        .row()
        .gap("1rem")
        .fade_from(AnimationDirection::Top)
        .stagger(Duration::from_millis(100));

    view! {
        <Title text="Landing Motion - Staggered reveals"/>
        <Meta name="description" content="Scroll-triggered, staggered reveal animations for landing pages."/>
        <LandingStyles/>

        <div class="landing">
            <section class="landing-hero">
                <h1>"Sites that move with your visitors"</h1>
                <FadeInList
                    list=HERO.to_vec()
                    key=|item: &Highlight| item.slug
                    render=|item: Highlight| view! { <HighlightCard item=item/> }
                    config=hero_config
                    animate_in=AnimateInMode::Immediate(true)
                />
            </section>

            <section class="landing-section">
                <h2>"How it works"</h2>
                <FadeInList
                    list=STEPS.to_vec()
                    key=|item: &Highlight| item.slug
                    render=|item: Highlight| view! { <HighlightCard item=item/> }
                    config=steps_config
                    animate_in=AnimateInMode::scroll(true)
                />
            </section>

            <section class="landing-section">
                <h2>"What clients say"</h2>
                <p class="landing-counter">
                    {move || format!("{} reveals started, {} finished", started.get(), finished.get())}
                </p>
                <FadeInList
                    list=TESTIMONIALS.to_vec()
                    key=|item: &Highlight| item.slug
                    render=|item: Highlight| view! { <HighlightCard item=item/> }
                    config=testimonials_config
                    animate_in=AnimateInMode::scroll(false)
                    on_animation_start=Callback::new(move |_| set_started.update(|n| *n += 1))
                    on_animation_end=Callback::new(move |_| set_finished.update(|n| *n += 1))
                />
            </section>

            <section class="landing-section">
                <h2>"Orchestrated"</h2>
                <button class="landing-btn" on:click=move |_| showcase.toggle()>
                    {move || if showcase_pose.get().is_visible() { "Hide cards" } else { "Show cards" }}
                </button>
                <FadeInList
                    list=SHOWCASE.to_vec()
                    key=|item: &Highlight| item.slug
                    render=|item: Highlight| view! { <HighlightCard item=item/> }
                    config=showcase_config
                    controls=showcase
                />
            </section>
        </div>
    }
}

#[component]
fn HighlightCard(item: Highlight) -> impl IntoView {
    view! {
        <article class="landing-card">
            <h3>{item.title}</h3>
            <p>{item.body}</p>
        </article>
    }
}

#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            .landing { font-family: system-ui, sans-serif; color: #1f2933; }
            .landing-hero { min-height: 90vh; display: flex; flex-direction: column; justify-content: center; padding: 0 2rem; }
            .landing-hero h1 { font-size: 3rem; margin-bottom: 2rem; }
            .landing-section { min-height: 80vh; padding: 4rem 2rem; }
            .landing-section h2 { font-size: 2rem; margin-bottom: 1.5rem; }
            .landing-card { padding: 1.5rem; border-radius: 0.75rem; background: #f5f7fa; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08); }
            .landing-card h3 { margin: 0 0 0.5rem; }
            .landing-counter { font-size: 0.875rem; color: #616e7c; }
            .landing-btn { margin-bottom: 1.5rem; padding: 0.75rem 1.5rem; border: none; border-radius: 0.5rem; background: #3f51b5; color: white; cursor: pointer; }
            .fade-in-item { will-change: opacity, transform; }
            "#
        </style>
    }
}
