use leptos::prelude::*;
use sentinel_reveal::Section;

use super::{GITHUB_URL, VERSION};
use crate::reveal::Reveal;

#[component]
pub fn Hero(section: Section) -> impl IntoView {
    // The accent line renders as the gradient second row of the title.
    let accent = section.items.first().cloned().unwrap_or_default();

    view! {
        <section class="hero">
            <Reveal spec=section.animation class="hero-content">
                <div class="hero-badge">
                    <span>{VERSION}</span>
                    <span class="separator">"•"</span>
                    <span>"Live on Solana Devnet"</span>
                </div>
                <h1 class="hero-title">
                    {section.title}
                    <br />
                    <span class="gradient-text">{accent}</span>
                </h1>
                <p class="hero-description">{section.body}</p>
                <div class="hero-buttons">
                    <a href="#how-it-works" class="btn-large btn-primary">
                        "Get Started →"
                    </a>
                    <a href=GITHUB_URL target="_blank" rel="noopener noreferrer" class="btn-large btn-secondary">
                        "View on GitHub"
                    </a>
                </div>
                <div class="hero-stats">
                    <Stat value="70%" label="Reduced Abuse" />
                    <Stat value="$0-5" label="Cost per Month" />
                    <Stat value="<400ms" label="Detection Time" />
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn Stat(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat-value">{value}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}
