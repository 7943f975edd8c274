use leptos::prelude::*;
use sentinel_reveal::Section;

use super::{VERSION, WHITEPAPER_PATH};

#[component]
pub fn Nav(section: Section) -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="nav-container">
                <a href="/" class="nav-logo">
                    <img src="/logo.png" alt="SentinelKarma logo" class="logo-icon" />
                    <span class="logo-text">{section.title}</span>
                    <span class="nav-version">{VERSION}</span>
                </a>
                <div class="nav-links">
                    <a href="#features">"Features"</a>
                    <a href="#how-it-works">"How It Works"</a>
                    <a href="#tokenomics">"Tokenomics"</a>
                    <a href="#roadmap">"Roadmap"</a>
                    <a href=WHITEPAPER_PATH target="_blank" class="btn-primary">
                        "Whitepaper"
                    </a>
                </div>
            </div>
        </nav>
    }
}
