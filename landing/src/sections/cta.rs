use leptos::prelude::*;
use sentinel_reveal::Section;

use super::{GITHUB_URL, WHITEPAPER_PATH};
use crate::reveal::Reveal;

#[component]
pub fn Cta(section: Section) -> impl IntoView {
    view! {
        <section class="section cta-section">
            <Reveal spec=section.animation class="cta-content">
                <h2>{section.title}</h2>
                <p>{section.body}</p>
                <div class="cta-buttons">
                    <a href=WHITEPAPER_PATH target="_blank" class="btn-large btn-primary">
                        "Read Whitepaper"
                    </a>
                    <a href=GITHUB_URL target="_blank" rel="noopener noreferrer" class="btn-large btn-secondary">
                        "View on GitHub"
                    </a>
                </div>
            </Reveal>
        </section>
    }
}
