use leptos::prelude::*;
use sentinel_reveal::Section;

use super::{GITHUB_URL, PROGRAM_ID, WHITEPAPER_PATH};

#[component]
pub fn Footer(section: Section) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-content">
                    <div class="footer-brand">
                        <div class="footer-logo">
                            <img src="/logo.png" alt="SentinelKarma logo" />
                            <span>{section.title}</span>
                        </div>
                        <p>{section.body}</p>
                    </div>
                    <div class="footer-links">
                        <div class="footer-column">
                            <h4>"Product"</h4>
                            <a href="#features">"Features"</a>
                            <a href="#how-it-works">"How It Works"</a>
                            <a href="#tokenomics">"Tokenomics"</a>
                            <a href="#roadmap">"Roadmap"</a>
                        </div>
                        <div class="footer-column">
                            <h4>"Resources"</h4>
                            <a href=WHITEPAPER_PATH target="_blank">"Whitepaper"</a>
                            <a href="https://docs.sentinelkarma.io">"Documentation"</a>
                            <a href=GITHUB_URL target="_blank" rel="noopener noreferrer">"GitHub"</a>
                            <a
                                href="https://arena.colosseum.org/projects/explore/sentinel-karma"
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                "Colosseum Arena"
                            </a>
                        </div>
                        <div class="footer-column">
                            <h4>"Community"</h4>
                            <a href="https://discord.gg/sentinelkarma">"Discord"</a>
                            <a href="https://x.com/SentinelKarma" target="_blank" rel="noopener noreferrer">
                                "X (Twitter)"
                            </a>
                            <a href="mailto:team@sentinelkarma.io">"Contact"</a>
                        </div>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>"© 2025 SentinelKarma Contributors. MIT License."</p>
                    <p>"Program ID: " {PROGRAM_ID}</p>
                </div>
            </div>
        </footer>
    }
}
