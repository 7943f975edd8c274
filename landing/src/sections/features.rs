use leptos::prelude::*;
use sentinel_reveal::Section;

use super::SectionHeader;
use crate::reveal::Reveal;

/// Per-card glyph, keyed off the section id.
fn icon_for(id: &str) -> &'static str {
    match id {
        "feature-realtime-detection" => "⚡",
        "feature-p2p-sharing" => "🌐",
        "feature-blockchain-verified" => "🔒",
        "feature-economic-incentives" => "🪙",
        "feature-privacy-protected" => "🛡",
        "feature-affordable-storage" => "🗄",
        _ => "▪",
    }
}

#[component]
pub fn Features(cards: Vec<Section>) -> impl IntoView {
    view! {
        <section id="features" class="section">
            <div class="container">
                <SectionHeader
                    title="Why SentinelKarma?"
                    subtitle="The first decentralized threat intelligence network built for Web3 RPC infrastructure"
                />
                <div class="features-grid">
                    {cards
                        .into_iter()
                        .map(|card| view! { <FeatureCard card=card /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(card: Section) -> impl IntoView {
    let icon = icon_for(&card.id);
    view! {
        <Reveal spec=card.animation class="feature-card">
            <div class="feature-icon">{icon}</div>
            <h3>{card.title}</h3>
            <p>{card.body}</p>
        </Reveal>
    }
}

#[cfg(test)]
mod tests {
    use super::icon_for;
    use sentinel_reveal::PageContent;

    #[test]
    fn test_every_feature_card_maps_to_a_distinct_icon() {
        let content = PageContent::load().unwrap();
        let icons: Vec<&str> = content
            .features
            .iter()
            .map(|card| icon_for(&card.id))
            .collect();

        assert!(
            !icons.contains(&icon_for("unknown")),
            "a feature card fell through to the fallback glyph"
        );

        let mut unique = icons.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), icons.len(), "feature icons must be distinct");
    }
}
