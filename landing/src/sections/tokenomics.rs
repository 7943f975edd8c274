use leptos::prelude::*;
use sentinel_reveal::Section;

use super::SectionHeader;
use crate::reveal::Reveal;

#[component]
pub fn Tokenomics(cards: Vec<Section>) -> impl IntoView {
    // The formula card renders full-width under the token grid.
    let (formula, tokens): (Vec<Section>, Vec<Section>) =
        cards.into_iter().partition(|card| card.id == "token-formula");

    view! {
        <section id="tokenomics" class="section">
            <div class="container">
                <SectionHeader
                    title="Dual-Token Economics"
                    subtitle="Sustainable incentive mechanism for quality threat intelligence"
                />
                <div class="tokenomics-grid">
                    {tokens
                        .into_iter()
                        .map(|card| view! { <TokenCard card=card /> })
                        .collect_view()}
                </div>
                {formula
                    .into_iter()
                    .map(|card| view! { <FormulaCard card=card /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn TokenCard(card: Section) -> impl IntoView {
    view! {
        <Reveal spec=card.animation class="token-card">
            <div class="token-header">
                <h3>{card.title}</h3>
            </div>
            <div class="token-description">
                <p><strong>{card.body}</strong></p>
                <ul>
                    {card
                        .items
                        .into_iter()
                        .map(|item| view! { <li>{item}</li> })
                        .collect_view()}
                </ul>
            </div>
        </Reveal>
    }
}

#[component]
fn FormulaCard(card: Section) -> impl IntoView {
    let formula = card.items.into_iter().next().unwrap_or_default();
    view! {
        <Reveal spec=card.animation class="formula-card">
            <h4>{card.title}</h4>
            <div class="formula">{formula}</div>
            <p>{card.body}</p>
        </Reveal>
    }
}
