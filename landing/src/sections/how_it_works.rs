use leptos::prelude::*;
use sentinel_reveal::Section;

use super::SectionHeader;
use crate::reveal::Reveal;

#[component]
pub fn HowItWorks(steps: Vec<Section>) -> impl IntoView {
    view! {
        <section id="how-it-works" class="section section-dark">
            <div class="container">
                <SectionHeader
                    title="How It Works"
                    subtitle="Three-layer architecture for decentralized threat intelligence"
                />
                <div class="architecture-flow">
                    {steps
                        .into_iter()
                        .enumerate()
                        .map(|(index, step)| view! { <FlowStep number={index + 1} step=step /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FlowStep(number: usize, step: Section) -> impl IntoView {
    view! {
        <Reveal spec=step.animation class="flow-step">
            <div class="flow-number">{number}</div>
            <div class="flow-content">
                <h3>{step.title}</h3>
                <p>{step.body}</p>
                <ul>
                    {step
                        .items
                        .into_iter()
                        .map(|item| view! { <li>{item}</li> })
                        .collect_view()}
                </ul>
            </div>
        </Reveal>
    }
}
