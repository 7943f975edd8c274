use leptos::prelude::*;
use sentinel_reveal::Section;

use super::SectionHeader;
use crate::reveal::Reveal;

#[component]
pub fn Roadmap(items: Vec<Section>) -> impl IntoView {
    view! {
        <section id="roadmap" class="section">
            <div class="container">
                <SectionHeader title="Roadmap" />
                <div class="roadmap">
                    {items
                        .into_iter()
                        .map(|item| view! { <RoadmapItem item=item /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn RoadmapItem(item: Section) -> impl IntoView {
    // Shipped milestones carry the checkmark in their title.
    let class = if item.title.ends_with('✅') {
        "roadmap-item completed"
    } else {
        "roadmap-item"
    };

    view! {
        <Reveal spec=item.animation class=class>
            <div class="roadmap-quarter">{item.body}</div>
            <div class="roadmap-content">
                <h3>{item.title}</h3>
                <ul>
                    {item
                        .items
                        .into_iter()
                        .map(|deliverable| view! { <li>{deliverable}</li> })
                        .collect_view()}
                </ul>
            </div>
        </Reveal>
    }
}
