use leptos::prelude::*;
use sentinel_reveal::Section;

use super::SectionHeader;
use crate::reveal::Reveal;

#[component]
pub fn UseCases(cases: Vec<Section>) -> impl IntoView {
    view! {
        <section class="section section-dark">
            <div class="container">
                <SectionHeader title="Real-World Applications" />
                <div class="use-cases-grid">
                    {cases
                        .into_iter()
                        .map(|case| {
                            view! {
                                <Reveal spec=case.animation class="use-case-card">
                                    <h3>{case.title}</h3>
                                    <p>{case.body}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
