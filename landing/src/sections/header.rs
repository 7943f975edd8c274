use leptos::prelude::*;
use sentinel_reveal::AnimationSpec;

use crate::reveal::Reveal;

/// Shared section heading. Fades in once when scrolled into view, like the
/// cards below it but without any offset.
#[component]
pub fn SectionHeader(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <Reveal spec=AnimationSpec::fade() class="section-header">
            <h2 class="section-title">{title}</h2>
            {subtitle.map(|text| view! { <p class="section-subtitle">{text}</p> })}
        </Reveal>
    }
}
