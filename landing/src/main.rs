// SentinelKarma Landing Page - Leptos 0.8 Edition

mod banner;
mod reveal;
mod sections;

use leptos::prelude::*;
use sentinel_reveal::PageContent;
use wasm_bindgen::JsValue;

use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    banner::print_console_banner();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let content = match PageContent::load() {
        Ok(content) => content,
        Err(err) => {
            // The table is compiled in, so a rejected spec is a build bug.
            // Surface it on the console and render nothing.
            web_sys::console::error_1(&JsValue::from_str(&format!(
                "content table rejected: {err}"
            )));
            return ().into_any();
        }
    };

    view! {
        <Nav section=content.navigation />
        <main>
            <Hero section=content.hero />
            <Features cards=content.features />
            <HowItWorks steps=content.steps />
            <Tokenomics cards=content.tokens />
            <UseCases cases=content.use_cases />
            <Roadmap items=content.roadmap />
            <Cta section=content.call_to_action />
        </main>
        <Footer section=content.footer />
    }
    .into_any()
}
