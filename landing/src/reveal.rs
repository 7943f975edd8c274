//! DOM wiring for the viewport-reveal engine.
//!
//! [`Reveal`] wraps one animated section node. A `requestAnimationFrame` loop
//! samples the node's bounding box and the window size each frame, feeds them
//! to the section's [`RevealController`], and writes the sampled visual state
//! back as an inline opacity/transform style. All policy (latching, delays,
//! interpolation) lives in `sentinel-reveal`; this module only moves geometry
//! in and styles out.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::html;
use leptos::prelude::*;
use sentinel_reveal::{AnimationSpec, Rect, RevealController, RevealPhase, VisualState};

/// Inline style string for a sampled visual state.
fn style_of(state: &VisualState) -> String {
    format!(
        "opacity: {}; transform: translate({}px, {}px) scale({});",
        state.opacity, state.offset_x, state.offset_y, state.scale
    )
}

/// The visible window region, viewport-relative (so origin is always 0,0).
fn viewport_rect(window: &web_sys::Window) -> Option<Rect> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Rect::new(0.0, 0.0, width, height))
}

/// The node's bounding box; `getBoundingClientRect` is already
/// viewport-relative, matching [`viewport_rect`].
fn bounding_rect(el: &web_sys::Element) -> Rect {
    let rect = el.get_bounding_client_rect();
    Rect::new(rect.x(), rect.y(), rect.width(), rect.height())
}

fn now_seconds(window: &web_sys::Window) -> f64 {
    window
        .performance()
        .map(|perf| perf.now() / 1000.0)
        .unwrap_or(0.0)
}

/// Wraps one animated section and drives its entrance animation from real
/// viewport geometry. Each `Reveal` owns its own controller, so sections
/// reveal independently; staggering comes only from each spec's delay.
#[component]
pub fn Reveal(
    spec: AnimationSpec,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let (style, set_style) = signal(style_of(&spec.initial()));
    let controller = Rc::new(RefCell::new(RevealController::new(spec)));
    let started = Rc::new(Cell::new(false));

    Effect::new(move || {
        if started.get() {
            return;
        }
        if let Some(el) = node.get() {
            started.set(true);
            run_frame_loop(
                controller.clone(),
                el.into(),
                set_style,
                Rc::new(RefCell::new(String::new())),
            );
        }
    });

    view! {
        <div node_ref=node class=class style=move || style.get()>
            {children()}
        </div>
    }
}

/// One sampling step per animation frame. The loop ends once a latched
/// section has fully settled; until then it keeps watching for the section to
/// scroll into view.
fn run_frame_loop(
    controller: Rc<RefCell<RevealController>>,
    el: web_sys::Element,
    set_style: WriteSignal<String>,
    last_style: Rc<RefCell<String>>,
) {
    request_animation_frame(move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(viewport) = viewport_rect(&window) else {
            return;
        };
        let now = now_seconds(&window);

        let (next, settled) = {
            let mut ctrl = controller.borrow_mut();
            ctrl.observe(bounding_rect(&el), viewport, now);
            let next = style_of(&ctrl.state_at(now));
            let settled = ctrl.spec().trigger_once() && ctrl.phase_at(now) == RevealPhase::Revealed;
            (next, settled)
        };

        let changed = *last_style.borrow() != next;
        if changed {
            last_style.replace(next.clone());
            // A failed set means the component was disposed; stop sampling.
            if set_style.try_set(next).is_some() {
                return;
            }
        }

        if !settled {
            run_frame_loop(controller, el, set_style, last_style);
        }
    });
}
