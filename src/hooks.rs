use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    js_sys, window, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions,
};
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::cycle::{Cycle, CycleAction};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Latches to `true` the first time `node` crosses `threshold` visibility.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let in_view = use_state(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut teardown: Option<(IntersectionObserver, ObserverCallback)> = None;

                if let Some(element) = node.cast::<Element>() {
                    let setter = in_view.clone();
                    let callback: ObserverCallback = Closure::new(
                        move |entries: js_sys::Array, observer: IntersectionObserver| {
                            let hit = entries.iter().any(|entry| {
                                entry
                                    .unchecked_into::<IntersectionObserverEntry>()
                                    .is_intersecting()
                            });
                            if hit {
                                setter.set(true);
                                observer.disconnect();
                            }
                        },
                    );

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(threshold));

                    match IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(observer) => {
                            observer.observe(&element);
                            teardown = Some((observer, callback));
                        }
                        Err(e) => {
                            // No observer support: just show the section animated.
                            warn!("IntersectionObserver unavailable: {:?}", e);
                            in_view.set(true);
                        }
                    }
                }

                move || {
                    if let Some((observer, _callback)) = teardown {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *in_view
}

/// Drives a [`Cycle`] over `len` items once `visible` turns true.
///
/// With `start_immediately` the first item lights up as soon as the section
/// is visible; otherwise the first tick selects it.
#[hook]
pub fn use_cycling_highlight(
    len: usize,
    period_ms: u32,
    visible: bool,
    start_immediately: bool,
) -> Cycle {
    let cycle = use_reducer(|| Cycle::new(len));

    {
        let cycle = cycle.clone();
        use_effect_with_deps(
            move |(len, visible): &(usize, bool)| {
                cycle.dispatch(CycleAction::SetLen(*len));
                if start_immediately && *visible && *len > 0 {
                    cycle.dispatch(CycleAction::Start);
                }
                || ()
            },
            (len, visible),
        );
    }

    {
        let cycle = cycle.clone();
        let millis = if visible && len > 0 { period_ms } else { 0 };
        use_interval(move || cycle.dispatch(CycleAction::Tick), millis);
    }

    *cycle
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Scrolls one viewport down, used by the hero's scroll indicator.
pub fn scroll_one_viewport() {
    if let Some(window) = window() {
        let height = window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        let options = ScrollToOptions::new();
        options.set_top(height);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth-scrolls to the element matching `selector`. Returns false if it
/// is not on the page.
pub fn scroll_to_selector(selector: &str) -> bool {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(selector).ok().flatten());

    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => false,
    }
}
