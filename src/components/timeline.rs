use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{js_sys, Element};
use yew::prelude::*;

use crate::models::TIMELINE_STEPS;
use crate::motion::{timeline_progress, timeline_step};

#[function_component(Timeline)]
pub fn timeline() -> Html {
    let section = use_node_ref();
    let progress = use_state(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |section: &NodeRef| {
                let section = section.clone();
                let window = web_sys::window();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let Some(element) = section.cast::<Element>() else { return };
                    let Some(window) = web_sys::window() else { return };
                    let viewport_height = window
                        .inner_height()
                        .ok()
                        .and_then(|h| h.as_f64())
                        .unwrap_or(0.0);
                    let rect = element.get_bounding_client_rect();
                    progress.set(timeline_progress(viewport_height, rect.top(), rect.height()));
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                // Initial check for a page loaded mid-scroll
                let _ = scroll_callback
                    .as_ref()
                    .unchecked_ref::<js_sys::Function>()
                    .call0(&JsValue::NULL);

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            section.clone(),
        );
    }

    let active_step = timeline_step(*progress, TIMELINE_STEPS.len());
    let bar_style = format!("height: {:.2}%;", *progress * 100.0);

    html! {
        <section class="timeline" ref={section}>
            <style>
                {r#"
                .timeline {
                    padding: 8rem 0;
                    background: #09090b;
                    position: relative;
                    overflow: hidden;
                    border-top: 1px solid #27272a;
                }
                .timeline-grid-bg {
                    position: absolute;
                    inset: 0;
                    background-image:
                        linear-gradient(rgba(255,255,255,0.02) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(255,255,255,0.02) 1px, transparent 1px);
                    background-size: 40px 40px;
                    pointer-events: none;
                }
                .timeline-inner { max-width: 72rem; margin: 0 auto; padding: 0 1rem; position: relative; z-index: 10; }
                .timeline-head { text-align: center; margin-bottom: 6rem; }
                .timeline-pill {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 1rem;
                    padding: 0.25rem 0.75rem;
                    border: 1px solid rgba(249,115,22,0.3);
                    background: rgba(249,115,22,0.1);
                    border-radius: 9999px;
                    font-family: var(--font-mono);
                    color: #f97316;
                    font-size: 0.75rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                }
                .timeline-head h2 {
                    font-family: 'Archivo Black', sans-serif;
                    font-size: 4.5rem;
                    color: #fff;
                    text-transform: uppercase;
                    margin: 0;
                }
                .timeline-head h2 span {
                    background: linear-gradient(90deg, #f97316, #dc2626);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .timeline-head p { color: #71717a; font-family: var(--font-mono); margin-top: 1rem; }
                .timeline-track { position: relative; margin-top: 5rem; }
                .timeline-rail, .timeline-bar {
                    position: absolute;
                    left: 50%;
                    top: 0;
                    width: 4px;
                    transform: translateX(-50%);
                }
                .timeline-rail { bottom: 0; background: #27272a; }
                .timeline-bar {
                    background: linear-gradient(180deg, #f97316, #ea580c, #dc2626);
                    box-shadow: 0 0 15px rgba(234,88,12,0.5);
                    transition: height 0.1s ease-out;
                }
                .timeline-steps { display: flex; flex-direction: column; gap: 8rem; }
                .timeline-step { position: relative; display: flex; gap: 3rem; align-items: center; }
                .timeline-step.even { flex-direction: row-reverse; }
                .step-text { flex: 1; opacity: 0.2; transform: translateY(2.5rem); transition: all 0.5s; }
                .timeline-step.odd .step-text { text-align: right; }
                .timeline-step.reached .step-text { opacity: 1; transform: translateY(0); }
                .step-status {
                    display: inline-block;
                    margin-bottom: 0.5rem;
                    font-family: var(--font-mono);
                    font-size: 10px;
                    letter-spacing: 0.1em;
                    padding: 0.25rem 0.5rem;
                    border: 1px solid #27272a;
                    color: #52525b;
                }
                .timeline-step.reached .step-status { border-color: rgba(249,115,22,0.5); color: #fb923c; background: rgba(249,115,22,0.1); }
                .step-text h3 { font-family: 'Archivo Black', sans-serif; font-size: 3rem; color: #fff; margin: 0 0 1rem; }
                .step-text p { font-family: var(--font-mono); color: #a1a1aa; line-height: 1.6; }
                .step-tech {
                    display: inline-block;
                    font-family: var(--font-mono);
                    font-size: 0.75rem;
                    padding: 0.5rem;
                    background: #000;
                    border-left: 2px solid #27272a;
                    color: #3f3f46;
                }
                .timeline-step.reached .step-tech { border-color: #f97316; color: #22c55e; }
                .step-node {
                    position: absolute;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 10;
                    width: 5rem;
                    height: 5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .step-node-ring {
                    position: absolute;
                    inset: 0;
                    border: 2px dashed #f97316;
                    border-radius: 0.5rem;
                    animation: spin 10s linear infinite;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                .step-diamond {
                    width: 3.5rem;
                    height: 3.5rem;
                    transform: rotate(45deg);
                    border: 2px solid #3f3f46;
                    background: #18181b;
                    color: #3f3f46;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: all 0.3s;
                }
                .step-diamond span { transform: rotate(-45deg); font-size: 1.5rem; }
                .timeline-step.reached .step-diamond {
                    background: #09090b;
                    border-color: #f97316;
                    color: #f97316;
                    box-shadow: 0 0 20px rgba(234,88,12,0.3);
                }
                .step-spacer { flex: 1; }
                @media (max-width: 768px) {
                    .timeline-rail, .timeline-bar, .step-node { left: 2rem; }
                    .timeline-step, .timeline-step.even { flex-direction: column; }
                    .step-text { padding-left: 5rem; text-align: left !important; }
                    .step-spacer { display: none; }
                    .timeline-head h2 { font-size: 3rem; }
                }
                "#}
            </style>
            <div class="timeline-grid-bg"></div>
            <div class="timeline-inner">
                <div class="timeline-head">
                    <div class="timeline-pill">{"● Our Process"}</div>
                    <h2>{"Concept. Created. "}<span>{"Conquered."}</span></h2>
                    <p>{"Executing the roadmap. From physical foundation to digital dominance."}</p>
                </div>

                <div class="timeline-track">
                    <div class="timeline-rail"></div>
                    <div class="timeline-bar" style={bar_style}></div>

                    <div class="timeline-steps">
                        {
                            TIMELINE_STEPS.iter().enumerate().map(|(index, step)| {
                                let reached = index <= active_step;
                                let current = index == active_step;
                                html! {
                                    <div key={step.title} class={classes!(
                                        "timeline-step",
                                        if index % 2 == 0 { "even" } else { "odd" },
                                        reached.then(|| "reached"),
                                    )}>
                                        <div class="step-text">
                                            <div class="step-status">
                                                { if reached { "STATUS: ONLINE" } else { "STATUS: PENDING" } }
                                            </div>
                                            <h3>{step.title}</h3>
                                            <p>{step.desc}</p>
                                            <div class="step-tech">{format!("> {}...", step.tech)}</div>
                                        </div>
                                        <div class="step-node">
                                            if current {
                                                <div class="step-node-ring"></div>
                                            }
                                            <div class="step-diamond"><span>{step.icon.glyph()}</span></div>
                                        </div>
                                        <div class="step-spacer"></div>
                                    </div>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}
