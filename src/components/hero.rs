use web_sys::{window, MouseEvent};
use yew::prelude::*;

use crate::hooks::scroll_one_viewport;
use crate::motion::{parallax_offset, HERO_PARALLAX_PX};

const MARQUEE_REPEATS: usize = 20;

#[function_component(Hero)]
pub fn hero() -> Html {
    let drift = use_state(|| (0.0_f64, 0.0_f64));

    let on_mouse_move = {
        let drift = drift.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(window) = window() else { return };
            let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            drift.set((
                parallax_offset(e.client_x() as f64, width, HERO_PARALLAX_PX),
                parallax_offset(e.client_y() as f64, height, HERO_PARALLAX_PX),
            ));
        })
    };

    let on_mouse_leave = {
        let drift = drift.clone();
        Callback::from(move |_: MouseEvent| drift.set((0.0, 0.0)))
    };

    let (dx, dy) = *drift;
    let blob_style = format!("transform: translate({:.1}px, {:.1}px);", dx, dy);
    let blob_style_inverse = format!("transform: translate({:.1}px, {:.1}px);", -dx, -dy);

    html! {
        <section class="hero" onmousemove={on_mouse_move} onmouseleave={on_mouse_leave}>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 90vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    overflow: hidden;
                    background: #09090b;
                    padding-top: 120px;
                }
                .hero-backdrop {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                    pointer-events: none;
                    overflow: hidden;
                }
                .hero-grid {
                    position: absolute;
                    inset: -100%;
                    opacity: 0.2;
                    background-image:
                        linear-gradient(rgba(255,255,255,0.08) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(255,255,255,0.08) 1px, transparent 1px);
                    background-size: 80px 80px;
                    transform: perspective(1000px) rotateX(60deg) scale(2);
                    animation: grid-flow 3s linear infinite;
                }
                @keyframes grid-flow {
                    0% { background-position: 0 0; }
                    100% { background-position: 0 80px; }
                }
                .hero-blob-layer {
                    position: absolute;
                    inset: 0;
                    transition: transform 0.6s ease-out;
                }
                .hero-blob {
                    position: absolute;
                    border-radius: 9999px;
                    mix-blend-mode: screen;
                    animation: blob-float 12s infinite ease-in-out;
                }
                .hero-blob.one {
                    top: -10%; left: -10%;
                    width: 700px; height: 700px;
                    background: rgba(234, 88, 12, 0.3);
                    filter: blur(100px);
                }
                .hero-blob.two {
                    bottom: -10%; right: -10%;
                    width: 600px; height: 600px;
                    background: rgba(220, 38, 38, 0.2);
                    filter: blur(80px);
                    animation-delay: 2s;
                }
                @keyframes blob-float {
                    0% { transform: translate(0, 0) scale(1); }
                    33% { transform: translate(60px, -100px) scale(1.15); }
                    66% { transform: translate(-50px, 50px) scale(0.9); }
                    100% { transform: translate(0, 0) scale(1); }
                }
                .hero-vignette {
                    position: absolute;
                    inset: 0;
                    background: radial-gradient(circle at center, transparent 0%, rgba(9,9,11,0.95) 80%);
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    max-width: 80rem;
                    width: 100%;
                    padding: 0 1.5rem 8rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                }
                .hero-badge {
                    margin-bottom: 3rem;
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    border: 1px solid #3f3f46;
                    background: rgba(24, 24, 27, 0.8);
                    padding: 0.5rem 1.25rem;
                    border-radius: 9999px;
                    font-family: var(--font-mono);
                    font-size: 0.75rem;
                    letter-spacing: 0.2em;
                    color: #d4d4d8;
                    font-weight: 700;
                    animation: hero-fade-in 1.5s ease-out forwards;
                }
                .hero-badge-dot {
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 9999px;
                    background: #f97316;
                    box-shadow: 0 0 0 0 rgba(251, 146, 60, 0.75);
                    animation: ping 1.5s infinite;
                }
                @keyframes ping {
                    0% { box-shadow: 0 0 0 0 rgba(251, 146, 60, 0.75); }
                    100% { box-shadow: 0 0 0 10px rgba(251, 146, 60, 0); }
                }
                .hero-title {
                    font-family: 'Archivo Black', sans-serif;
                    font-size: 8.5vw;
                    line-height: 0.85;
                    letter-spacing: -0.025em;
                    color: #fff;
                    margin: 0 0 3rem;
                    user-select: none;
                }
                .hero-line { overflow: hidden; }
                .hero-line span.reveal {
                    display: block;
                    animation: reveal-up 2s cubic-bezier(0.16, 1, 0.3, 1) both;
                }
                .hero-accent { color: #f97316; }
                .hero-into {
                    margin-left: 1rem;
                    opacity: 0.5;
                    font-size: 6vw;
                    -webkit-text-stroke: 1px rgba(255,255,255,0.2);
                    color: transparent;
                }
                .hero-empires { font-style: italic; color: #ea580c; }
                @keyframes reveal-up {
                    0% { transform: translateY(110%); }
                    100% { transform: translateY(0); }
                }
                @keyframes hero-fade-in {
                    0% { opacity: 0; transform: translateY(10px); }
                    100% { opacity: 1; transform: translateY(0); }
                }
                .hero-subtitle {
                    max-width: 48rem;
                    color: #a1a1aa;
                    font-family: var(--font-mono);
                    font-size: 1.125rem;
                    line-height: 1.6;
                    animation: reveal-up 2s cubic-bezier(0.16, 1, 0.3, 1) both;
                    animation-delay: 1.2s;
                }
                .hero-scroll {
                    position: absolute;
                    bottom: 4rem;
                    left: 50%;
                    transform: translateX(-50%);
                    color: #f97316;
                    opacity: 0.4;
                    font-size: 1.75rem;
                    cursor: pointer;
                    background: none;
                    border: none;
                    animation: bounce-slow 3s ease-in-out infinite;
                }
                @keyframes bounce-slow {
                    0%, 100% { transform: translate(-50%, 0); }
                    50% { transform: translate(-50%, 10px); }
                }
                .hero-marquee {
                    position: absolute;
                    bottom: 0;
                    width: 100%;
                    padding: 1.25rem 0;
                    background: rgba(9, 9, 11, 0.8);
                    border-top: 1px solid #27272a;
                    border-bottom: 1px solid #27272a;
                    overflow: hidden;
                    z-index: 20;
                }
                .hero-marquee-track {
                    display: flex;
                    white-space: nowrap;
                    animation: scroll-marquee 50s linear infinite;
                }
                .hero-marquee-item {
                    padding: 0 3rem;
                    font-family: var(--font-mono);
                    font-size: 10px;
                    color: #71717a;
                    letter-spacing: 0.3em;
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .marquee-diamond {
                    width: 6px;
                    height: 6px;
                    background: #ea580c;
                    transform: rotate(45deg);
                }
                .marquee-square { width: 6px; height: 6px; background: #27272a; }
                @keyframes scroll-marquee {
                    0% { transform: translateX(0); }
                    100% { transform: translateX(-50%); }
                }
                @media (max-width: 768px) {
                    .hero { min-height: 75vh; padding-top: 100px; }
                    .hero-title { font-size: 10vw; }
                    .hero-subtitle { font-size: 11px; }
                    .hero-scroll { display: none; }
                }
                "#}
            </style>

            <div class="hero-backdrop">
                <div class="hero-grid"></div>
                <div class="hero-blob-layer" style={blob_style}>
                    <div class="hero-blob one"></div>
                </div>
                <div class="hero-blob-layer" style={blob_style_inverse}>
                    <div class="hero-blob two"></div>
                </div>
                <div class="hero-vignette"></div>
            </div>

            <div class="hero-content">
                <div class="hero-badge">
                    <span class="hero-badge-dot"></span>
                    {"ACCEPTING NEW PROJECTS"}
                </div>

                <h1 class="hero-title">
                    <div class="hero-line">
                        <span class="reveal" style="animation-delay: 0.2s">{"TRANSFORMING"}</span>
                    </div>
                    <div class="hero-line">
                        <span class="reveal" style="animation-delay: 0.5s">
                            <span class="hero-accent">{"FLAVORS"}</span>
                            <span class="hero-into">{"INTO"}</span>
                        </span>
                    </div>
                    <div class="hero-line">
                        <span class="reveal hero-empires" style="animation-delay: 0.8s">{"EMPIRES"}</span>
                    </div>
                </h1>

                <p class="hero-subtitle">
                    {"WE ARE THE ARCHITECTS OF TASTE AND THE ENGINEERS OF PROFIT. "}
                    {"INTEGRATING NEUTRAL DESIGN WITH RADICAL OPERATIONAL OPTIMIZATION."}
                </p>

                <button class="hero-scroll" onclick={Callback::from(|_: MouseEvent| scroll_one_viewport())}>
                    {"⌄"}
                </button>
            </div>

            <div class="hero-marquee">
                <div class="hero-marquee-track">
                    {
                        (0..MARQUEE_REPEATS).map(|i| html! {
                            <div key={i} class="hero-marquee-item">
                                <span class="marquee-diamond"></span>
                                {"MENU_ENGINEERING"}
                                <span class="marquee-square"></span>
                                {"P&L_RECOVERY"}
                                <span class="marquee-diamond"></span>
                                {"BRAND_INCUBATION"}
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
