use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::config;
use crate::hooks::{scroll_to_selector, scroll_to_top};
use crate::motion::{scrolled_past, NAV_SCROLL_THRESHOLD};

const NAV_LINKS: [(&str, &str); 4] = [
    ("Expertise", "#services"),
    ("Portfolio", "#portfolio"),
    ("ROI", "#roi"),
    ("Team", "#team"),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let logo_failed = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let scrolled = scrolled_past(scroll_y, NAV_SCROLL_THRESHOLD);

    let jump_to = {
        let menu_open = menu_open.clone();
        move |target: &'static str| {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                if scroll_to_selector(target) {
                    menu_open.set(false);
                }
            })
        }
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let on_logo_error = {
        let logo_failed = logo_failed.clone();
        Callback::from(move |_: Event| {
            // only fall back once, the local file is the last resort
            if !*logo_failed {
                logo_failed.set(true);
            }
        })
    };

    let logo_src = if *logo_failed {
        config::LOCAL_LOGO_PATH.to_string()
    } else {
        config::remote_logo_url()
    };

    html! {
        <nav class={classes!("site-nav", scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                .site-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    transition: all 0.3s;
                    background: transparent;
                }
                .site-nav.scrolled {
                    background: rgba(9, 9, 11, 0.9);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid #27272a;
                }
                .nav-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    cursor: pointer;
                }
                .nav-logo-box {
                    width: 2.5rem;
                    height: 2.5rem;
                    background: #fff;
                    overflow: hidden;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: transform 0.3s;
                }
                .nav-brand:hover .nav-logo-box { transform: rotate(12deg); }
                .nav-logo-box img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transform: scale(1.25);
                }
                .nav-wordmark {
                    font-family: 'Archivo Black', sans-serif;
                    font-size: 1.5rem;
                    letter-spacing: -0.05em;
                    color: #ea580c;
                }
                .nav-links {
                    display: flex;
                    align-items: baseline;
                    gap: 2rem;
                }
                .nav-link {
                    font-family: var(--font-mono);
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #fafaf9;
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .nav-link:hover { color: #f97316; }
                .nav-cta {
                    background: #fff;
                    color: #000;
                    padding: 0.5rem 1.5rem;
                    font-family: var(--font-mono);
                    font-weight: 700;
                    font-size: 0.875rem;
                    text-decoration: none;
                    box-shadow: 4px 4px 0 0 rgba(234, 88, 12, 1);
                    transition: all 0.2s;
                }
                .nav-cta:hover { background: #ea580c; color: #fff; }
                .nav-burger {
                    display: none;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 2rem;
                    cursor: pointer;
                }
                .nav-mobile {
                    background: #09090b;
                    border-bottom: 1px solid #27272a;
                    padding: 0.5rem;
                }
                .nav-mobile a {
                    display: block;
                    padding: 1rem 0.75rem;
                    text-align: center;
                    font-family: 'Archivo Black', sans-serif;
                    font-size: 1.25rem;
                    color: #fafaf9;
                    text-decoration: none;
                }
                .nav-mobile a:hover { background: #18181b; color: #f97316; }
                .nav-mobile .nav-mobile-cta {
                    margin-top: 1rem;
                    background: #ea580c;
                    color: #fff;
                }
                @media (max-width: 768px) {
                    .nav-links { display: none; }
                    .nav-burger { display: block; }
                }
                "#}
            </style>
            <div class="nav-inner">
                <div class="nav-brand" onclick={Callback::from(|_: MouseEvent| scroll_to_top())}>
                    <div class="nav-logo-box">
                        <img src={logo_src} onerror={on_logo_error} alt="BITEAZE Logo" />
                    </div>
                    <span class="nav-wordmark">{"BITEAZE"}</span>
                </div>

                <div class="nav-links">
                    {
                        NAV_LINKS.iter().map(|(name, href)| html! {
                            <a key={*name} href={*href} class="nav-link" onclick={jump_to(*href)}>
                                {*name}
                            </a>
                        }).collect::<Html>()
                    }
                    <a href="#contact" class="nav-cta" onclick={jump_to("#contact")}>
                        {"START PROJECT"}
                    </a>
                </div>

                <button class="nav-burger" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            if *menu_open {
                <div class="nav-mobile">
                    {
                        NAV_LINKS.iter().map(|(name, href)| html! {
                            <a key={*name} href={*href} onclick={jump_to(*href)}>{*name}</a>
                        }).collect::<Html>()
                    }
                    <a href="#contact" class="nav-mobile-cta" onclick={jump_to("#contact")}>
                        {"LET'S COOK"}
                    </a>
                </div>
            }
        </nav>
    }
}
