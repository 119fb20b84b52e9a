use chrono::{Datelike, Utc};
use gloo_timers::callback::Timeout;
use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::config::PHONE_COUNTRY_CODE;
use crate::hooks::use_in_view;
use crate::lead::{
    LeadAction, LeadField, LeadFormState, SubmitStatus, SERVICE_INTERESTS, SUCCESS_RESET_MS,
};
use crate::store::{self, StoreClient};

#[function_component(ContactFooter)]
pub fn contact_footer() -> Html {
    let section = use_node_ref();
    let revealed = use_in_view(section.clone(), 0.2);
    let state = use_reducer(LeadFormState::default);

    let on_input = |field: LeadField| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(LeadAction::Edit(field, input.value()));
        })
    };

    let on_interest = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            state.dispatch(LeadAction::Edit(LeadField::ServiceInterest, select.value()));
        })
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // dry run against the current state to get the payload
            let Some(lead) = (*state).clone().begin_submit() else { return };
            state.dispatch(LeadAction::Begin);

            let state = state.clone();
            spawn_local(async move {
                let client = StoreClient::from_config();
                let outcome = client.insert(store::LEADS, &[lead]).await;
                match &outcome {
                    Ok(()) => info!("Lead submitted"),
                    Err(e) => error!("Error submitting form: {}", e),
                }
                let succeeded = outcome.is_ok();
                state.dispatch(LeadAction::Finish(outcome));

                if succeeded {
                    Timeout::new(SUCCESS_RESET_MS, move || {
                        state.dispatch(LeadAction::ClearSuccess);
                    })
                    .forget();
                }
            });
        })
    };

    let form = &state.form;
    let locked = state.is_locked();
    let year = Utc::now().year();

    html! {
        <footer id="contact" class="contact" ref={section}>
            <style>
                {r#"
                .contact {
                    background: #fff;
                    padding: 6rem 1rem 3rem;
                    position: relative;
                    overflow: hidden;
                }
                .contact-overlay {
                    position: absolute;
                    inset: 0;
                    background: #ea580c;
                    z-index: 0;
                    transform: scaleX(0);
                    transform-origin: left;
                    transition: transform 1.5s ease-out;
                }
                .contact-overlay.revealed { transform: scaleX(1); }
                .contact-inner { max-width: 80rem; margin: 0 auto; position: relative; z-index: 10; }
                .contact-main { display: flex; gap: 4rem; margin-bottom: 6rem; }
                .contact-main > div { flex: 1; }
                .contact-main h2 {
                    font-family: 'Archivo Black', sans-serif;
                    font-size: 6rem;
                    line-height: 0.9;
                    color: #09090b;
                    margin: 0 0 2rem;
                }
                .contact-main h2 span { color: #fff; }
                .contact-pitch { font-family: var(--font-mono); color: #09090b; font-size: 1.125rem; max-width: 28rem; font-weight: 700; }
                .lead-form-box {
                    background: #09090b;
                    padding: 2rem;
                    border: 4px solid #18181b;
                    box-shadow: 10px 10px 0 0 rgba(24,24,27,1);
                }
                .lead-form { display: flex; flex-direction: column; gap: 1.5rem; }
                .lead-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
                .lead-form label {
                    display: block;
                    color: #71717a;
                    font-family: var(--font-mono);
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    margin-bottom: 0.5rem;
                }
                .lead-form input, .lead-form select {
                    width: 100%;
                    background: #18181b;
                    border: none;
                    border-bottom: 2px solid #27272a;
                    color: #fff;
                    padding: 0.5rem;
                    outline: none;
                    box-sizing: border-box;
                    transition: border-color 0.2s;
                }
                .lead-form input:focus, .lead-form select:focus { border-color: #f97316; }
                .lead-phone { display: flex; background: #18181b; border-bottom: 2px solid #27272a; }
                .lead-phone:focus-within { border-color: #f97316; }
                .lead-phone span { padding: 0.5rem; color: #71717a; font-family: var(--font-mono); user-select: none; }
                .lead-phone input { background: transparent; border: none; }
                .lead-status {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-family: var(--font-mono);
                    font-size: 0.75rem;
                    padding: 0.5rem;
                    word-break: break-all;
                }
                .lead-status.error { color: #ef4444; background: rgba(239,68,68,0.1); border: 1px solid rgba(239,68,68,0.2); }
                .lead-status.success { color: #22c55e; background: rgba(34,197,94,0.1); border: 1px solid rgba(34,197,94,0.2); }
                .lead-submit {
                    position: relative;
                    width: 100%;
                    margin-top: 2rem;
                    padding: 1rem 0;
                    background: #fff;
                    color: #000;
                    font-family: 'Archivo Black', sans-serif;
                    font-size: 1.25rem;
                    text-transform: uppercase;
                    border: none;
                    overflow: hidden;
                    cursor: pointer;
                    transition: color 0.7s;
                }
                .lead-submit .fill {
                    position: absolute;
                    inset: 0;
                    background: #ea580c;
                    transform: scaleX(0);
                    transform-origin: left;
                    transition: transform 0.7s ease-out;
                }
                .lead-submit:hover { color: #fff; }
                .lead-submit:hover .fill { transform: scaleX(1); }
                .lead-submit span.label { position: relative; z-index: 10; }
                .lead-submit:disabled { opacity: 0.5; cursor: not-allowed; }
                .spinner {
                    display: inline-block;
                    width: 1rem;
                    height: 1rem;
                    border: 3px solid rgba(0,0,0,0.3);
                    border-radius: 50%;
                    border-top-color: #000;
                    animation: spin 1s linear infinite;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                .contact-bottom {
                    border-top: 2px solid #09090b;
                    padding-top: 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1.5rem;
                }
                .contact-bottom .mark { font-family: 'Archivo Black', sans-serif; font-size: 1.25rem; color: #09090b; }
                .contact-bottom nav { display: flex; gap: 1rem; }
                .contact-bottom a {
                    font-family: var(--font-mono);
                    font-size: 0.75rem;
                    font-weight: 700;
                    color: #09090b;
                    text-transform: uppercase;
                    text-decoration: none;
                }
                .contact-bottom a:hover { text-decoration: underline; }
                @media (max-width: 1024px) {
                    .contact-main { flex-direction: column; }
                    .contact-main h2 { font-size: 3.75rem; }
                }
                @media (max-width: 768px) {
                    .lead-row.contact-details { grid-template-columns: 1fr; }
                    .contact-bottom { flex-direction: column; }
                }
                "#}
            </style>
            <div class={classes!("contact-overlay", revealed.then(|| "revealed"))}></div>

            <div class="contact-inner">
                <div class="contact-main">
                    <div>
                        <h2>{"HUNGRY"}<br/>{"FOR"}<br/><span>{"SUCCESS?"}</span></h2>
                        <p class="contact-pitch">
                            {"Stop guessing. Start optimizing. Let's build your culinary empire together."}
                        </p>
                    </div>

                    <div class="lead-form-box">
                        <form class="lead-form" onsubmit={on_submit}>
                            <div class="lead-row">
                                <div>
                                    <label>{"Name"}</label>
                                    <input
                                        required={true}
                                        name="name"
                                        type="text"
                                        value={form.name.clone()}
                                        oninput={on_input(LeadField::Name)}
                                    />
                                </div>
                                <div>
                                    <label>{"Brand Name"}</label>
                                    <input
                                        required={true}
                                        name="brandName"
                                        type="text"
                                        value={form.brand_name.clone()}
                                        oninput={on_input(LeadField::BrandName)}
                                    />
                                </div>
                            </div>

                            <div class="lead-row contact-details">
                                <div>
                                    <label>{"Email"}</label>
                                    <input
                                        name="email"
                                        type="email"
                                        value={form.email.clone()}
                                        oninput={on_input(LeadField::Email)}
                                    />
                                </div>
                                <div>
                                    <label>{"Phone"}</label>
                                    <div class="lead-phone">
                                        <span>{PHONE_COUNTRY_CODE}</span>
                                        <input
                                            name="phone"
                                            type="tel"
                                            value={form.phone.clone()}
                                            oninput={on_input(LeadField::Phone)}
                                        />
                                    </div>
                                </div>
                            </div>

                            <div>
                                <label>{"Service Interest"}</label>
                                <select name="serviceInterest" onchange={on_interest}>
                                    {
                                        SERVICE_INTERESTS.iter().map(|option| html! {
                                            <option
                                                key={*option}
                                                value={*option}
                                                selected={form.service_interest == *option}
                                            >
                                                {*option}
                                            </option>
                                        }).collect::<Html>()
                                    }
                                </select>
                            </div>

                            {
                                match &state.status {
                                    SubmitStatus::Error(message) => html! {
                                        <div class="lead-status error">
                                            <span>{"⚠"}</span>
                                            <span>{message}</span>
                                        </div>
                                    },
                                    SubmitStatus::Success => html! {
                                        <div class="lead-status success">
                                            {"✓ Request sent successfully! We'll be in touch."}
                                        </div>
                                    },
                                    _ => html! {},
                                }
                            }

                            <button type="submit" class="lead-submit" disabled={locked}>
                                <span class="label">
                                    if state.status == SubmitStatus::Loading {
                                        {"SENDING "}<span class="spinner"></span>
                                    } else {
                                        {"Send Request"}
                                    }
                                </span>
                                <div class="fill"></div>
                            </button>
                        </form>
                    </div>
                </div>

                <div class="contact-bottom">
                    <span class="mark">{format!("BITEAZE © {}", year)}</span>
                    <nav>
                        <a href="#">{"Privacy Policy"}</a>
                        <a href="#">{"Terms of Service"}</a>
                    </nav>
                </div>
            </div>
        </footer>
    }
}
