use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::roi::{
    format_inr, parse_spend, RoiEstimate, DEFAULT_MONTHLY_SPEND, MAX_MONTHLY_SPEND,
    MIN_MONTHLY_SPEND, RECOVERY_PERCENT, SPEND_STEP,
};

#[function_component(RoiCalculator)]
pub fn roi_calculator() -> Html {
    let spend = use_state(|| DEFAULT_MONTHLY_SPEND);
    let estimate = RoiEstimate::from_monthly_spend(*spend);

    let on_input = {
        let spend = spend.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            spend.set(parse_spend(&input.value(), *spend));
        })
    };

    html! {
        <section id="roi" class="roi">
            <style>
                {r#"
                .roi {
                    padding: 6rem 1rem;
                    background: #09090b;
                    border-top: 1px solid #27272a;
                    position: relative;
                    overflow: hidden;
                }
                .roi-glow {
                    position: absolute;
                    top: 0;
                    right: 0;
                    width: 50%;
                    height: 100%;
                    background: rgba(234, 88, 12, 0.05);
                    filter: blur(64px);
                    pointer-events: none;
                }
                .roi-inner { max-width: 80rem; margin: 0 auto; }
                .roi-inner h2 {
                    font-family: 'Archivo Black', sans-serif;
                    font-size: 4.5rem;
                    line-height: 1;
                    color: #fff;
                    text-transform: uppercase;
                    margin: 0 0 1.5rem;
                }
                .roi-outline { color: transparent; -webkit-text-stroke: 1px rgba(255,255,255,0.2); }
                .roi-accent { color: #f97316; }
                .roi-rule { height: 4px; width: 6rem; background: #ea580c; margin: 2rem 0 4rem; }
                .roi-grid {
                    display: grid;
                    grid-template-columns: 5fr 7fr;
                    gap: 3rem;
                    border-top: 1px solid #27272a;
                    padding-top: 3rem;
                }
                .roi-input {
                    background: #18181b;
                    border: 1px solid #27272a;
                    padding: 2rem;
                }
                .roi-label {
                    font-family: var(--font-mono);
                    font-size: 0.75rem;
                    color: #71717a;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    margin-bottom: 1.5rem;
                }
                .roi-amount {
                    font-family: 'Archivo Black', sans-serif;
                    font-size: 2.25rem;
                    color: #fff;
                    margin-bottom: 2.5rem;
                }
                .roi-amount span { font-size: 1.5rem; color: #52525b; margin-right: 0.25rem; }
                .roi-input input[type=range] {
                    width: 100%;
                    height: 4px;
                    background: #27272a;
                    appearance: none;
                    -webkit-appearance: none;
                    outline: none;
                    cursor: pointer;
                }
                .roi-input input[type=range]::-webkit-slider-thumb {
                    -webkit-appearance: none;
                    width: 1.5rem;
                    height: 1.5rem;
                    background: #ea580c;
                    border: 2px solid #000;
                }
                .roi-range-labels {
                    display: flex;
                    justify-content: space-between;
                    margin-top: 1rem;
                    font-family: var(--font-mono);
                    font-size: 0.75rem;
                    color: #52525b;
                }
                .roi-note {
                    margin-top: 2rem;
                    border-left: 2px solid #27272a;
                    padding: 0.5rem 0 0.5rem 1.5rem;
                    font-family: var(--font-mono);
                    color: #a1a1aa;
                    font-size: 0.875rem;
                    line-height: 1.6;
                }
                .roi-note mark {
                    color: #fff;
                    background: rgba(234, 88, 12, 0.2);
                    border-bottom: 1px solid rgba(234, 88, 12, 0.5);
                    padding: 0 0.25rem;
                }
                .roi-results { display: flex; flex-direction: column; gap: 1rem; }
                .roi-card {
                    background: rgba(24, 24, 27, 0.3);
                    border: 1px solid #27272a;
                    padding: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .roi-card-label {
                    display: block;
                    font-family: var(--font-mono);
                    font-size: 0.75rem;
                    color: #71717a;
                    text-transform: uppercase;
                    margin-bottom: 0.5rem;
                }
                .roi-card-value { font-family: 'Archivo Black', sans-serif; font-size: 3rem; color: #d4d4d8; }
                .roi-card.annual { background: #fff; color: #000; padding: 2.5rem; }
                .roi-card.annual .roi-card-value { font-size: 4.5rem; color: #000; letter-spacing: -0.05em; }
                .roi-margin {
                    background: #000;
                    color: #fff;
                    padding: 0.5rem 1rem;
                    font-family: var(--font-mono);
                    font-size: 0.75rem;
                    text-transform: uppercase;
                }
                .roi-margin span { color: #4ade80; }
                .roi-card.five-year { opacity: 0.6; padding: 1.5rem; justify-content: flex-start; gap: 1.5rem; transition: opacity 0.3s; }
                .roi-card.five-year:hover { opacity: 1; }
                .roi-card.five-year .roi-card-value { font-size: 1.25rem; }
                @media (max-width: 1024px) {
                    .roi-grid { grid-template-columns: 1fr; }
                    .roi-inner h2 { font-size: 3rem; }
                    .roi-card.annual .roi-card-value { font-size: 3rem; }
                }
                "#}
            </style>
            <div class="roi-glow"></div>
            <div class="roi-inner">
                <h2>
                    {"Do The "}<span class="roi-outline">{"Math"}</span>{"."}
                    <br/>
                    {"See The "}<span class="roi-accent">{"Profit"}</span>{"."}
                </h2>
                <div class="roi-rule"></div>

                <div class="roi-grid">
                    <div>
                        <div class="roi-input">
                            <div class="roi-label">{"Input: Monthly Spend"}</div>
                            <div class="roi-amount">
                                <span>{"₹"}</span>{format_inr(estimate.monthly_spend)}
                            </div>
                            <input
                                type="range"
                                min={MIN_MONTHLY_SPEND.to_string()}
                                max={MAX_MONTHLY_SPEND.to_string()}
                                step={SPEND_STEP.to_string()}
                                value={estimate.monthly_spend.to_string()}
                                oninput={on_input}
                            />
                            <div class="roi-range-labels">
                                <span>{"₹25k"}</span>
                                <span>{"₹5L"}</span>
                            </div>
                        </div>
                        <p class="roi-note">
                            {"By optimizing supply chains, reducing kitchen waste and aligning correct menu pricing, our \"Food Costing & P&L Management\" modules typically recovers upto "}
                            <mark>{format!("{}% of lost revenue", RECOVERY_PERCENT)}</mark>
                            {" within the first 90 days."}
                        </p>
                    </div>

                    <div class="roi-results">
                        <div class="roi-card">
                            <div>
                                <span class="roi-card-label">{"Est. Monthly Recovery"}</span>
                                <span class="roi-card-value">{format!("₹{}", format_inr(estimate.monthly))}</span>
                            </div>
                        </div>

                        <div class="roi-card annual">
                            <div>
                                <span class="roi-card-label">{"Annual Projected Savings"}</span>
                                <span class="roi-card-value">{format!("₹{}", format_inr(estimate.annual))}</span>
                            </div>
                            <div class="roi-margin">
                                <span>{"↗ "}</span>{format!("+{}% Margin", RECOVERY_PERCENT)}
                            </div>
                        </div>

                        <div class="roi-card five-year">
                            <div>
                                <span class="roi-card-label">{"5-Year Runway Impact"}</span>
                                <span class="roi-card-value">
                                    {format!("Total Capital Reclaimed: ₹{}", format_inr(estimate.five_year))}
                                </span>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
