use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::cycle::{Cycle, PORTFOLIO_PERIOD_MS};
use crate::hooks::{use_cycling_highlight, use_in_view};
use crate::models::{position_label, PortfolioEntry, PortfolioRow, IDLE_SECTION_COLOR};
use crate::store::{self, Order, StoreClient};

pub const LOADING_TEXT: &str = "Synchronizing Success Data...";
pub const OFFLINE_TEXT: &str = "Success database currently offline.";

fn placeholder_text(is_loading: bool) -> &'static str {
    if is_loading {
        LOADING_TEXT
    } else {
        OFFLINE_TEXT
    }
}

fn section_color(items: &[PortfolioEntry], cycle: &Cycle) -> &'static str {
    cycle
        .index()
        .and_then(|i| items.get(i))
        .map(|item| item.color)
        .unwrap_or(IDLE_SECTION_COLOR)
}

/// "module 3/7"; shows 0 before the sequence starts.
fn progress_label(cycle: &Cycle, len: usize) -> String {
    let current = cycle.index().map_or(0, |i| i + 1);
    format!("module {}/{}", current, len)
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let items = use_state(Vec::<PortfolioEntry>::new);
    let is_loading = use_state(|| true);
    let section = use_node_ref();
    let visible = use_in_view(section.clone(), 0.1);
    let cycle = use_cycling_highlight(items.len(), PORTFOLIO_PERIOD_MS, visible, true);

    {
        let items = items.clone();
        let is_loading = is_loading.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let client = StoreClient::from_config();
                    match client
                        .select::<PortfolioRow>(store::PORTFOLIO, Order::asc("created_at"))
                        .await
                    {
                        Ok(rows) => {
                            info!("Loaded {} portfolio entries", rows.len());
                            items.set(PortfolioEntry::from_rows(rows));
                        }
                        Err(e) => error!("Portfolio fetch error: {}", e),
                    }
                    is_loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    let background = format!("background-color: {};", section_color(&items, &cycle));

    html! {
        <section id="portfolio" class="portfolio" ref={section} style={background}>
            <style>
                {r#"
                .portfolio {
                    padding: 6rem 1rem;
                    position: relative;
                    border-top: 1px solid #27272a;
                    min-height: 600px;
                    overflow: hidden;
                    transition: background-color 1s ease-in-out;
                }
                .portfolio-scanline {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 4px;
                    background: rgba(255,255,255,0.05);
                    animation: pulse 2s infinite;
                    pointer-events: none;
                }
                @keyframes pulse { 50% { opacity: 0.5; } }
                .portfolio-inner { max-width: 80rem; margin: 0 auto; position: relative; z-index: 10; }
                .portfolio-head {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    flex-wrap: wrap;
                    margin-bottom: 4rem;
                    padding-bottom: 2rem;
                    border-bottom: 1px solid rgba(255,255,255,0.1);
                }
                .portfolio-kicker {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 1rem;
                    color: rgba(255,255,255,0.6);
                    font-family: var(--font-mono);
                    font-size: 0.75rem;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                }
                .kicker-dot { width: 8px; height: 8px; border-radius: 9999px; background: #f97316; animation: pulse 2s infinite; }
                .portfolio-head h3 {
                    font-family: 'Archivo Black', sans-serif;
                    font-size: 4.5rem;
                    line-height: 1;
                    color: #fff;
                    text-transform: uppercase;
                    margin: 0;
                }
                .outline-white { color: transparent; -webkit-text-stroke: 1px rgba(255,255,255,0.4); }
                .portfolio-status {
                    font-family: var(--font-mono);
                    color: rgba(255,255,255,0.5);
                    font-size: 0.75rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    line-height: 2;
                    text-align: right;
                }
                .portfolio-row {
                    position: relative;
                    padding: 3.5rem 0;
                    border-bottom: 1px solid rgba(255,255,255,0.1);
                    transition: all 0.7s ease-in-out;
                }
                .portfolio-row.active { border-bottom: 2px solid #fff; }
                .row-line {
                    position: relative;
                    z-index: 10;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .row-meta {
                    position: absolute;
                    left: 0;
                    font-family: var(--font-mono);
                    font-size: 0.75rem;
                    color: #fff;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    opacity: 0.4;
                    transition: all 0.5s;
                }
                .portfolio-row.active .row-meta { opacity: 1; transform: translateX(1rem); }
                .row-name {
                    font-family: 'Archivo Black', sans-serif;
                    font-size: 3.75rem;
                    color: #fff;
                    text-transform: uppercase;
                    letter-spacing: -0.05em;
                    opacity: 0.6;
                    margin: 0;
                    transition: all 0.7s;
                }
                .portfolio-row.active .row-name {
                    opacity: 1;
                    transform: scale(1.1);
                    letter-spacing: normal;
                    text-shadow: 0 0 15px rgba(255,255,255,0.2);
                }
                .row-id {
                    position: absolute;
                    right: 0;
                    font-family: var(--font-mono);
                    font-size: 10px;
                    text-transform: uppercase;
                    opacity: 0;
                    transform: translateX(2.5rem);
                    transition: all 0.5s;
                }
                .row-id span { padding: 0.25rem 0.5rem; background: #fff; color: #000; font-weight: 700; }
                .portfolio-row.active .row-id { opacity: 1; transform: translateX(-10px); }
                .row-image {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 450px;
                    height: 350px;
                    transform: translate(-50%, -50%) scale(0.9);
                    opacity: 0;
                    pointer-events: none;
                    transition: all 1s ease-out;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 0;
                }
                .portfolio-row.active .row-image { opacity: 1; transform: translate(-50%, -50%) scale(1) rotate(2deg); }
                .row-image img {
                    max-width: 100%;
                    max-height: 100%;
                    object-fit: contain;
                    filter: grayscale(1);
                    transition: filter 1s;
                    box-shadow: 0 25px 50px rgba(0,0,0,0.5);
                }
                .portfolio-row.active .row-image img { filter: none; }
                .portfolio-empty {
                    padding: 5rem 0;
                    text-align: center;
                    border: 1px dashed rgba(255,255,255,0.1);
                    background: rgba(24,24,27,0.5);
                    font-family: var(--font-mono);
                    color: #71717a;
                    font-size: 0.875rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                }
                @media (max-width: 768px) {
                    .row-line { flex-direction: column; }
                    .row-meta, .row-id { position: static; }
                    .row-name { font-size: 2.25rem; }
                    .row-image { width: 280px; height: 200px; }
                    .portfolio-head h3 { font-size: 3rem; }
                }
                "#}
            </style>
            <div class="portfolio-scanline"></div>
            <div class="portfolio-inner">
                <div class="portfolio-head">
                    <div>
                        <div class="portfolio-kicker">
                            <span class="kicker-dot"></span>
                            {"Operational Success_v4.0"}
                        </div>
                        <h3>{"PROVEN"}<br/><span class="outline-white">{"RECORDS"}</span></h3>
                    </div>
                    <p class="portfolio-status">
                        {"Autoscroll sequence"}<br/>
                        {format!("active: {}", progress_label(&cycle, items.len()))}
                    </p>
                </div>

                if items.is_empty() {
                    <div class="portfolio-empty">{placeholder_text(*is_loading)}</div>
                } else {
                    <div>
                        {
                            items.iter().enumerate().map(|(index, item)| {
                                let meta = if item.category.is_empty() {
                                    position_label(index)
                                } else {
                                    format!("{} — {}", position_label(index), item.category)
                                };
                                html! {
                                    <div key={item.id.clone()} class={classes!("portfolio-row", cycle.is_active(index).then(|| "active"))}>
                                        <div class="row-line">
                                            <div class="row-meta">{meta}</div>
                                            <h4 class="row-name">{&item.name}</h4>
                                            <div class="row-id">
                                                <span>{format!("Deployed_ID: #{}", item.short_id())}</span>
                                            </div>
                                        </div>
                                        <div class="row-image">
                                            <img src={item.image.clone()} alt={item.name.clone()} />
                                        </div>
                                    </div>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PORTFOLIO_COLORS;

    fn entries(n: usize) -> Vec<PortfolioEntry> {
        PortfolioEntry::from_rows(
            (0..n)
                .map(|i| PortfolioRow {
                    id: format!("{}", i),
                    name: format!("Brand {}", i),
                    image: String::new(),
                    category: String::new(),
                })
                .collect(),
        )
    }

    #[test]
    fn placeholder_depends_on_loading_state() {
        assert_eq!(placeholder_text(true), LOADING_TEXT);
        assert_eq!(placeholder_text(false), OFFLINE_TEXT);
    }

    #[test]
    fn idle_or_empty_section_uses_base_color() {
        let mut cycle = Cycle::new(0);
        cycle.start();
        assert_eq!(section_color(&[], &cycle), IDLE_SECTION_COLOR);

        let items = entries(3);
        assert_eq!(section_color(&items, &Cycle::new(3)), IDLE_SECTION_COLOR);
    }

    #[test]
    fn section_follows_active_entry() {
        let items = entries(3);
        let mut cycle = Cycle::new(3);
        cycle.start();
        cycle.tick();
        assert_eq!(section_color(&items, &cycle), PORTFOLIO_COLORS[1]);
        assert_eq!(progress_label(&cycle, items.len()), "module 2/3");
    }

    #[test]
    fn progress_label_before_start() {
        assert_eq!(progress_label(&Cycle::new(4), 4), "module 0/4");
        assert_eq!(progress_label(&Cycle::new(0), 0), "module 0/0");
    }
}
