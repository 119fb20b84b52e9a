use yew::prelude::*;

use crate::cycle::SERVICES_PERIOD_MS;
use crate::hooks::{use_cycling_highlight, use_in_view};
use crate::models::{Icon, ServiceOffering, SERVICES};

const FEATURE_TAGS: [&str; 3] = ["CONCEPT", "IDENTITY", "EXECUTION"];

/// Feature card, every offering, then the P&L card.
fn card_count() -> usize {
    SERVICES.len() + 2
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: &'static ServiceOffering,
    active: bool,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let ServiceCardProps { service, active } = props;
    let badge = service.category.badge_class();

    html! {
        <div class={classes!("svc-card", active.then(|| "active"))}>
            <div class="svc-fill"></div>
            <div class="svc-top">
                <div class={classes!("svc-icon", (!*active).then(|| badge))}>
                    {service.icon.glyph()}
                </div>
            </div>
            <div class="svc-body">
                <h4>{service.title}</h4>
                <p>{service.description}</p>
            </div>
            <div class="svc-foot">
                <span class={classes!("svc-badge", (!*active).then(|| badge))}>
                    {service.category.label()}
                </span>
                <span class="svc-tags">{service.tags.join(" / ")}</span>
                <span class="svc-arrow">{"↗"}</span>
            </div>
        </div>
    }
}

#[function_component(ServicesBento)]
pub fn services_bento() -> Html {
    let section = use_node_ref();
    let visible = use_in_view(section.clone(), 0.1);
    let total = card_count();
    let cycle = use_cycling_highlight(total, SERVICES_PERIOD_MS, visible, false);

    let feature_active = cycle.is_active(0);
    let pnl_active = cycle.is_active(total - 1);

    html! {
        <section id="services" class="services" ref={section}>
            <style>
                {r#"
                .services {
                    padding: 6rem 0;
                    background: #09090b;
                    position: relative;
                    border-top: 1px solid #27272a;
                    overflow: hidden;
                }
                .services-inner { max-width: 80rem; margin: 0 auto; padding: 0 1rem; }
                .services-head {
                    margin-bottom: 4rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    gap: 1.5rem;
                    flex-wrap: wrap;
                }
                .services-head h3 {
                    font-family: 'Archivo Black', sans-serif;
                    font-size: 4.5rem;
                    line-height: 1;
                    color: #fff;
                    text-transform: uppercase;
                    margin: 0;
                }
                .services-head h3 span {
                    background: linear-gradient(90deg, #f97316, #fb923c, #fff);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .services-head p {
                    max-width: 24rem;
                    color: #71717a;
                    font-family: var(--font-mono);
                    font-size: 0.875rem;
                    line-height: 1.6;
                    border-right: 2px solid #f97316;
                    padding-right: 1rem;
                    text-align: right;
                }
                .bento {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1rem;
                }
                .svc-card, .feature-card, .pnl-card {
                    position: relative;
                    overflow: hidden;
                    background: #18181b;
                    border: 1px solid #27272a;
                    transition: all 0.3s;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                }
                .svc-card { padding: 1.25rem; }
                .svc-fill {
                    position: absolute;
                    inset: 0;
                    background: #fff;
                    transform: translateY(100%);
                    transition: transform 0.5s ease-in-out;
                    z-index: 0;
                }
                .active > .svc-fill { transform: translateY(0); }
                .svc-card.active, .pnl-card.active {
                    transform: translateY(-4px);
                    border-color: #71717a;
                    z-index: 10;
                    box-shadow: 0 10px 15px rgba(0,0,0,0.4);
                }
                .svc-top, .svc-body, .svc-foot, .feature-body, .pnl-body { position: relative; z-index: 1; }
                .svc-icon {
                    width: fit-content;
                    padding: 0.5rem;
                    border: 1px solid;
                    font-size: 1.25rem;
                    margin-bottom: 1rem;
                }
                .svc-card.active .svc-icon { background: #000; color: #fff; border-color: #000; }
                .svc-body h4 {
                    font-family: 'Archivo Black', sans-serif;
                    font-size: 1.125rem;
                    text-transform: uppercase;
                    line-height: 1.2;
                    color: #fff;
                    margin: 0 0 0.5rem;
                }
                .svc-body p { font-family: var(--font-mono); font-size: 0.75rem; color: #71717a; }
                .svc-card.active h4 { color: #000; }
                .svc-card.active p { color: #52525b; }
                .svc-foot {
                    margin-top: 1rem;
                    padding-top: 1rem;
                    border-top: 1px dashed #27272a;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 0.5rem;
                }
                .svc-card.active .svc-foot { border-color: rgba(0,0,0,0.2); }
                .svc-badge {
                    font-family: var(--font-mono);
                    font-size: 9px;
                    text-transform: uppercase;
                    padding: 0.125rem 0.375rem;
                    border: 1px solid;
                }
                .svc-card.active .svc-badge { border-color: #000; color: #000; }
                .svc-tags { font-family: var(--font-mono); font-size: 9px; color: #52525b; }
                .svc-arrow { color: #52525b; font-size: 0.875rem; }
                .svc-card.active .svc-arrow { color: #000; }
                .badge-creative { color: #c084fc; border-color: rgba(168,85,247,0.3); background: rgba(168,85,247,0.1); }
                .badge-foundation { color: #fb923c; border-color: rgba(249,115,22,0.3); background: rgba(249,115,22,0.1); }
                .badge-growth { color: #34d399; border-color: rgba(16,185,129,0.3); background: rgba(16,185,129,0.1); }
                .badge-engine { color: #60a5fa; border-color: rgba(59,130,246,0.3); background: rgba(59,130,246,0.1); }

                .feature-card {
                    grid-column: span 2;
                    grid-row: span 2;
                    background: #09090b;
                    border-width: 2px;
                }
                .feature-card.active { border-color: #fff; z-index: 20; }
                .feature-card .svc-fill { transition-duration: 0.7s; }
                .feature-body { padding: 1.5rem 2rem; flex-grow: 1; }
                .feature-title { display: flex; align-items: center; gap: 1rem; margin-bottom: 1rem; }
                .feature-icon {
                    width: 3.5rem;
                    height: 3.5rem;
                    background: #ea580c;
                    color: #000;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.75rem;
                    transition: all 0.3s;
                }
                .feature-card.active .feature-icon { background: #09090b; color: #fff; }
                .feature-title h4 {
                    font-family: 'Archivo Black', sans-serif;
                    font-size: 2.25rem;
                    line-height: 1;
                    text-transform: uppercase;
                    color: #fff;
                    margin: 0;
                }
                .feature-card.active .feature-title h4 { color: #000; }
                .feature-body p { font-family: var(--font-mono); font-size: 0.875rem; line-height: 1.6; color: #a1a1aa; max-width: 32rem; }
                .feature-card.active .feature-body p { color: #3f3f46; }
                .feature-tags { margin-top: 2rem; display: flex; flex-wrap: wrap; gap: 0.75rem; }
                .feature-tag {
                    padding: 0.375rem 0.75rem;
                    border: 1px solid #27272a;
                    font-family: var(--font-mono);
                    font-size: 11px;
                    color: #71717a;
                }
                .feature-card.active .feature-tag { border-color: #d4d4d8; color: #000; }
                .feature-foot {
                    position: relative;
                    z-index: 1;
                    border-top: 1px solid #27272a;
                    padding: 1.5rem;
                    font-family: var(--font-mono);
                    font-size: 11px;
                    letter-spacing: 0.1em;
                    color: #71717a;
                    text-transform: uppercase;
                }
                .feature-card.active .feature-foot { color: #000; font-weight: 700; border-color: #e4e4e7; }

                .pnl-card { grid-column: span 2; }
                .pnl-body { padding: 1.5rem; }
                .pnl-body h4 {
                    font-family: 'Archivo Black', sans-serif;
                    font-size: 1.5rem;
                    color: #fff;
                    margin: 0;
                }
                .pnl-card.active h4 { color: #f97316; }
                .pnl-body p { font-family: var(--font-mono); font-size: 0.75rem; color: #71717a; }
                .pnl-stats { display: flex; gap: 2rem; margin-top: 1.5rem; }
                .pnl-stats span.label { display: block; font-family: var(--font-mono); font-size: 10px; color: #71717a; text-transform: uppercase; }
                .pnl-stats span.value { font-family: 'Archivo Black', sans-serif; font-size: 1.25rem; color: #fff; }
                .pnl-stats span.value.up { color: #22c55e; }
                .pnl-card.active .pnl-stats span.value { color: #000; }
                .pnl-card.active .pnl-stats span.value.up { color: #059669; }
                @media (max-width: 1024px) { .bento { grid-template-columns: repeat(3, 1fr); } }
                @media (max-width: 768px) {
                    .bento { grid-template-columns: 1fr; }
                    .feature-card, .pnl-card { grid-column: span 1; }
                    .services-head h3 { font-size: 3rem; }
                }
                "#}
            </style>
            <div class="services-inner">
                <div class="services-head">
                    <h3>{"Service"}<br/><span>{"Platter"}</span></h3>
                    <p>{"/// Integrated hospitality modules designed for rapid market penetration and long-term profitability."}</p>
                </div>

                <div class="bento">
                    <div class={classes!("feature-card", feature_active.then(|| "active"))}>
                        <div class="svc-fill"></div>
                        <div class="feature-body">
                            <div class="feature-title">
                                <div class="feature-icon">{Icon::Layers.glyph()}</div>
                                <h4>{"COMPLETE BRAND"}<br/>{"DEVELOPMENT"}</h4>
                            </div>
                            <p>
                                {"/// The complete incubation protocol. We build the soul, the visuals, and the experience from a blank slate. Full system integration from concept to launch."}
                            </p>
                            <div class="feature-tags">
                                { FEATURE_TAGS.iter().map(|tag| html! {
                                    <div key={*tag} class="feature-tag">{*tag}</div>
                                }).collect::<Html>() }
                            </div>
                        </div>
                        <div class="feature-foot">{"Ready for deployment"}</div>
                    </div>

                    {
                        SERVICES.iter().enumerate().map(|(idx, service)| html! {
                            <ServiceCard key={service.id} service={service} active={cycle.is_active(idx + 1)} />
                        }).collect::<Html>()
                    }

                    <div class={classes!("pnl-card", pnl_active.then(|| "active"))}>
                        <div class="svc-fill"></div>
                        <div class="pnl-body">
                            <h4>{"P&L MANAGEMENT"}</h4>
                            <p>{"Data-driven margin control and profitability recovery strategies."}</p>
                            <div class="pnl-stats">
                                <div>
                                    <span class="label">{"Leakage"}</span>
                                    <span class="value">{"-0%"}</span>
                                </div>
                                <div>
                                    <span class="label">{"Recovery"}</span>
                                    <span class="value up">{"+18%"}</span>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_covers_feature_offerings_and_pnl() {
        assert_eq!(card_count(), 12);
    }
}
