use chrono::Utc;
use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::cycle::TEAM_PERIOD_MS;
use crate::hooks::{use_cycling_highlight, use_in_view};
use crate::models::{fallback_team, TeamOperator};
use crate::store::{self, Order, StoreClient};

/// Picks the roster to show: fetched members when there are any, otherwise
/// whatever is already on screen.
fn merge_roster(
    current: &[TeamOperator],
    fetched: Vec<TeamOperator>,
    stamp: i64,
) -> Option<Vec<TeamOperator>> {
    if fetched.is_empty() {
        info!("Team collection empty, keeping {} fallback members", current.len());
        return None;
    }
    Some(
        fetched
            .into_iter()
            .map(|member| member.with_cache_buster(stamp))
            .collect(),
    )
}

#[derive(Properties, PartialEq)]
struct OperatorCardProps {
    member: TeamOperator,
    active: bool,
}

#[function_component(OperatorCard)]
fn operator_card(props: &OperatorCardProps) -> Html {
    let OperatorCardProps { member, active } = props;
    let active = *active;

    html! {
        <div class={classes!("op-card", active.then(|| "active"))}>
            <div class="op-header">
                <span class="op-code">{member.display_code()}</span>
                <div class="op-header-right">
                    <span class="op-exp">
                        { if active { "SCANNING_BIO".to_string() } else { member.exp.clone() } }
                    </span>
                    <span class="op-led first"></span>
                    <span class="op-led"></span>
                </div>
            </div>

            <div class="op-photo">
                <img src={member.image.clone()} alt={member.name.clone()} />
                <div class="op-scan"></div>
                <div class="op-name">
                    <h3>{&member.name}</h3>
                    <p>{&member.role}</p>
                </div>
            </div>

            <div class="op-skills">
                <div class="op-skills-title">{"▸ Capabilities_Log"}</div>
                <ul>
                    {
                        member.skills.iter().enumerate().map(|(i, skill)| html! {
                            <li key={i}><span class="op-bullet">{"›"}</span>{skill}</li>
                        }).collect::<Html>()
                    }
                </ul>
                if active {
                    <div class="op-zap">{"⚡"}</div>
                }
            </div>
        </div>
    }
}

#[function_component(Team)]
pub fn team() -> Html {
    let members = use_state(fallback_team);
    let section = use_node_ref();
    let visible = use_in_view(section.clone(), 0.15);
    let cycle = use_cycling_highlight(members.len(), TEAM_PERIOD_MS, visible, true);

    {
        let members = members.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let client = StoreClient::from_config();
                    match client
                        .select::<TeamOperator>(store::TEAM, Order::asc("id"))
                        .await
                    {
                        Ok(fetched) => {
                            let stamp = Utc::now().timestamp_millis();
                            if let Some(roster) = merge_roster(&members, fetched, stamp) {
                                members.set(roster);
                            }
                        }
                        Err(e) => error!("Error fetching team data: {}", e),
                    }
                });
                || ()
            },
            (),
        );
    }

    html! {
        <section id="team" class="team" ref={section}>
            <style>
                {r#"
                .team {
                    padding: 8rem 1rem;
                    background: #09090b;
                    border-top: 1px solid #27272a;
                    position: relative;
                    overflow: hidden;
                }
                .team-inner { max-width: 80rem; margin: 0 auto; }
                .team-head {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    flex-wrap: wrap;
                    gap: 2rem;
                    margin-bottom: 5rem;
                }
                .team-kicker {
                    color: #ea580c;
                    font-family: var(--font-mono);
                    font-size: 0.875rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    margin-bottom: 1rem;
                }
                .team-kicker span { display: inline-block; animation: spin 4s linear infinite; margin-right: 0.5rem; }
                @keyframes spin { to { transform: rotate(360deg); } }
                .team-head h2 {
                    font-family: 'Archivo Black', sans-serif;
                    font-size: 6rem;
                    line-height: 0.85;
                    color: #fff;
                    text-transform: uppercase;
                    margin: 0;
                }
                .team-head h2 span { color: transparent; -webkit-text-stroke: 1px white; }
                .team-tagline {
                    max-width: 24rem;
                    font-family: var(--font-mono);
                    color: #71717a;
                    font-size: 0.875rem;
                    text-align: right;
                }
                .team-tagline .live { color: #f97316; margin-top: 0.5rem; }
                .team-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .op-card {
                    position: relative;
                    background: #18181b;
                    border: 1px solid #27272a;
                    display: flex;
                    flex-direction: column;
                    overflow: hidden;
                    transition: all 0.5s;
                }
                .op-card.active {
                    border-color: #ea580c;
                    transform: scale(1.03);
                    z-index: 10;
                    box-shadow: 0 0 30px rgba(234,88,12,0.2);
                }
                .op-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 0.75rem;
                    background: #09090b;
                    border-bottom: 1px solid #27272a;
                }
                .op-card.active .op-header { background: rgba(234,88,12,0.1); border-color: rgba(234,88,12,0.3); }
                .op-code { font-family: var(--font-mono); font-size: 10px; letter-spacing: 0.05em; color: #71717a; }
                .op-card.active .op-code { color: #f97316; }
                .op-header-right { display: flex; align-items: center; gap: 0.5rem; }
                .op-exp {
                    font-family: var(--font-mono);
                    font-size: 9px;
                    padding: 0 0.25rem;
                    border: 1px solid rgba(249,115,22,0.2);
                    background: rgba(249,115,22,0.1);
                    color: #f97316;
                }
                .op-card.active .op-exp { background: #ea580c; color: #fff; border-color: #ea580c; }
                .op-led { width: 6px; height: 6px; border-radius: 9999px; background: #27272a; }
                .op-card.active .op-led.first { background: #f97316; }
                .op-card.active .op-led { background: rgba(249,115,22,0.4); }
                .op-photo { position: relative; aspect-ratio: 4 / 3; overflow: hidden; background: #27272a; }
                .op-photo img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    filter: grayscale(1) brightness(0.75) contrast(1.25);
                    transition: all 0.7s;
                }
                .op-card.active .op-photo img { filter: contrast(1.25); transform: scale(1.1); }
                .op-scan {
                    position: absolute;
                    left: 0;
                    width: 100%;
                    height: 1px;
                    background: rgba(249,115,22,0.2);
                    opacity: 0;
                    pointer-events: none;
                    z-index: 20;
                }
                .op-card.active .op-scan {
                    animation: subtle-scan 3s linear infinite;
                    box-shadow: 0 0 10px rgba(234,88,12,0.3);
                }
                @keyframes subtle-scan {
                    0% { top: 0%; opacity: 0; }
                    10% { opacity: 1; }
                    90% { opacity: 1; }
                    100% { top: 100%; opacity: 0; }
                }
                .op-name {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    width: 100%;
                    padding: 3rem 1rem 1rem;
                    background: linear-gradient(to top, #000, rgba(0,0,0,0.8), transparent);
                    z-index: 20;
                }
                .op-name h3 { font-family: 'Archivo Black', sans-serif; font-size: 1.5rem; text-transform: uppercase; color: #fff; margin: 0 0 0.25rem; }
                .op-card.active .op-name h3 { color: #f97316; }
                .op-name p { font-family: var(--font-mono); font-size: 10px; letter-spacing: 0.1em; text-transform: uppercase; color: #a1a1aa; margin: 0; }
                .op-skills {
                    position: relative;
                    padding: 1.25rem;
                    flex-grow: 1;
                    background: #09090b;
                    border-top: 1px solid #27272a;
                }
                .op-card.active .op-skills { background: #18181b; border-color: rgba(234,88,12,0.3); }
                .op-skills-title { font-family: var(--font-mono); font-size: 0.75rem; letter-spacing: 0.1em; text-transform: uppercase; color: #52525b; margin-bottom: 0.75rem; }
                .op-card.active .op-skills-title { color: #d4d4d8; }
                .op-skills ul { list-style: none; padding: 0; margin: 0; }
                .op-skills li { display: flex; gap: 0.5rem; font-family: var(--font-mono); font-size: 0.75rem; color: #71717a; margin-bottom: 0.5rem; }
                .op-card.active .op-skills li { color: #e4e4e7; }
                .op-bullet { color: #7c2d12; }
                .op-card.active .op-bullet { color: #f97316; }
                .op-zap { position: absolute; bottom: 0.5rem; right: 0.5rem; opacity: 0.5; }
                @media (max-width: 1024px) { .team-grid { grid-template-columns: repeat(2, 1fr); } }
                @media (max-width: 768px) {
                    .team-grid { grid-template-columns: 1fr; }
                    .team-head h2 { font-size: 3.75rem; }
                    .team-tagline { text-align: left; }
                }
                "#}
            </style>
            <div class="team-inner">
                <div class="team-head">
                    <div>
                        <div class="team-kicker"><span>{"⌖"}</span>{"Target Acquisition"}</div>
                        <h2>{"The"}<br/><span>{"Brigade"}</span></h2>
                    </div>
                    <div class="team-tagline">
                        <p>{"/// ELITE UNIT ASSEMBLED FOR HIGH-STAKES HOSPITALITY OPERATIONS."}</p>
                        <p class="live">{"● STATUS: SEQUENTIAL MONITORING ACTIVE"}</p>
                    </div>
                </div>

                <div class="team-grid">
                    {
                        members.iter().enumerate().map(|(index, member)| html! {
                            <OperatorCard
                                key={member.id.clone()}
                                member={member.clone()}
                                active={cycle.is_active(index)}
                            />
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fetch_keeps_fallback() {
        let current = fallback_team();
        assert!(merge_roster(&current, Vec::new(), 1).is_none());
    }

    #[test]
    fn fetched_members_replace_roster_with_fresh_images() {
        let current = fallback_team();
        let mut fetched = fallback_team();
        fetched.truncate(2);
        fetched[1].image = "https://cdn.example/govind.jpg".into();

        let roster = merge_roster(&current, fetched, 1700000000000).expect("roster");
        assert_eq!(roster.len(), 2);
        assert!(roster[0].image.ends_with("&v=1700000000000"));
        assert_eq!(roster[1].image, "https://cdn.example/govind.jpg?v=1700000000000");
    }
}
