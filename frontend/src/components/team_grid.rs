use yew::prelude::*;

use crate::content::TeamMember;
use crate::state::Theme;

#[derive(Properties, PartialEq)]
pub struct TeamGridProps {
    pub team: Vec<TeamMember>,
    pub theme: Theme,
}

#[function_component(TeamGrid)]
pub fn team_grid(props: &TeamGridProps) -> Html {
    html! {
        <section class="team-section">
            <h2>{"Our Creative Team"}</h2>
            <div class="team-grid">
                { for props.team.iter().map(|member| html! {
                    <div class={classes!("team-card", props.theme.card_class())}>
                        <div class="team-photo"></div>
                        <h4>{member.label()}</h4>
                        <p>{&member.blurb}</p>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .team-section {
                    padding: 5rem 2.5rem;
                }
                .team-section h2 {
                    font-size: 2.25rem;
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .team-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2.5rem;
                }
                .team-card {
                    padding: 2rem;
                    border-radius: 1rem;
                    transition: transform 0.2s ease;
                }
                .team-card:hover {
                    transform: scale(1.05);
                }
                .team-photo {
                    height: 10rem;
                    background: #374151;
                    border-radius: 0.75rem;
                    margin-bottom: 1.5rem;
                }
                .team-card h4 {
                    font-size: 1.125rem;
                    margin: 0 0 0.5rem;
                }
                .team-card p {
                    opacity: 0.7;
                    font-size: 0.875rem;
                }
                @media (max-width: 768px) {
                    .team-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
