use yew::prelude::*;

use crate::config;
use crate::content::marquee_track;

#[derive(Properties, PartialEq)]
pub struct ClientMarqueeProps {
    pub clients: Vec<String>,
}

#[function_component(ClientMarquee)]
pub fn client_marquee(props: &ClientMarqueeProps) -> Html {
    let track_style = format!(
        "animation: marquee {}s linear infinite;",
        config::MARQUEE_DURATION_SECS
    );

    html! {
        <section class="clients-section">
            <h2>{"Trusted By 100+ Brands"}</h2>
            <div class="marquee">
                <div class="marquee-track" style={track_style}>
                    { for marquee_track(&props.clients).into_iter().map(|client| html! {
                        <div class="client-chip">{client}</div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .clients-section {
                    padding: 5rem 0;
                    overflow: hidden;
                }
                .clients-section h2 {
                    font-size: 1.875rem;
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .marquee {
                    position: relative;
                    width: 100%;
                    overflow: hidden;
                }
                .marquee-track {
                    display: flex;
                    gap: 4rem;
                    white-space: nowrap;
                    width: max-content;
                }
                .client-chip {
                    min-width: 150px;
                    text-align: center;
                    padding: 1rem 1.5rem;
                    border: 1px solid #374151;
                    border-radius: 0.75rem;
                    transition: border-color 0.2s ease;
                }
                .client-chip:hover {
                    border-color: #eab308;
                }
                @keyframes marquee {
                    0% { transform: translateX(0); }
                    100% { transform: translateX(-50%); }
                }
                "#}
            </style>
        </section>
    }
}
