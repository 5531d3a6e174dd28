use std::rc::Rc;

use yew::prelude::*;

use crate::components::client_marquee::ClientMarquee;
use crate::components::team_grid::TeamGrid;
use crate::content::SiteContent;
use crate::routes::Page;
use crate::state::Theme;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub content: Rc<SiteContent>,
    pub theme: Theme,
    pub on_navigate: Callback<String>,
    pub on_book: Callback<()>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let HomeProps { content, theme, on_navigate, on_book } = props;

    let explore = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Production.id()))
    };
    let book = {
        let on_book = on_book.clone();
        Callback::from(move |_: MouseEvent| on_book.emit(()))
    };

    html! {
        <div class="home-page">
            // Hero Section
            <section class="hero">
                <h2 class="hero-title">{&content.studio.headline}</h2>
                <p class="hero-subtitle">{&content.studio.tagline}</p>
                <div class="hero-actions">
                    <button class="outline-button" onclick={explore}>
                        {"Explore Our Work"}
                    </button>
                    <button class="solid-button" onclick={book}>
                        {"Book Now"}
                    </button>
                </div>
            </section>

            <section class="about">
                <h2>{format!("About {}", content.studio.name)}</h2>
                <p>{&content.studio.about}</p>
            </section>

            <section class={classes!("ceo-band", theme.band_class())}>
                <div class="ceo-inner">
                    <h2>{"Message From The CEO"}</h2>
                    <div class="ceo-portrait"></div>
                    <p class="ceo-quote">{format!("\"{}\"", content.ceo.message)}</p>
                    <p class="ceo-signature">
                        {format!("— {}, {}", content.ceo.name, content.ceo.title)}
                    </p>
                </div>
            </section>

            <section class="services-grid">
                { for content.services.iter().map(|service| {
                    let id = service.id.clone();
                    let on_navigate = on_navigate.clone();
                    let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(id.clone()));
                    html! {
                        <div class={classes!("service-card", theme.card_class())}>
                            <h3>{service.title()}</h3>
                            <p>{&service.summary}</p>
                            <button class="link-button" {onclick}>{"Explore →"}</button>
                        </div>
                    }
                }) }
            </section>

            <ClientMarquee clients={content.clients.clone()} />
            <TeamGrid team={content.team.clone()} theme={*theme} />

            <style>
                {r#"
                .home-page {
                    padding-top: 6rem;
                }
                .hero {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    text-align: center;
                    padding: 0 1.5rem;
                }
                .hero-title {
                    font-size: 3.75rem;
                    font-weight: 800;
                    margin-bottom: 1.5rem;
                    animation: riseIn 1s ease-out;
                }
                .hero-subtitle {
                    max-width: 42rem;
                    font-size: 1.125rem;
                    margin-bottom: 2rem;
                    opacity: 0.7;
                }
                .hero-actions {
                    display: flex;
                    gap: 1.5rem;
                }
                .outline-button,
                .solid-button {
                    padding: 0.75rem 1.5rem;
                    border-radius: 1rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                    font-size: 1rem;
                }
                .outline-button {
                    border: 1px solid #eab308;
                    background: transparent;
                    color: inherit;
                }
                .outline-button:hover {
                    background: #eab308;
                    color: #000000;
                }
                .solid-button {
                    border: none;
                    background: #eab308;
                    color: #000000;
                }
                .solid-button:hover {
                    transform: scale(1.05);
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.25);
                }
                .about {
                    padding: 6rem 2.5rem;
                    max-width: 72rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .about h2,
                .ceo-inner h2 {
                    font-size: 2.25rem;
                    margin-bottom: 2rem;
                }
                .about p {
                    opacity: 0.7;
                    font-size: 1.125rem;
                    line-height: 1.75;
                }
                .ceo-band {
                    padding: 6rem 2.5rem;
                }
                .ceo-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .ceo-portrait {
                    height: 8rem;
                    width: 8rem;
                    background: #374151;
                    border-radius: 9999px;
                    margin: 0 auto 1.5rem;
                }
                .ceo-quote {
                    font-style: italic;
                    opacity: 0.8;
                    line-height: 1.75;
                }
                .ceo-signature {
                    margin-top: 1.5rem;
                    font-weight: 600;
                }
                .services-grid {
                    padding: 5rem 2.5rem;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2.5rem;
                }
                .service-card {
                    padding: 2.5rem;
                    border-radius: 1rem;
                    border: 1px solid transparent;
                    transition: all 0.3s ease;
                }
                .service-card:hover {
                    transform: scale(1.05);
                    border-color: #eab308;
                }
                .service-card h3 {
                    font-size: 1.5rem;
                    margin-bottom: 1rem;
                }
                .service-card p {
                    opacity: 0.7;
                    margin-bottom: 1.5rem;
                }
                .link-button {
                    background: none;
                    border: none;
                    padding: 0;
                    color: #facc15;
                    cursor: pointer;
                    font-size: 1rem;
                }
                .link-button:hover {
                    text-decoration: underline;
                }
                @keyframes riseIn {
                    from { opacity: 0; transform: translateY(40px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @media (max-width: 768px) {
                    .hero-title {
                        font-size: 3rem;
                    }
                    .services-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
