use yew::prelude::*;

use crate::content::Service;
use crate::routes::Page;
use crate::state::Theme;

#[derive(Properties, PartialEq)]
pub struct ServicePageProps {
    pub service: Service,
    pub theme: Theme,
    pub on_navigate: Callback<String>,
    pub on_book: Callback<()>,
}

#[function_component(ServicePage)]
pub fn service_page(props: &ServicePageProps) -> Html {
    let ServicePageProps { service, theme, on_navigate, on_book } = props;

    // Scroll to top when switching between services
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            service.id.clone(),
        );
    }

    let back_home = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Home.id()))
    };
    let book = {
        let on_book = on_book.clone();
        Callback::from(move |_: MouseEvent| on_book.emit(()))
    };

    html! {
        <div class="service-page">
            <section class="service-hero">
                <h2>{service.title()}</h2>
                <p>{&service.summary}</p>
            </section>
            <section class={classes!("service-offerings", theme.card_class())}>
                <h3>{"What we do"}</h3>
                <ul>
                    { for service.offerings.iter().map(|offering| html! {
                        <li>{offering}</li>
                    }) }
                </ul>
                <div class="service-actions">
                    <button class="solid-button" onclick={book}>{"Book Now"}</button>
                    <button class="link-button" onclick={back_home}>{"← Back to home"}</button>
                </div>
            </section>
            <style>
                {r#"
                .service-page {
                    padding: 8rem 2.5rem 5rem;
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .service-hero {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .service-hero h2 {
                    font-size: 3rem;
                    font-weight: 800;
                    animation: riseIn 1s ease-out;
                }
                .service-hero p {
                    opacity: 0.7;
                    font-size: 1.125rem;
                }
                .service-offerings {
                    padding: 2.5rem;
                    border-radius: 1rem;
                }
                .service-offerings li {
                    margin-bottom: 0.75rem;
                }
                .service-actions {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    margin-top: 2rem;
                }
                .service-actions .solid-button {
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 1rem;
                    background: #eab308;
                    color: #000000;
                    cursor: pointer;
                }
                .service-actions .link-button {
                    background: none;
                    border: none;
                    color: #facc15;
                    cursor: pointer;
                }
                @keyframes riseIn {
                    from { opacity: 0; transform: translateY(40px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
        </div>
    }
}
