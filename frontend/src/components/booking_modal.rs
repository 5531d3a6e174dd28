use yew::prelude::*;

use crate::content::Studio;
use crate::state::Theme;

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub studio: Studio,
    pub theme: Theme,
    pub on_close: Callback<()>,
}

#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    let BookingModalProps { studio, theme, on_close } = props;

    let close = {
        let on_close = on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };
    // Clicks inside the dialog must not reach the backdrop.
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div class={classes!("booking-modal", theme.card_class())} onclick={keep_open} role="dialog" aria-modal="true">
                <button class="modal-close" onclick={close} aria-label="Close">{"×"}</button>
                <h2>{format!("Book {}", studio.name)}</h2>
                <p class="modal-subtitle">
                    {"Tell us about your podcast, brand film or music video and we'll get back to you."}
                </p>
                <ul class="modal-contacts">
                    { for studio.phones.iter().map(|phone| html! {
                        <li>
                            <a href={format!("tel:{}", phone.replace('-', ""))}>{phone}</a>
                        </li>
                    }) }
                    <li>
                        <a href={format!("mailto:{}", studio.email)}>{&studio.email}</a>
                    </li>
                    <li>{&studio.location}</li>
                </ul>
            </div>
            <style>
                {r#"
                .modal-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    background: rgba(0, 0, 0, 0.7);
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    padding: 1.5rem;
                }
                .booking-modal {
                    position: relative;
                    max-width: 28rem;
                    width: 100%;
                    padding: 2.5rem;
                    border-radius: 1rem;
                    animation: modalIn 0.3s ease-out;
                }
                .booking-modal h2 {
                    margin-top: 0;
                }
                .modal-subtitle {
                    opacity: 0.7;
                }
                .modal-contacts {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .modal-contacts a {
                    color: #eab308;
                    text-decoration: none;
                }
                .modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: transparent;
                    border: none;
                    color: inherit;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                @keyframes modalIn {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
        </div>
    }
}
