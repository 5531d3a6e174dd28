use yew::prelude::*;

use crate::content::Studio;
use crate::state::Theme;

#[derive(Properties, PartialEq)]
pub struct TopBarProps {
    pub studio: Studio,
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(TopBar)]
pub fn top_bar(props: &TopBarProps) -> Html {
    let TopBarProps { studio, theme, on_toggle_theme } = props;

    let toggle = {
        let on_toggle_theme = on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };
    let toggle_label = if theme.is_dark() {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    };

    html! {
        <div class="top-bar">
            <div class="top-bar-contacts">
                <span class="contact-item">
                    <i class="contact-icon">{"☎"}</i>
                    {studio.phones.join(" | ")}
                </span>
                <span class="contact-item">
                    <i class="contact-icon">{"✉"}</i>
                    {&studio.email}
                </span>
                <span class="contact-item">
                    <i class="contact-icon">{"⌖"}</i>
                    {&studio.location}
                </span>
            </div>
            <button class="theme-toggle" onclick={toggle} title={toggle_label} aria-label={toggle_label}>
                {theme.toggle_icon()}
            </button>
            <style>
                {r#"
                .top-bar {
                    width: 100%;
                    font-size: 0.875rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 0.5rem 1.5rem;
                    border-bottom: 1px solid #1f2937;
                    box-sizing: border-box;
                }
                .top-bar-contacts {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                }
                .contact-item {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .contact-icon {
                    font-style: normal;
                    opacity: 0.8;
                }
                .theme-toggle {
                    padding: 0.5rem;
                    width: 2.25rem;
                    height: 2.25rem;
                    border-radius: 9999px;
                    border: 1px solid currentColor;
                    background: transparent;
                    color: inherit;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .theme-toggle:hover {
                    transform: scale(1.1);
                }
                @media (max-width: 768px) {
                    .top-bar-contacts {
                        gap: 0.75rem;
                        font-size: 0.75rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
