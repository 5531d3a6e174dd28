use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::NavEntry;
use crate::routes::Page;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub studio_name: String,
    pub navigation: Vec<NavEntry>,
    pub active: Page,
    pub on_navigate: Callback<String>,
    pub on_book: Callback<()>,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &HeaderProps) -> Html {
    let HeaderProps { studio_name, navigation, active, on_navigate, on_book } = props;

    let go_home = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Home.id()))
    };

    let book = {
        let on_book = on_book.clone();
        Callback::from(move |_: MouseEvent| on_book.emit(()))
    };

    html! {
        <header class="site-header">
            <h1 class="site-title" onclick={go_home}>{studio_name}</h1>
            <nav class="site-nav">
                { for navigation.iter().map(|entry| {
                    let page = entry.page.clone();
                    let on_navigate = on_navigate.clone();
                    let onclick = Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        on_navigate.emit(page.clone());
                    });
                    let is_active = Page::from_id(&entry.page) == *active;
                    html! {
                        <a
                            href={format!("#{}", entry.page)}
                            class={classes!("nav-link", is_active.then(|| "active"))}
                            {onclick}
                        >
                            {&entry.label}
                        </a>
                    }
                }) }
            </nav>
            <button class="book-button" onclick={book}>
                {"Book Appointment"}
            </button>
            <style>
                {r#"
                .site-header {
                    position: sticky;
                    top: 0;
                    z-index: 40;
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(12px);
                    color: #ffffff;
                    padding: 1rem 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1.5rem;
                }
                .site-title {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin: 0;
                    cursor: pointer;
                }
                .site-nav {
                    display: flex;
                    gap: 1.5rem;
                }
                .nav-link {
                    color: inherit;
                    text-decoration: none;
                    opacity: 0.7;
                    transition: opacity 0.2s ease;
                }
                .nav-link:hover,
                .nav-link.active {
                    opacity: 1;
                    color: #eab308;
                }
                .book-button {
                    background: #eab308;
                    color: #000000;
                    border: none;
                    padding: 0.5rem 1.25rem;
                    border-radius: 1rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                @media (max-width: 768px) {
                    .site-header {
                        flex-wrap: wrap;
                        padding: 1rem;
                    }
                    .site-nav {
                        order: 3;
                        width: 100%;
                        justify-content: space-between;
                    }
                }
                "#}
            </style>
        </header>
    }
}
