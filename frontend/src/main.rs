use std::rc::Rc;

use log::{error, info, warn};
use yew::prelude::*;

mod config;
mod content;
mod error;
mod navigation;
mod routes;
mod state;
mod components {
    pub mod booking_modal;
    pub mod client_marquee;
    pub mod footer;
    pub mod header;
    pub mod team_grid;
    pub mod top_bar;
}
mod pages {
    pub mod home;
    pub mod not_found;
    pub mod service;
}

use components::{
    booking_modal::BookingModal,
    footer::Footer,
    header::SiteHeader,
    top_bar::TopBar,
};
use content::{Service, SiteContent};
use error::SiteError;
use navigation::{HashListener, HashNavigator, Navigator};
use pages::{home::Home, not_found::NotFound, service::ServicePage};
use routes::Page;
use state::{Msg, ViewController, ViewState};

/// Which view the content area shows for the current state.
#[derive(Debug, PartialEq)]
enum PageView<'a> {
    Home,
    Service(&'a Service),
    NotFound,
}

fn select_view<'a>(state: &ViewState, content: &'a SiteContent) -> PageView<'a> {
    let page = state.page();
    match page {
        Page::Home => PageView::Home,
        Page::Podcast | Page::Content | Page::Production => match content.service(page) {
            Some(service) => PageView::Service(service),
            None => {
                warn!("No service content for `{}`", state.page_id);
                PageView::NotFound
            }
        },
        Page::NotFound => PageView::NotFound,
    }
}

fn switch(
    state: &ViewState,
    content: &Rc<SiteContent>,
    on_navigate: Callback<String>,
    on_book: Callback<()>,
) -> Html {
    match select_view(state, content) {
        PageView::Home => {
            info!("Rendering Home page");
            html! {
                <Home
                    content={content.clone()}
                    theme={state.theme}
                    {on_navigate}
                    {on_book}
                />
            }
        }
        PageView::Service(service) => {
            info!("Rendering {} page", service.title());
            html! {
                <ServicePage
                    service={service.clone()}
                    theme={state.theme}
                    {on_navigate}
                    {on_book}
                />
            }
        }
        PageView::NotFound => {
            info!("Rendering NotFound page for `{}`", state.page_id);
            html! { <NotFound page_id={state.page_id.clone()} {on_navigate} /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub navigator: HashNavigator,
    pub content: Rc<SiteContent>,
}

pub struct App {
    controller: ViewController<HashNavigator>,
    _hash_listener: HashListener,
}

impl Component for App {
    type Message = Msg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        let navigator = ctx.props().navigator.clone();
        let hash_listener = navigator.on_path_changed(ctx.link().callback(|_: ()| Msg::FragmentChanged));

        Self {
            controller: ViewController::mount(navigator),
            _hash_listener: hash_listener,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.controller.update(msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = self.controller.state();
        let content = &ctx.props().content;
        let link = ctx.link();

        let on_navigate = link.callback(Msg::Navigate);
        let on_book = link.callback(|_: ()| Msg::OpenModal);
        let on_close = link.callback(|_: ()| Msg::CloseModal);
        let on_toggle_theme = link.callback(|_: ()| Msg::ToggleTheme);

        html! {
            <div class={classes!("site", state.theme.page_class())}>
                <TopBar
                    studio={content.studio.clone()}
                    theme={state.theme}
                    {on_toggle_theme}
                />
                <SiteHeader
                    studio_name={content.studio.name.clone()}
                    navigation={content.navigation.clone()}
                    active={state.page()}
                    on_navigate={on_navigate.clone()}
                    on_book={on_book.clone()}
                />
                <main class="content-area">
                    { switch(state, content, on_navigate, on_book) }
                </main>
                <Footer studio_name={content.studio.name.clone()} />
                {
                    if state.modal_open {
                        html! {
                            <BookingModal
                                studio={content.studio.clone()}
                                theme={state.theme}
                                {on_close}
                            />
                        }
                    } else {
                        html! {}
                    }
                }
                <style>
                    {r#"
                    body {
                        margin: 0;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .site {
                        min-height: 100vh;
                        transition: background-color 0.5s ease, color 0.5s ease;
                    }
                    .theme-dark {
                        background: #000000;
                        color: #ffffff;
                    }
                    .theme-light {
                        background: #ffffff;
                        color: #000000;
                    }
                    .card-dark {
                        background: #111827;
                    }
                    .card-light {
                        background: #ffffff;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .band-dark {
                        background: #111827;
                    }
                    .band-light {
                        background: #f3f4f6;
                    }
                    "#}
                </style>
            </div>
        }
    }
}

fn run() -> Result<(), SiteError> {
    let content = Rc::new(SiteContent::load()?);
    let navigator = HashNavigator::new()?;
    yew::Renderer::<App>::with_props(AppProps { navigator, content }).render();
    Ok(())
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    if let Err(err) = run() {
        error!("Could not start the site: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_on(page_id: &str) -> ViewState {
        ViewState {
            page_id: page_id.to_string(),
            ..ViewState::default()
        }
    }

    #[test]
    fn home_id_selects_home_view() {
        let content = SiteContent::load().unwrap();
        assert_eq!(select_view(&state_on("home"), &content), PageView::Home);
    }

    #[test]
    fn service_ids_select_their_service() {
        let content = SiteContent::load().unwrap();
        match select_view(&state_on("podcast"), &content) {
            PageView::Service(service) => assert_eq!(service.id, "podcast"),
            other => panic!("expected podcast service, got {:?}", other),
        }
    }

    #[test]
    fn unknown_id_selects_not_found_view() {
        let content = SiteContent::load().unwrap();
        assert_eq!(select_view(&state_on("unknown-page"), &content), PageView::NotFound);
    }

    #[test]
    fn service_without_content_falls_back_to_not_found() {
        let mut content = SiteContent::load().unwrap();
        content.services.retain(|service| service.id != "production");
        assert_eq!(select_view(&state_on("production"), &content), PageView::NotFound);
    }
}
