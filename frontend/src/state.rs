use log::{debug, warn};

use crate::config;
use crate::navigation::{strip_fragment, Navigator};
use crate::routes::Page;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn page_class(self) -> &'static str {
        match self {
            Theme::Dark => "theme-dark",
            Theme::Light => "theme-light",
        }
    }

    pub fn card_class(self) -> &'static str {
        match self {
            Theme::Dark => "card-dark",
            Theme::Light => "card-light",
        }
    }

    pub fn band_class(self) -> &'static str {
        match self {
            Theme::Dark => "band-dark",
            Theme::Light => "band-light",
        }
    }

    /// Icon on the toggle button: the mode you would switch to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀",
            Theme::Light => "☾",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub theme: Theme,
    pub page_id: String,
    pub modal_open: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            theme: config::DEFAULT_THEME,
            page_id: config::HOME_PAGE_ID.to_string(),
            modal_open: false,
        }
    }
}

impl ViewState {
    pub fn page(&self) -> Page {
        Page::from_id(&self.page_id)
    }
}

pub enum Msg {
    ToggleTheme,
    Navigate(String),
    FragmentChanged,
    OpenModal,
    CloseModal,
}

/// Owns the view state and keeps the active page in step with the
/// navigator's fragment.
pub struct ViewController<N: Navigator> {
    navigator: N,
    state: ViewState,
}

impl<N: Navigator> ViewController<N> {
    /// Reads the fragment once. An empty fragment lands on the home page.
    pub fn mount(navigator: N) -> Self {
        let mut state = ViewState::default();
        let id = strip_fragment(&navigator.current_path());
        if !id.is_empty() {
            state.page_id = id;
        }
        debug!("Mounted on page `{}`", state.page_id);
        Self { navigator, state }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn toggle_theme(&mut self) {
        self.state.theme = self.state.theme.toggled();
    }

    /// Writes the fragment and updates the page without waiting for the
    /// change event. Ids are stored decoded, the same form the change event
    /// reads back, so the event re-applies the same id when it arrives.
    pub fn navigate(&mut self, page_id: &str) {
        let id = strip_fragment(page_id);
        if let Err(err) = self.navigator.set_path(&id) {
            warn!("Navigation to `{}` did not reach the address bar: {}", id, err);
        }
        debug!("Navigating to `{}`", id);
        self.state.page_id = id;
    }

    /// Returns false when the fragment is empty or already active.
    pub fn on_fragment_changed(&mut self) -> bool {
        let id = strip_fragment(&self.navigator.current_path());
        if id.is_empty() || id == self.state.page_id {
            return false;
        }
        debug!("Fragment changed to `{}`", id);
        self.state.page_id = id;
        true
    }

    pub fn open_modal(&mut self) {
        self.state.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.state.modal_open = false;
    }

    /// Applies a message and reports whether the view needs to re-render.
    pub fn update(&mut self, msg: Msg) -> bool {
        match msg {
            Msg::ToggleTheme => {
                self.toggle_theme();
                true
            }
            Msg::Navigate(page_id) => {
                let changed = strip_fragment(&page_id) != self.state.page_id;
                self.navigate(&page_id);
                changed
            }
            Msg::FragmentChanged => self.on_fragment_changed(),
            Msg::OpenModal => {
                let changed = !self.state.modal_open;
                self.open_modal();
                changed
            }
            Msg::CloseModal => {
                let changed = self.state.modal_open;
                self.close_modal();
                changed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::memory::MemoryNavigator;

    fn mounted(fragment: &str) -> (ViewController<MemoryNavigator>, MemoryNavigator) {
        let navigator = MemoryNavigator::with_fragment(fragment);
        (ViewController::mount(navigator.clone()), navigator)
    }

    #[test]
    fn mount_without_fragment_lands_on_home() {
        let (controller, _) = mounted("");
        assert_eq!(controller.state().page_id, "home");
        assert_eq!(controller.state().page(), Page::Home);
        assert!(controller.state().theme.is_dark());
        assert!(!controller.state().modal_open);
    }

    #[test]
    fn mount_with_fragment_uses_it() {
        let (controller, _) = mounted("#production");
        assert_eq!(controller.state().page(), Page::Production);
    }

    #[test]
    fn toggling_theme_twice_restores_it() {
        let (mut controller, _) = mounted("");
        controller.toggle_theme();
        assert_eq!(controller.state().theme, Theme::Light);
        controller.toggle_theme();
        assert_eq!(controller.state().theme, Theme::Dark);
    }

    #[test]
    fn navigate_sets_page_and_fragment() {
        let (mut controller, navigator) = mounted("");
        for id in ["home", "podcast", "content", "production"] {
            controller.navigate(id);
            assert_eq!(controller.state().page_id, id);
            assert_eq!(navigator.fragment(), format!("#{}", id));
        }
    }

    #[test]
    fn navigate_podcast() {
        let (mut controller, navigator) = mounted("");
        controller.navigate("podcast");
        assert_eq!(strip_fragment(&navigator.fragment()), "podcast");
        assert_eq!(controller.state().page(), Page::Podcast);
    }

    #[test]
    fn change_event_after_navigate_is_redundant() {
        let (mut controller, navigator) = mounted("");
        assert!(controller.update(Msg::Navigate("content".to_string())));
        assert_eq!(navigator.flush(), 1);
        assert!(!controller.update(Msg::FragmentChanged));
        assert_eq!(controller.state().page_id, "content");
    }

    #[test]
    fn change_event_after_navigate_with_encoded_id_is_redundant() {
        for raw in ["a%20b", "a b", "100%"] {
            let (mut controller, navigator) = mounted("");
            assert!(controller.update(Msg::Navigate(raw.to_string())));
            let before = controller.state().page_id.clone();
            assert_eq!(navigator.flush(), 1);
            assert!(!controller.update(Msg::FragmentChanged));
            assert_eq!(controller.state().page_id, before);
        }
    }

    #[test]
    fn navigate_stores_decoded_id() {
        let (mut controller, navigator) = mounted("");
        controller.navigate("a%20b");
        assert_eq!(controller.state().page_id, "a b");
        assert_eq!(navigator.fragment(), "#a%20b");
    }

    #[test]
    fn external_fragment_change_switches_page() {
        let (mut controller, navigator) = mounted("#podcast");
        navigator.simulate_external("#content");
        assert!(controller.on_fragment_changed());
        assert_eq!(controller.state().page_id, "content");
    }

    #[test]
    fn empty_fragment_change_keeps_previous_page() {
        let (mut controller, navigator) = mounted("#podcast");
        navigator.simulate_external("");
        assert!(!controller.on_fragment_changed());
        assert_eq!(controller.state().page_id, "podcast");
    }

    #[test]
    fn unknown_page_keeps_raw_id_and_resolves_to_not_found() {
        let (mut controller, navigator) = mounted("");
        controller.navigate("unknown-page");
        assert_eq!(controller.state().page_id, "unknown-page");
        assert_eq!(controller.state().page(), Page::NotFound);
        assert_eq!(navigator.fragment(), "#unknown-page");
    }

    #[test]
    fn modal_opens_and_closes() {
        let (mut controller, _) = mounted("");
        controller.open_modal();
        assert!(controller.state().modal_open);
        controller.close_modal();
        assert!(!controller.state().modal_open);
    }

    #[test]
    fn update_reports_only_real_changes() {
        let (mut controller, _) = mounted("");
        assert!(!controller.update(Msg::CloseModal));
        assert!(controller.update(Msg::OpenModal));
        assert!(!controller.update(Msg::OpenModal));
        assert!(!controller.update(Msg::Navigate("home".to_string())));
        assert!(controller.update(Msg::ToggleTheme));
    }

    #[test]
    fn theme_classes_are_exclusive() {
        assert_ne!(Theme::Dark.page_class(), Theme::Light.page_class());
        assert_ne!(Theme::Dark.card_class(), Theme::Light.card_class());
        assert_ne!(Theme::Dark.toggle_icon(), Theme::Light.toggle_icon());
    }
}
