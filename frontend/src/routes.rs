use yew_router::prelude::*;

/// Every section the content area can show. Page ids live in the location
/// fragment (`#podcast`), so the paths below are only used for recognition.
#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Page {
    #[at("/home")]
    Home,
    #[at("/podcast")]
    Podcast,
    #[at("/content")]
    Content,
    #[at("/production")]
    Production,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Page {
    /// Resolves a fragment id. An empty id is the home page, anything that
    /// matches no route is `NotFound`.
    pub fn from_id(id: &str) -> Self {
        if id.is_empty() {
            return Page::Home;
        }
        // The router drops a trailing slash; the fragment would not.
        if id.ends_with('/') {
            return Page::NotFound;
        }
        Page::recognize(&format!("/{}", id)).unwrap_or(Page::NotFound)
    }

    pub fn id(&self) -> String {
        self.to_path().trim_start_matches('/').to_string()
    }

    /// Pages backed by an entry in the services table.
    pub fn is_service(&self) -> bool {
        matches!(self, Page::Podcast | Page::Content | Page::Production)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_resolve_to_their_page() {
        assert_eq!(Page::from_id("home"), Page::Home);
        assert_eq!(Page::from_id("podcast"), Page::Podcast);
        assert_eq!(Page::from_id("content"), Page::Content);
        assert_eq!(Page::from_id("production"), Page::Production);
    }

    #[test]
    fn empty_id_is_home() {
        assert_eq!(Page::from_id(""), Page::Home);
    }

    #[test]
    fn unknown_ids_are_not_found() {
        assert_eq!(Page::from_id("unknown-page"), Page::NotFound);
        assert_eq!(Page::from_id("podcast/episodes"), Page::NotFound);
    }

    #[test]
    fn trailing_slash_is_not_found() {
        assert_eq!(Page::from_id("podcast/"), Page::NotFound);
        assert_eq!(Page::from_id("home/"), Page::NotFound);
        assert_eq!(Page::from_id("/"), Page::NotFound);
    }

    #[test]
    fn ids_round_trip_through_pages() {
        for page in [Page::Home, Page::Podcast, Page::Content, Page::Production] {
            assert_eq!(Page::from_id(&page.id()), page);
        }
    }

    #[test]
    fn only_studio_services_are_service_pages() {
        assert!(Page::Podcast.is_service());
        assert!(Page::Production.is_service());
        assert!(!Page::Home.is_service());
        assert!(!Page::NotFound.is_service());
    }
}
