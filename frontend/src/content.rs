use serde::Deserialize;

use crate::error::SiteError;
use crate::routes::Page;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Studio {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub about: String,
    pub phones: Vec<String>,
    pub email: String,
    pub location: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Ceo {
    pub name: String,
    pub title: String,
    pub message: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct NavEntry {
    pub page: String,
    pub label: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Service {
    pub id: String,
    pub summary: String,
    pub offerings: Vec<String>,
}

impl Service {
    /// "One Rupee Podcast" for the `podcast` service.
    pub fn title(&self) -> String {
        format!("One Rupee {}", capitalize(&self.id))
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct TeamMember {
    pub name: Option<String>,
    pub role: String,
    pub blurb: String,
}

impl TeamMember {
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => format!("{} - {}", name, self.role),
            None => self.role.clone(),
        }
    }
}

/// Everything the site shows that isn't layout. Built once at startup.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SiteContent {
    pub studio: Studio,
    pub ceo: Ceo,
    pub navigation: Vec<NavEntry>,
    pub services: Vec<Service>,
    pub clients: Vec<String>,
    pub team: Vec<TeamMember>,
}

impl SiteContent {
    pub fn load() -> Result<Self, SiteError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, SiteError> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), SiteError> {
        if self.navigation.is_empty() {
            return Err(SiteError::MissingContent("navigation entries"));
        }
        if self.services.is_empty() {
            return Err(SiteError::MissingContent("services"));
        }
        if self.clients.is_empty() {
            return Err(SiteError::MissingContent("clients"));
        }
        if self.team.is_empty() {
            return Err(SiteError::MissingContent("team members"));
        }
        if let Some(service) = self
            .services
            .iter()
            .find(|service| !Page::from_id(&service.id).is_service())
        {
            return Err(SiteError::UnknownService(service.id.clone()));
        }
        if let Some(entry) = self
            .navigation
            .iter()
            .find(|entry| Page::from_id(&entry.page) == Page::NotFound)
        {
            return Err(SiteError::UnknownNavTarget(entry.page.clone()));
        }
        Ok(())
    }

    pub fn service(&self, page: Page) -> Option<&Service> {
        let id = page.id();
        self.services.iter().find(|service| service.id == id)
    }
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The client list twice over, so the marquee can scroll half its width and
/// wrap without a visible seam.
pub fn marquee_track(clients: &[String]) -> Vec<&str> {
    clients
        .iter()
        .chain(clients.iter())
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_with(edit: impl FnOnce(&mut serde_json::Value)) -> String {
        let mut value: serde_json::Value = serde_json::from_str(SITE_JSON).unwrap();
        edit(&mut value);
        value.to_string()
    }

    #[test]
    fn embedded_content_loads() {
        let content = SiteContent::load().unwrap();
        assert_eq!(content.studio.name, "One Rupee Production");
        assert_eq!(content.clients.len(), 10);
        assert_eq!(content.team.len(), 7);
        let ids: Vec<&str> = content.services.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["podcast", "content", "production"]);
    }

    #[test]
    fn every_service_page_has_content() {
        let content = SiteContent::load().unwrap();
        for page in [Page::Podcast, Page::Content, Page::Production] {
            assert!(content.service(page).is_some());
        }
        assert!(content.service(Page::Home).is_none());
    }

    #[test]
    fn malformed_json_is_a_content_error() {
        let err = SiteContent::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SiteError::Content(_)));
    }

    #[test]
    fn empty_client_list_is_rejected() {
        let json = content_with(|v| v["clients"] = serde_json::json!([]));
        let err = SiteContent::from_json(&json).unwrap_err();
        assert!(matches!(err, SiteError::MissingContent("clients")));
    }

    #[test]
    fn service_without_page_is_rejected() {
        let json = content_with(|v| v["services"][0]["id"] = serde_json::json!("weddings"));
        let err = SiteContent::from_json(&json).unwrap_err();
        assert!(matches!(err, SiteError::UnknownService(id) if id == "weddings"));
    }

    #[test]
    fn navigation_to_unknown_page_is_rejected() {
        let json = content_with(|v| v["navigation"][1]["page"] = serde_json::json!("blog"));
        let err = SiteContent::from_json(&json).unwrap_err();
        assert!(matches!(err, SiteError::UnknownNavTarget(page) if page == "blog"));
    }

    #[test]
    fn service_titles_capitalize_the_id() {
        let content = SiteContent::load().unwrap();
        assert_eq!(content.services[0].title(), "One Rupee Podcast");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("production"), "Production");
    }

    #[test]
    fn team_labels_include_name_when_known() {
        let content = SiteContent::load().unwrap();
        assert_eq!(content.team[0].label(), "Bimal Bhandari - Founder & CEO");
        assert_eq!(content.team[1].label(), "Creative Director");
    }

    #[test]
    fn marquee_repeats_clients_in_order() {
        let clients = vec!["A".to_string(), "B".to_string()];
        assert_eq!(marquee_track(&clients), ["A", "B", "A", "B"]);
    }
}
