//! The page-data union threaded through the transformer, one variant per
//! route family, plus the canonical-URL and breadcrumb rules for each.

use serde::Serialize;

use crate::catalog::title_case_slug;
use crate::content::{CityPage, ComparisonPage, EmrIntegration, Faq, StatePage};

pub const SITE_URL: &str = "https://medtransic.com";

pub const HOME_TITLE: &str =
    "Medical Billing Services | Revenue Cycle Management | Medtransic";
pub const HOME_DESCRIPTION: &str =
    "Medtransic delivers end-to-end medical billing and revenue cycle management for practices nationwide. 98% clean claim rate, transparent pricing, dedicated account managers.";
pub const SERVICES_INDEX_TITLE: &str =
    "Our Services | Complete Medical Billing Solutions | Medtransic";
pub const SERVICES_INDEX_DESCRIPTION: &str =
    "Explore Medtransic's full range of medical billing services: coding, claims, denial management, credentialing, A/R recovery, and more.";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Breadcrumb {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "page_type", rename_all = "snake_case")]
pub enum PageData {
    Home,
    ServicesIndex,
    State {
        #[serde(flatten)]
        state: StatePage,
    },
    City {
        #[serde(flatten)]
        city: CityPage,
        state_name: String,
    },
    Service {
        slug: String,
        title: String,
        description: String,
    },
    Specialty {
        slug: String,
        title: String,
        description: String,
        faqs: Vec<Faq>,
    },
    Static {
        path: String,
        title: String,
        description: String,
        faqs: Vec<Faq>,
    },
    Comparison {
        #[serde(flatten)]
        row: ComparisonPage,
    },
    Integration {
        #[serde(flatten)]
        row: EmrIntegration,
    },
}

impl PageData {
    /// Output path relative to the output root; empty for the homepage.
    pub fn route_path(&self) -> String {
        match self {
            PageData::Home => String::new(),
            PageData::ServicesIndex => "services".to_string(),
            PageData::State { state } => format!("medical-billing-services/{}", state.slug),
            PageData::City { city, .. } => {
                format!("medical-billing-services/{}/{}", city.state_slug, city.city_slug)
            }
            PageData::Service { slug, .. } => format!("services/{slug}"),
            PageData::Specialty { slug, .. } => format!("specialties/{slug}"),
            PageData::Static { path, .. } => path.clone(),
            PageData::Comparison { row } => format!("comparisons/{}", row.slug),
            PageData::Integration { row } => format!("integrations/{}", row.slug),
        }
    }

    /// Canonical URL for the route. The homepage keeps its trailing slash;
    /// everything else is `{SITE_URL}/{route_path}`.
    pub fn canonical(&self) -> String {
        match self {
            PageData::Home => format!("{SITE_URL}/"),
            other => format!("{SITE_URL}/{}", other.route_path()),
        }
    }

    pub fn meta_title(&self) -> &str {
        match self {
            PageData::Home => HOME_TITLE,
            PageData::ServicesIndex => SERVICES_INDEX_TITLE,
            PageData::State { state } => &state.meta_title,
            PageData::City { city, .. } => &city.meta_title,
            PageData::Service { title, .. } => title,
            PageData::Specialty { title, .. } => title,
            PageData::Static { title, .. } => title,
            PageData::Comparison { row } => &row.meta_title,
            PageData::Integration { row } => &row.meta_title,
        }
    }

    pub fn meta_description(&self) -> &str {
        match self {
            PageData::Home => HOME_DESCRIPTION,
            PageData::ServicesIndex => SERVICES_INDEX_DESCRIPTION,
            PageData::State { state } => &state.meta_description,
            PageData::City { city, .. } => &city.meta_description,
            PageData::Service { description, .. } => description,
            PageData::Specialty { description, .. } => description,
            PageData::Static { description, .. } => description,
            PageData::Comparison { row } => &row.meta_description,
            PageData::Integration { row } => &row.meta_description,
        }
    }

    /// Visible `<h1>` text for the fallback content.
    pub fn h1_text(&self) -> String {
        match self {
            PageData::Home => "Medical Billing Services That Grow Your Practice".to_string(),
            PageData::ServicesIndex => "Complete Medical Billing Services".to_string(),
            PageData::State { state } => state.hero_title.clone(),
            PageData::City { city, .. } => city.hero_title.clone(),
            PageData::Service { slug, .. } => format!("{} Services", title_case_slug(slug)),
            PageData::Specialty { slug, .. } => {
                format!("{} Medical Billing Services", title_case_slug(slug))
            }
            // Static catalog titles are full meta titles; the part before the
            // first pipe is the display title.
            PageData::Static { title, .. } => {
                title.split('|').next().unwrap_or(title).trim().to_string()
            }
            PageData::Comparison { row } => row.hero_title.clone(),
            PageData::Integration { row } => row.hero_title.clone(),
        }
    }

    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        let home = Breadcrumb {
            name: "Home".to_string(),
            url: format!("{SITE_URL}/"),
        };
        let crumb = |name: &str, path: &str| Breadcrumb {
            name: name.to_string(),
            url: format!("{SITE_URL}/{path}"),
        };
        match self {
            PageData::Home => vec![home],
            PageData::ServicesIndex => vec![home, crumb("Services", "services")],
            PageData::State { state } => vec![
                home,
                crumb("Medical Billing Services", "medical-billing-services"),
                crumb(&state.state_name, &self.route_path()),
            ],
            PageData::City { city, state_name } => vec![
                home,
                crumb("Medical Billing Services", "medical-billing-services"),
                crumb(
                    state_name,
                    &format!("medical-billing-services/{}", city.state_slug),
                ),
                crumb(&city.city_name, &self.route_path()),
            ],
            PageData::Service { slug, .. } => vec![
                home,
                crumb("Services", "services"),
                crumb(&title_case_slug(slug), &self.route_path()),
            ],
            PageData::Specialty { slug, .. } => vec![
                home,
                crumb("Specialties", "specialties"),
                crumb(&title_case_slug(slug), &self.route_path()),
            ],
            PageData::Static { path, .. } => {
                let mut crumbs = vec![home];
                let mut prefix = String::new();
                for segment in path.split('/').filter(|s| !s.is_empty()) {
                    if !prefix.is_empty() {
                        prefix.push('/');
                    }
                    prefix.push_str(segment);
                    crumbs.push(crumb(&title_case_slug(segment), &prefix));
                }
                crumbs
            }
            PageData::Comparison { row } => vec![
                home,
                crumb("Comparisons", "comparisons"),
                crumb(&row.title, &self.route_path()),
            ],
            PageData::Integration { row } => vec![
                home,
                crumb("Integrations", "integrations"),
                crumb(&row.emr_name, &self.route_path()),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::service_meta;

    fn state_fixture() -> StatePage {
        serde_json::from_str(
            r#"{
                "state_name": "Texas", "state_code": "TX", "slug": "texas",
                "hero_title": "Medical Billing Services in Texas",
                "hero_description": "Statewide support.",
                "meta_title": "Texas Medical Billing | Medtransic",
                "meta_description": "Billing for Texas practices."
            }"#,
        )
        .unwrap()
    }

    fn city_fixture() -> CityPage {
        serde_json::from_str(
            r#"{
                "state_slug": "texas", "city_name": "Houston", "city_slug": "houston",
                "hero_title": "Houston Medical Billing",
                "hero_description": "Local expertise.",
                "meta_title": "Houston Medical Billing | Medtransic",
                "meta_description": "Billing for Houston practices."
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn canonical_home() {
        assert_eq!(PageData::Home.canonical(), "https://medtransic.com/");
    }

    #[test]
    fn canonical_state_and_city() {
        let state = PageData::State { state: state_fixture() };
        assert_eq!(
            state.canonical(),
            "https://medtransic.com/medical-billing-services/texas"
        );
        let city = PageData::City { city: city_fixture(), state_name: "Texas".into() };
        assert_eq!(
            city.canonical(),
            "https://medtransic.com/medical-billing-services/texas/houston"
        );
    }

    #[test]
    fn canonical_catalog_routes() {
        let meta = service_meta("medical-coding");
        let service = PageData::Service {
            slug: "medical-coding".into(),
            title: meta.title,
            description: meta.description,
        };
        assert_eq!(service.canonical(), "https://medtransic.com/services/medical-coding");

        let page = PageData::Static {
            path: "resources/cpt-codes".into(),
            title: "CPT Codes | Medtransic".into(),
            description: "Reference.".into(),
            faqs: vec![],
        };
        assert_eq!(page.canonical(), "https://medtransic.com/resources/cpt-codes");
    }

    #[test]
    fn fallback_service_breadcrumbs() {
        let meta = service_meta("novel-service");
        let page = PageData::Service {
            slug: "novel-service".into(),
            title: meta.title,
            description: meta.description,
        };
        let names: Vec<_> = page.breadcrumbs().iter().map(|b| b.name.clone()).collect();
        assert_eq!(names, vec!["Home", "Services", "Novel Service"]);
    }

    #[test]
    fn static_title_before_pipe_is_h1() {
        let page = PageData::Static {
            path: "about".into(),
            title: "About Medtransic | Medical Billing Company".into(),
            description: "About us.".into(),
            faqs: vec![],
        };
        assert_eq!(page.h1_text(), "About Medtransic");
    }

    #[test]
    fn payload_tagged_by_page_type() {
        let value = serde_json::to_value(PageData::State { state: state_fixture() }).unwrap();
        assert_eq!(value["page_type"], "state");
        assert_eq!(value["slug"], "texas");
    }
}
