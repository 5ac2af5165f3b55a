//! Content store client: a thin typed wrapper over the Supabase PostgREST
//! endpoint that serves the dynamic page rows (states, cities, comparisons,
//! EMR integrations, FAQs). Every run fetches fresh; nothing is cached.

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::info;

/// General FAQ page keeps up to 50 entries.
pub const GENERAL_FAQ_LIMIT: usize = 50;
/// Specialty pages keep up to 20.
pub const SPECIALTY_FAQ_LIMIT: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Benefit {
    #[serde(default)]
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatePage {
    pub state_name: String,
    pub state_code: String,
    pub slug: String,
    pub hero_title: String,
    pub hero_description: String,
    #[serde(default)]
    pub major_cities: Vec<String>,
    #[serde(default)]
    pub key_benefits: Vec<Benefit>,
    pub meta_title: String,
    pub meta_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityPage {
    pub state_slug: String,
    pub city_name: String,
    pub city_slug: String,
    #[serde(default)]
    pub metro_area: Option<String>,
    #[serde(default)]
    pub population: Option<i64>,
    pub hero_title: String,
    pub hero_description: String,
    #[serde(default)]
    pub key_benefits: Vec<Benefit>,
    #[serde(default)]
    pub nearby_cities: Vec<String>,
    pub meta_title: String,
    pub meta_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonPage {
    pub slug: String,
    pub title: String,
    pub hero_title: String,
    pub hero_description: String,
    pub meta_title: String,
    pub meta_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmrIntegration {
    pub slug: String,
    pub emr_name: String,
    pub hero_title: String,
    pub hero_description: String,
    pub meta_title: String,
    pub meta_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    pub specialty_slug: String,
    pub question: String,
    /// May contain inline HTML.
    pub answer: String,
    pub priority: i64,
}

pub struct ContentClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ContentClient {
    /// Build a client from `SUPABASE_URL` / `SUPABASE_ANON_KEY`.
    /// Missing credentials are a startup failure.
    pub fn from_env() -> Result<Self> {
        let base_url = match std::env::var("SUPABASE_URL") {
            Ok(v) if !v.is_empty() => v,
            _ => bail!("SUPABASE_URL environment variable must be set"),
        };
        let api_key = match std::env::var("SUPABASE_ANON_KEY") {
            Ok(v) if !v.is_empty() => v,
            _ => bail!("SUPABASE_ANON_KEY environment variable must be set"),
        };
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        let rows = self
            .http
            .get(&url)
            .query(query)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .with_context(|| format!("request to {table} failed"))?
            .error_for_status()
            .with_context(|| format!("content store rejected {table} query"))?
            .json::<Vec<T>>()
            .await
            .with_context(|| format!("could not decode {table} rows"))?;
        Ok(rows)
    }

    pub async fn state_pages(&self) -> Result<Vec<StatePage>> {
        let rows = self
            .select("state_pages", &[("select", "*"), ("order", "state_name.asc")])
            .await?;
        info!("Fetched {} state pages", rows.len());
        Ok(rows)
    }

    pub async fn city_pages(&self) -> Result<Vec<CityPage>> {
        let rows = self
            .select("city_pages", &[("select", "*"), ("order", "city_name.asc")])
            .await?;
        info!("Fetched {} city pages", rows.len());
        Ok(rows)
    }

    pub async fn comparison_pages(&self) -> Result<Vec<ComparisonPage>> {
        let rows = self
            .select("comparison_pages", &[("select", "*"), ("order", "slug.asc")])
            .await?;
        info!("Fetched {} comparison pages", rows.len());
        Ok(rows)
    }

    pub async fn emr_integrations(&self) -> Result<Vec<EmrIntegration>> {
        let rows = self
            .select("emr_integrations", &[("select", "*"), ("order", "emr_name.asc")])
            .await?;
        info!("Fetched {} EMR integrations", rows.len());
        Ok(rows)
    }

    /// FAQs for one specialty slug (or the literal `general`), ascending by
    /// priority, capped at `limit`.
    pub async fn faqs(&self, specialty_slug: &str, limit: usize) -> Result<Vec<Faq>> {
        let eq = format!("eq.{specialty_slug}");
        let limit_s = limit.to_string();
        self.select(
            "faqs",
            &[
                ("select", "*"),
                ("specialty_slug", eq.as_str()),
                ("order", "priority.asc"),
                ("limit", limit_s.as_str()),
            ],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_row_lenient_defaults() {
        let json = r#"{
            "state_name": "Texas",
            "state_code": "TX",
            "slug": "texas",
            "hero_title": "Medical Billing Services in Texas",
            "hero_description": "Statewide billing support.",
            "meta_title": "Texas Medical Billing | Medtransic",
            "meta_description": "Billing for Texas practices."
        }"#;
        let row: StatePage = serde_json::from_str(json).unwrap();
        assert!(row.major_cities.is_empty());
        assert!(row.key_benefits.is_empty());
    }

    #[test]
    fn city_row_full() {
        let json = r#"{
            "state_slug": "texas",
            "city_name": "Houston",
            "city_slug": "houston",
            "metro_area": "Greater Houston",
            "population": 2304580,
            "hero_title": "Houston Medical Billing",
            "hero_description": "Local expertise.",
            "key_benefits": [{"icon": "shield", "title": "HIPAA", "description": "Secure."}],
            "nearby_cities": ["Pasadena", "Sugar Land"],
            "meta_title": "Houston Medical Billing | Medtransic",
            "meta_description": "Billing for Houston practices."
        }"#;
        let row: CityPage = serde_json::from_str(json).unwrap();
        assert_eq!(row.key_benefits[0].title, "HIPAA");
        assert_eq!(row.nearby_cities.len(), 2);
    }

    #[test]
    fn benefit_icon_optional() {
        let b: Benefit =
            serde_json::from_str(r#"{"title": "Fast", "description": "Quick claims."}"#).unwrap();
        assert!(b.icon.is_empty());
    }
}
