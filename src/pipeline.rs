//! Orchestrator: the linear stage walk over every route family. Startup
//! failures (shell, credentials, state query) abort the run; everything else
//! is per-route and tolerated.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, warn};

use crate::catalog::{self, service_meta, specialty_meta};
use crate::content::{
    CityPage, ContentClient, Faq, StatePage, GENERAL_FAQ_LIMIT, SPECIALTY_FAQ_LIMIT,
};
use crate::emit::{record, Emitter, GeneratorMode, RunSummary, StageCounts};
use crate::inline;
use crate::page::PageData;
use crate::sitemap;

/// Run the whole build. Stage order is fixed:
/// home -> services index -> states -> cities -> static -> services ->
/// specialties -> comparisons -> integrations -> sitemap.
pub async fn run(dist: &Path, out: &Path, mode: GeneratorMode) -> Result<RunSummary> {
    let shell_path = dist.join("index.html");
    let mut base_html = fs::read_to_string(&shell_path)
        .with_context(|| format!("could not read base HTML at {}", shell_path.display()))?;

    if mode == GeneratorMode::InlineCss {
        let css = inline::collect_css(&dist.join("assets"))?;
        base_html = inline::inline_css(&base_html, &css);
    }

    let client = ContentClient::from_env()?;
    let mut emitter = Emitter::new(out, base_html, mode);
    let mut summary = RunSummary::default();

    // Homepage and services index: bespoke content blocks, same emit path.
    let mut counts = StageCounts::default();
    record(&mut counts, "/", emitter.emit(&PageData::Home));
    summary.push("home", counts);

    let mut counts = StageCounts::default();
    record(&mut counts, "services", emitter.emit(&PageData::ServicesIndex));
    summary.push("services-index", counts);

    // The mandatory query: no states, no run.
    let states = client
        .state_pages()
        .await
        .context("state page query failed")?;
    summary.push("states", state_stage(&mut emitter, &states));

    // Cities join against the fetched states; an unmatched city is skipped,
    // counted neither as success nor error.
    let state_names: HashMap<String, String> = states
        .iter()
        .map(|s| (s.slug.clone(), s.state_name.clone()))
        .collect();
    let mut counts = StageCounts::default();
    match client.city_pages().await {
        Ok(cities) => {
            counts = city_stage(&mut emitter, &state_names, cities, &mut summary.skipped)
        }
        Err(e) => error!("City page query failed, skipping stage: {e:#}"),
    }
    summary.push("cities", counts);

    // Static informational pages; the FAQ page carries the general FAQ set.
    let mut counts = StageCounts::default();
    for (path, title, description) in catalog::STATIC_PAGES {
        let faqs = if *path == "faq" {
            faqs_degraded(&client, "general", GENERAL_FAQ_LIMIT).await
        } else {
            Vec::new()
        };
        let page = PageData::Static {
            path: (*path).to_string(),
            title: (*title).to_string(),
            description: (*description).to_string(),
            faqs,
        };
        record(&mut counts, path, emitter.emit(&page));
    }
    summary.push("static", counts);

    // Service detail pages from the catalog.
    let mut counts = StageCounts::default();
    for (slug, _, _) in catalog::SERVICES {
        let meta = service_meta(slug);
        let page = PageData::Service {
            slug: (*slug).to_string(),
            title: meta.title,
            description: meta.description,
        };
        record(&mut counts, &page.route_path(), emitter.emit(&page));
    }
    summary.push("services", counts);

    // Specialty detail pages, each with its own FAQ set.
    let mut counts = StageCounts::default();
    for (slug, _, _) in catalog::SPECIALTIES {
        let meta = specialty_meta(slug);
        let faqs = faqs_degraded(&client, slug, SPECIALTY_FAQ_LIMIT).await;
        let page = PageData::Specialty {
            slug: (*slug).to_string(),
            title: meta.title,
            description: meta.description,
            faqs,
        };
        record(&mut counts, &page.route_path(), emitter.emit(&page));
    }
    summary.push("specialties", counts);

    // Comparison and integration pages only exist in the full build.
    if mode == GeneratorMode::Full {
        let mut counts = StageCounts::default();
        match client.comparison_pages().await {
            Ok(rows) => {
                for row in rows {
                    let page = PageData::Comparison { row };
                    record(&mut counts, &page.route_path(), emitter.emit(&page));
                }
            }
            Err(e) => error!("Comparison query failed, skipping stage: {e:#}"),
        }
        summary.push("comparisons", counts);

        let mut counts = StageCounts::default();
        match client.emr_integrations().await {
            Ok(rows) => {
                for row in rows {
                    let page = PageData::Integration { row };
                    record(&mut counts, &page.route_path(), emitter.emit(&page));
                }
            }
            Err(e) => error!("EMR integration query failed, skipping stage: {e:#}"),
        }
        summary.push("integrations", counts);

        if let Err(e) = sitemap::write_sitemap(emitter.out_root(), &emitter.written) {
            warn!("Sitemap write failed: {e:#}");
        }
    }

    Ok(summary)
}

/// Emit every state page; a failing route is counted, never fatal.
fn state_stage(emitter: &mut Emitter, states: &[StatePage]) -> StageCounts {
    let mut counts = StageCounts::default();
    for state in states {
        let page = PageData::State { state: state.clone() };
        record(&mut counts, &page.route_path(), emitter.emit(&page));
    }
    counts
}

/// Emit every city page that resolves to a fetched state; unmatched cities
/// bump `skipped` instead of the error tally.
fn city_stage(
    emitter: &mut Emitter,
    state_names: &HashMap<String, String>,
    cities: Vec<CityPage>,
    skipped: &mut usize,
) -> StageCounts {
    let mut counts = StageCounts::default();
    let pb = ProgressBar::new(cities.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} city pages")
            .unwrap()
            .progress_chars("=> "),
    );
    for city in cities {
        match resolve_city(state_names, city) {
            Some(page) => record(&mut counts, &page.route_path(), emitter.emit(&page)),
            None => *skipped += 1,
        }
        pb.inc(1);
    }
    pb.finish_and_clear();
    counts
}

/// A city resolves only against a fetched state; otherwise it is skipped
/// with a warning.
fn resolve_city(state_names: &HashMap<String, String>, city: CityPage) -> Option<PageData> {
    match state_names.get(&city.state_slug) {
        Some(state_name) => Some(PageData::City {
            city,
            state_name: state_name.clone(),
        }),
        None => {
            warn!(
                "Skipping city {}/{}: no matching state page",
                city.state_slug, city.city_slug
            );
            None
        }
    }
}

/// FAQ queries degrade: a failure means the page goes out without FAQ
/// content, never that the page fails.
async fn faqs_degraded(client: &ContentClient, slug: &str, limit: usize) -> Vec<Faq> {
    match client.faqs(slug, limit).await {
        Ok(faqs) => faqs,
        Err(e) => {
            warn!("FAQ query for {slug} failed, continuing without FAQs: {e:#}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(slug: &str, name: &str) -> StatePage {
        serde_json::from_str(&format!(
            r#"{{
                "state_name": "{name}", "state_code": "XX", "slug": "{slug}",
                "hero_title": "Medical Billing Services in {name}",
                "hero_description": "Statewide support.",
                "meta_title": "{name} Medical Billing | Medtransic",
                "meta_description": "Billing for {name} practices."
            }}"#
        ))
        .unwrap()
    }

    fn city(state_slug: &str) -> CityPage {
        serde_json::from_str(&format!(
            r#"{{
                "state_slug": "{state_slug}", "city_name": "Springfield",
                "city_slug": "springfield",
                "hero_title": "Springfield Medical Billing",
                "hero_description": "Local expertise.",
                "meta_title": "Springfield | Medtransic",
                "meta_description": "Billing."
            }}"#
        ))
        .unwrap()
    }

    #[test]
    fn city_with_known_state_resolves() {
        let mut states = HashMap::new();
        states.insert("illinois".to_string(), "Illinois".to_string());
        let page = resolve_city(&states, city("illinois")).unwrap();
        assert_eq!(
            page.route_path(),
            "medical-billing-services/illinois/springfield"
        );
        match page {
            PageData::City { state_name, .. } => assert_eq!(state_name, "Illinois"),
            other => panic!("expected city page, got {other:?}"),
        }
    }

    #[test]
    fn city_without_state_is_skipped() {
        let states = HashMap::new();
        assert!(resolve_city(&states, city("atlantis")).is_none());
    }

    #[test]
    fn failed_state_writes_do_not_stop_city_stage() {
        let out = std::env::temp_dir().join(format!(
            "prerender-stages-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&out);
        fs::create_dir_all(out.join("medical-billing-services")).unwrap();
        // A plain file at the texas route directory makes that one state
        // (and only that one) fail to write.
        fs::write(out.join("medical-billing-services/texas"), "in the way").unwrap();

        let shell =
            "<html><head><title>T</title></head><body><div id=\"root\"></div></body></html>";
        let mut emitter = Emitter::new(&out, shell.to_string(), GeneratorMode::Full);

        let states = vec![state("texas", "Texas"), state("florida", "Florida")];
        let counts = state_stage(&mut emitter, &states);
        assert_eq!(counts.ok, 1);
        assert_eq!(counts.errors, 1);

        let state_names: HashMap<String, String> = states
            .iter()
            .map(|s| (s.slug.clone(), s.state_name.clone()))
            .collect();
        let mut skipped = 0;
        let counts = city_stage(&mut emitter, &state_names, vec![city("florida")], &mut skipped);
        assert_eq!(counts.ok, 1);
        assert_eq!(counts.errors, 0);
        assert_eq!(skipped, 0);
        assert!(out
            .join("medical-billing-services/florida/springfield/index.html")
            .is_file());

        let _ = fs::remove_dir_all(&out);
    }
}
