//! Visible fallback content: replaces the SPA mount point's contents with
//! server-rendered semantic markup, and appends the hydration payload.

use super::{escape_html, escape_script_close, insert_before};
use crate::catalog::{self, title_case_slug};
use crate::content::{Benefit, CityPage, Faq, StatePage};
use crate::page::{PageData, SITE_URL};

const ROOT_OPEN: &str = "<div id=\"root\">";
const PAYLOAD_ID: &str = "page-state";

/// Replace everything between `<div id="root">` and its balanced closing tag.
/// No-ops when the mount point is missing or never closes.
pub fn replace_root_contents(html: &str, inner: &str) -> String {
    let Some(start) = html.find(ROOT_OPEN) else {
        return html.to_string();
    };
    let content_start = start + ROOT_OPEN.len();
    let Some(content_end) = find_balanced_close(html, content_start) else {
        return html.to_string();
    };
    let mut out = String::with_capacity(html.len() + inner.len());
    out.push_str(&html[..content_start]);
    out.push_str(inner);
    out.push_str(&html[content_end..]);
    out
}

/// Byte offset of the `</div>` that closes the element whose contents start
/// at `from` (depth 1 on entry).
fn find_balanced_close(html: &str, from: usize) -> Option<usize> {
    let mut depth = 1usize;
    let mut pos = from;
    loop {
        let rest = &html[pos..];
        let open = find_open_div(rest);
        let close = rest.find("</div>")?;
        match open {
            Some(o) if o < close => {
                depth += 1;
                pos += o + 4;
            }
            _ => {
                depth -= 1;
                if depth == 0 {
                    return Some(pos + close);
                }
                pos += close + 6;
            }
        }
    }
}

/// First `<div` that actually starts a div element (followed by `>` or
/// whitespace), skipping lookalikes such as `<divider`.
fn find_open_div(s: &str) -> Option<usize> {
    let mut start = 0;
    while let Some(i) = s[start..].find("<div") {
        let idx = start + i;
        match s.as_bytes().get(idx + 4) {
            Some(b'>') | Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r') => return Some(idx),
            _ => start = idx + 4,
        }
    }
    None
}

/// Append the serialized page record before `</body>` for client-side
/// hydration; guarded by the payload element id.
pub fn embed_page_data(html: &str, page: &PageData) -> String {
    let marker = format!("id=\"{PAYLOAD_ID}\"");
    if html.contains(&marker) {
        return html.to_string();
    }
    let Ok(json) = serde_json::to_string(page) else {
        return html.to_string();
    };
    let json = escape_script_close(&json);
    insert_before(
        html,
        "</body>",
        &format!("<script type=\"application/json\" {marker}>{json}</script>\n"),
    )
}

/// Semantic fallback markup for one page, dispatched by variant.
pub fn render_fallback(page: &PageData) -> String {
    match page {
        PageData::Home => render_home(),
        PageData::ServicesIndex => render_services_index(),
        PageData::State { state } => render_state(state),
        PageData::City { city, state_name } => render_city(city, state_name),
        PageData::Service { .. }
        | PageData::Comparison { .. }
        | PageData::Integration { .. } => render_simple(page),
        PageData::Specialty { faqs, .. } | PageData::Static { faqs, .. } => {
            render_with_faqs(page, faqs)
        }
    }
}

// Bespoke homepage block: richer than the generic template on purpose.
fn render_home() -> String {
    let mut out = String::from("<main>\n");
    out.push_str("<h1>Medical Billing Services That Grow Your Practice</h1>\n");
    out.push_str(&format!(
        "<p>{}</p>\n",
        escape_html(crate::page::HOME_DESCRIPTION)
    ));
    out.push_str("<section>\n<h2>Our Services</h2>\n<ul>\n");
    for (slug, _, desc) in catalog::SERVICES.iter().take(8) {
        out.push_str(&format!(
            "<li><a href=\"/services/{slug}\">{}</a> &mdash; {}</li>\n",
            escape_html(&title_case_slug(slug)),
            escape_html(desc),
        ));
    }
    out.push_str("</ul>\n</section>\n");
    out.push_str("<section>\n<h2>Why Practices Choose Medtransic</h2>\n<ul>\n");
    for point in [
        "98% clean claim rate on first submission",
        "Average 15-20% revenue increase in the first year",
        "Dedicated account manager for every practice",
        "We work inside your existing EHR/EMR",
        "Transparent pricing: a small percentage of collections, no hidden fees",
    ] {
        out.push_str(&format!("<li>{point}</li>\n"));
    }
    out.push_str("</ul>\n</section>\n");
    out.push_str(
        "<p><a href=\"/get-started\">Get a free billing analysis</a> or <a href=\"/contact\">contact our team</a>.</p>\n",
    );
    out.push_str("</main>\n");
    out
}

// Bespoke services-index block: the full catalog with descriptions.
fn render_services_index() -> String {
    let mut out = String::from("<main>\n<h1>Complete Medical Billing Services</h1>\n");
    out.push_str(&format!(
        "<p>{}</p>\n",
        escape_html(crate::page::SERVICES_INDEX_DESCRIPTION)
    ));
    out.push_str("<section>\n<ul>\n");
    for (slug, _, desc) in catalog::SERVICES {
        out.push_str(&format!(
            "<li><a href=\"/services/{slug}\"><h2>{}</h2></a><p>{}</p></li>\n",
            escape_html(&title_case_slug(slug)),
            escape_html(desc),
        ));
    }
    out.push_str("</ul>\n</section>\n</main>\n");
    out
}

fn render_state(state: &StatePage) -> String {
    let mut out = String::from("<main>\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape_html(&state.hero_title)));
    out.push_str(&format!("<p>{}</p>\n", escape_html(&state.hero_description)));
    out.push_str(&render_benefits(&state.key_benefits));
    if !state.major_cities.is_empty() {
        out.push_str(&format!(
            "<section>\n<h2>Cities We Serve in {}</h2>\n<ul>\n",
            escape_html(&state.state_name)
        ));
        for city in &state.major_cities {
            out.push_str(&format!(
                "<li><a href=\"{SITE_URL}/medical-billing-services/{}/{}\">{}</a></li>\n",
                state.slug,
                slugify(city),
                escape_html(city),
            ));
        }
        out.push_str("</ul>\n</section>\n");
    }
    out.push_str("</main>\n");
    out
}

fn render_city(city: &CityPage, state_name: &str) -> String {
    let mut out = String::from("<main>\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape_html(&city.hero_title)));
    out.push_str(&format!("<p>{}</p>\n", escape_html(&city.hero_description)));
    if let Some(metro) = &city.metro_area {
        out.push_str(&format!(
            "<p>Serving practices across the {} area of {}.</p>\n",
            escape_html(metro),
            escape_html(state_name),
        ));
    }
    out.push_str(&render_benefits(&city.key_benefits));
    if !city.nearby_cities.is_empty() {
        out.push_str("<section>\n<h2>Nearby Cities</h2>\n<ul>\n");
        for nearby in &city.nearby_cities {
            out.push_str(&format!("<li>{}</li>\n", escape_html(nearby)));
        }
        out.push_str("</ul>\n</section>\n");
    }
    out.push_str("</main>\n");
    out
}

fn render_simple(page: &PageData) -> String {
    format!(
        "<main>\n<h1>{}</h1>\n<p>{}</p>\n</main>\n",
        escape_html(&page.h1_text()),
        escape_html(page.meta_description()),
    )
}

fn render_with_faqs(page: &PageData, faqs: &[Faq]) -> String {
    let mut out = format!(
        "<main>\n<h1>{}</h1>\n<p>{}</p>\n",
        escape_html(&page.h1_text()),
        escape_html(page.meta_description()),
    );
    if !faqs.is_empty() {
        out.push_str("<section>\n<h2>Frequently Asked Questions</h2>\n");
        for faq in faqs {
            // Answers may carry inline HTML and are inserted as-is.
            out.push_str(&format!(
                "<h3>{}</h3>\n<div>{}</div>\n",
                escape_html(&faq.question),
                faq.answer,
            ));
        }
        out.push_str("</section>\n");
    }
    out.push_str("</main>\n");
    out
}

fn render_benefits(benefits: &[Benefit]) -> String {
    if benefits.is_empty() {
        return String::new();
    }
    let mut out = String::from("<section>\n<h2>Key Benefits</h2>\n<ul>\n");
    for b in benefits {
        out.push_str(&format!(
            "<li><h3>{}</h3><p>{}</p></li>\n",
            escape_html(&b.title),
            escape_html(&b.description),
        ));
    }
    out.push_str("</ul>\n</section>\n");
    out
}

fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_replacement_handles_nested_divs() {
        let html = "<body><div id=\"root\"><div><div>spinner</div></div></div><footer></footer></body>";
        let out = replace_root_contents(html, "<main>done</main>");
        assert_eq!(
            out,
            "<body><div id=\"root\"><main>done</main></div><footer></footer></body>"
        );
    }

    #[test]
    fn root_replacement_noop_without_mount() {
        let html = "<body><p>no root here</p></body>";
        assert_eq!(replace_root_contents(html, "x"), html);
    }

    #[test]
    fn root_replacement_noop_when_unbalanced() {
        let html = "<div id=\"root\"><div>never closed";
        assert_eq!(replace_root_contents(html, "x"), html);
    }

    #[test]
    fn open_div_skips_lookalike_tags() {
        assert_eq!(find_open_div("<divider><div class=\"a\">"), Some(9));
        assert_eq!(find_open_div("<divider>"), None);
    }

    #[test]
    fn payload_guarded() {
        let page = PageData::Home;
        let html = "<body></body>";
        let once = embed_page_data(html, &page);
        assert!(once.contains("id=\"page-state\""));
        assert!(once.contains("\"page_type\":\"home\""));
        let twice = embed_page_data(&once, &page);
        assert_eq!(once, twice);
    }

    #[test]
    fn faq_answers_kept_raw() {
        let page = PageData::Static {
            path: "faq".into(),
            title: "FAQ | Medtransic".into(),
            description: "Common questions.".into(),
            faqs: vec![Faq {
                specialty_slug: "general".into(),
                question: "How fast?".into(),
                answer: "Usually <strong>24 hours</strong>.".into(),
                priority: 1,
            }],
        };
        let out = render_fallback(&page);
        assert!(out.contains("<strong>24 hours</strong>"));
        assert!(out.contains("<h3>How fast?</h3>"));
    }

    #[test]
    fn slugify_city_names() {
        assert_eq!(slugify("San Antonio"), "san-antonio");
        assert_eq!(slugify("Coeur d'Alene"), "coeur-d-alene");
    }
}
