//! HTML transformer: a fixed sequence of anchored text operations that turn
//! the built SPA shell into a crawler-ready snapshot for one page. Every
//! insertion is guarded by an existence check, so running the transform over
//! its own output is a fixed point.

pub mod body;
pub mod head;
pub mod schema;

use crate::content::{GENERAL_FAQ_LIMIT, SPECIALTY_FAQ_LIMIT};
use crate::page::PageData;

/// Full transform: head rewrites, structured data, visible fallback content,
/// hydration payload.
pub fn transform(base: &str, page: &PageData) -> String {
    let html = head::replace_title(base, page.meta_title());
    let html = head::set_meta_description(&html, page.meta_description());
    let html = head::ensure_canonical(&html, &page.canonical());
    let html = head::ensure_social_tags(
        &html,
        page.meta_title(),
        page.meta_description(),
        &page.canonical(),
    );
    let html = head::ensure_robots(&html);
    let html = inject_schemas(&html, page);
    let html = body::replace_root_contents(&html, &body::render_fallback(page));
    body::embed_page_data(&html, page)
}

/// Reduced transform for the CSS-inlining variant: title, meta description,
/// canonical, and visible fallback content only.
pub fn transform_basic(base: &str, page: &PageData) -> String {
    let html = head::replace_title(base, page.meta_title());
    let html = head::set_meta_description(&html, page.meta_description());
    let html = head::ensure_canonical(&html, &page.canonical());
    body::replace_root_contents(&html, &body::render_fallback(page))
}

fn inject_schemas(html: &str, page: &PageData) -> String {
    let mut html = html.to_string();

    let crumbs = page.breadcrumbs();
    if !crumbs.is_empty() {
        html = schema::inject(&html, "breadcrumb", &schema::breadcrumb_list(&crumbs));
    }

    match page {
        PageData::State { state } => {
            let value = schema::medical_business(
                &format!("Medtransic Medical Billing - {}", state.state_name),
                &state.meta_description,
                &page.canonical(),
                &state.state_name,
            );
            html = schema::inject(&html, "business", &value);
        }
        PageData::City { city, .. } => {
            let value = schema::medical_business(
                &format!("Medtransic Medical Billing - {}", city.city_name),
                &city.meta_description,
                &page.canonical(),
                &city.city_name,
            );
            html = schema::inject(&html, "business", &value);
        }
        PageData::Service { .. } => {
            let value =
                schema::service(&page.h1_text(), page.meta_description(), &page.canonical());
            html = schema::inject(&html, "service", &value);
        }
        PageData::Specialty { slug, faqs, .. } => {
            let value = schema::medical_specialty(
                &crate::catalog::title_case_slug(slug),
                page.meta_description(),
                &page.canonical(),
            );
            html = schema::inject(&html, "specialty", &value);
            if !faqs.is_empty() {
                let value = schema::faq_page(faqs, SPECIALTY_FAQ_LIMIT);
                html = schema::inject(&html, "faq", &value);
            }
        }
        PageData::Static { faqs, .. } if !faqs.is_empty() => {
            let value = schema::faq_page(faqs, GENERAL_FAQ_LIMIT);
            html = schema::inject(&html, "faq", &value);
        }
        _ => {}
    }

    html
}

/// Insert `block` immediately before the first occurrence of `anchor`.
/// No-ops when the anchor is missing.
pub(crate) fn insert_before(html: &str, anchor: &str, block: &str) -> String {
    match html.find(anchor) {
        Some(idx) => {
            let mut out = String::with_capacity(html.len() + block.len());
            out.push_str(&html[..idx]);
            out.push_str(block);
            out.push_str(&html[idx..]);
            out
        }
        None => html.to_string(),
    }
}

/// Minimal HTML escaping for text dropped into markup or attribute values.
pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape `</` inside serialized JSON so a literal `</script>` in content
/// cannot terminate the surrounding script element.
pub(crate) fn escape_script_close(json: &str) -> String {
    json.replace("</", "<\\/")
}
