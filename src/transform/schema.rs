//! JSON-LD builders (schema.org vocabulary) and the guarded script injector.
//! Each injected script carries a `data-schema` marker so re-injection of the
//! same kind is a no-op.

use serde_json::{json, Value};

use super::{escape_script_close, insert_before};
use crate::content::Faq;
use crate::page::Breadcrumb;

pub fn breadcrumb_list(crumbs: &[Breadcrumb]) -> Value {
    let items: Vec<Value> = crumbs
        .iter()
        .enumerate()
        .map(|(i, c)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": c.name,
                "item": c.url,
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}

pub fn medical_business(name: &str, description: &str, url: &str, area: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "MedicalBusiness",
        "@id": url,
        "name": name,
        "description": description,
        "url": url,
        "areaServed": { "@type": "AdministrativeArea", "name": area },
        "priceRange": "$$",
    })
}

pub fn service(name: &str, description: &str, url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Service",
        "serviceType": name,
        "description": description,
        "url": url,
        "provider": {
            "@type": "Organization",
            "name": "Medtransic",
            "url": crate::page::SITE_URL,
        },
    })
}

pub fn medical_specialty(name: &str, description: &str, url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "MedicalSpecialty",
        "name": name,
        "description": description,
        "url": url,
    })
}

/// FAQPage schema: entries ascending by priority, capped at `cap`.
pub fn faq_page(faqs: &[Faq], cap: usize) -> Value {
    let mut ordered: Vec<&Faq> = faqs.iter().collect();
    ordered.sort_by_key(|f| f.priority);
    let entries: Vec<Value> = ordered
        .into_iter()
        .take(cap)
        .map(|f| {
            json!({
                "@type": "Question",
                "name": f.question,
                "acceptedAnswer": { "@type": "Answer", "text": f.answer },
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": entries,
    })
}

/// Inject one JSON-LD script before `</head>`, keyed by its `data-schema`
/// marker; a document already carrying that marker is returned unchanged.
pub fn inject(html: &str, kind: &str, value: &Value) -> String {
    let marker = format!("data-schema=\"{kind}\"");
    if html.contains(&marker) {
        return html.to_string();
    }
    let json = escape_script_close(&value.to_string());
    insert_before(
        html,
        "</head>",
        &format!("<script type=\"application/ld+json\" {marker}>{json}</script>\n"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faq(priority: i64) -> Faq {
        Faq {
            specialty_slug: "general".into(),
            question: format!("Question {priority}?"),
            answer: format!("Answer {priority}."),
            priority,
        }
    }

    #[test]
    fn breadcrumb_positions_start_at_one() {
        let crumbs = vec![
            Breadcrumb { name: "Home".into(), url: "https://medtransic.com/".into() },
            Breadcrumb { name: "Services".into(), url: "https://medtransic.com/services".into() },
        ];
        let value = breadcrumb_list(&crumbs);
        let items = value["itemListElement"].as_array().unwrap();
        assert_eq!(items[0]["position"], 1);
        assert_eq!(items[1]["name"], "Services");
    }

    #[test]
    fn faq_capped_and_ordered() {
        // 60 records, reverse order on input; schema keeps 50, ascending.
        let faqs: Vec<Faq> = (0..60).rev().map(faq).collect();
        let value = faq_page(&faqs, 50);
        let entries = value["mainEntity"].as_array().unwrap();
        assert_eq!(entries.len(), 50);
        assert_eq!(entries[0]["name"], "Question 0?");
        assert_eq!(entries[49]["name"], "Question 49?");
    }

    #[test]
    fn inject_guarded_by_marker() {
        let html = "<head></head>";
        let value = json!({"@type": "Thing"});
        let once = inject(html, "service", &value);
        assert!(once.contains("application/ld+json"));
        let twice = inject(&once, "service", &value);
        assert_eq!(once, twice);
        // A different kind still goes in.
        let other = inject(&once, "faq", &value);
        assert_eq!(other.matches("ld+json").count(), 2);
    }

    #[test]
    fn inject_escapes_script_close() {
        let value = json!({"text": "bad </script> content"});
        let out = inject("<head></head>", "faq", &value);
        assert!(!out.contains("bad </script>"));
        assert!(out.contains("<\\/script>"));
    }
}
