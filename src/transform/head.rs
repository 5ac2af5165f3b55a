//! Head rewrites: title, meta description, canonical, social tags, robots.
//! Replacements hit the first match only; inserts land before `</head>` and
//! are guarded so re-running them is a no-op.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use super::{escape_html, insert_before};

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<title>.*?</title>").unwrap());
static META_DESC_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<meta[^>]*name="description"[^>]*>"#).unwrap());
static CONTENT_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"content="[^"]*""#).unwrap());

const ROBOTS_CONTENT: &str =
    "index, follow, max-image-preview:large, max-snippet:-1, max-video-preview:-1";

/// Replace the first `<title>` element; no-op when the shell has none.
pub fn replace_title(html: &str, meta_title: &str) -> String {
    let replacement = format!("<title>{}</title>", escape_html(meta_title));
    TITLE_RE.replace(html, NoExpand(&replacement)).into_owned()
}

/// Rewrite the `content` attribute of an existing description tag, or insert
/// a fresh tag before `</head>`. The tag is located first so attribute order
/// within it does not matter.
pub fn set_meta_description(html: &str, description: &str) -> String {
    let attr = format!("content=\"{}\"", escape_html(description));
    let Some(found) = META_DESC_TAG_RE.find(html) else {
        return insert_before(
            html,
            "</head>",
            &format!("<meta name=\"description\" {attr}>\n"),
        );
    };
    let tag = found.as_str();
    let rewritten = if CONTENT_ATTR_RE.is_match(tag) {
        CONTENT_ATTR_RE.replace(tag, NoExpand(&attr)).into_owned()
    } else if let Some(body) = tag.strip_suffix("/>") {
        format!("{} {attr}/>", body.trim_end())
    } else {
        // find() guarantees the tag ends with '>'
        format!("{} {attr}>", tag[..tag.len() - 1].trim_end())
    };
    let mut out = String::with_capacity(html.len() + attr.len());
    out.push_str(&html[..found.start()]);
    out.push_str(&rewritten);
    out.push_str(&html[found.end()..]);
    out
}

/// Insert the canonical link unless any canonical tag is already present.
pub fn ensure_canonical(html: &str, url: &str) -> String {
    if html.contains("rel=\"canonical\"") {
        return html.to_string();
    }
    insert_before(
        html,
        "</head>",
        &format!("<link rel=\"canonical\" href=\"{}\">\n", escape_html(url)),
    )
}

/// Insert the Open Graph / Twitter Card block unless one is already present
/// (keyed on `og:title`).
pub fn ensure_social_tags(html: &str, title: &str, description: &str, url: &str) -> String {
    if html.contains("property=\"og:title\"") {
        return html.to_string();
    }
    let title = escape_html(title);
    let description = escape_html(description);
    let url = escape_html(url);
    let block = format!(
        "<meta property=\"og:title\" content=\"{title}\">\n\
         <meta property=\"og:description\" content=\"{description}\">\n\
         <meta property=\"og:url\" content=\"{url}\">\n\
         <meta property=\"og:type\" content=\"website\">\n\
         <meta name=\"twitter:card\" content=\"summary_large_image\">\n\
         <meta name=\"twitter:title\" content=\"{title}\">\n\
         <meta name=\"twitter:description\" content=\"{description}\">\n"
    );
    insert_before(html, "</head>", &block)
}

/// Insert the robots directive unless a robots tag is already present.
pub fn ensure_robots(html: &str) -> String {
    if html.contains("name=\"robots\"") {
        return html.to_string();
    }
    insert_before(
        html,
        "</head>",
        &format!("<meta name=\"robots\" content=\"{ROBOTS_CONTENT}\">\n"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEAD: &str = "<head>\n<title>Old</title>\n</head>";

    #[test]
    fn replaces_first_title_only() {
        let html = "<title>A</title><title>B</title>";
        let out = replace_title(html, "New");
        assert_eq!(out, "<title>New</title><title>B</title>");
    }

    #[test]
    fn title_noop_when_absent() {
        assert_eq!(replace_title("<head></head>", "New"), "<head></head>");
    }

    #[test]
    fn title_escapes_and_ignores_dollar() {
        let out = replace_title("<title>Old</title>", "Save $100 & more");
        assert_eq!(out, "<title>Save $100 &amp; more</title>");
    }

    #[test]
    fn description_replaced_in_place() {
        let html = "<head><meta name=\"description\" content=\"old\"></head>";
        let out = set_meta_description(html, "new text");
        assert!(out.contains("content=\"new text\""));
        assert!(!out.contains("old"));
        assert_eq!(out.matches("name=\"description\"").count(), 1);
    }

    #[test]
    fn description_replaced_with_content_attr_first() {
        let html = "<head><meta content=\"old\" name=\"description\"></head>";
        let out = set_meta_description(html, "new text");
        assert!(out.contains("content=\"new text\""));
        assert!(!out.contains("content=\"old\""));
        assert_eq!(out.matches("name=\"description\"").count(), 1);
    }

    #[test]
    fn description_tag_without_content_gains_one() {
        let html = "<head><meta name=\"description\"></head>";
        let out = set_meta_description(html, "added");
        assert_eq!(out, "<head><meta name=\"description\" content=\"added\"></head>");
    }

    #[test]
    fn self_closing_description_tag_rewritten() {
        let html = "<head><meta content=\"old\" name=\"description\" /></head>";
        let out = set_meta_description(html, "new");
        assert_eq!(out, "<head><meta content=\"new\" name=\"description\" /></head>");
    }

    #[test]
    fn description_inserted_when_missing() {
        let out = set_meta_description(HEAD, "fresh");
        assert!(out.contains("<meta name=\"description\" content=\"fresh\">"));
    }

    #[test]
    fn canonical_guarded() {
        let once = ensure_canonical(HEAD, "https://medtransic.com/about");
        let twice = ensure_canonical(&once, "https://medtransic.com/other");
        assert_eq!(once, twice);
        assert_eq!(twice.matches("rel=\"canonical\"").count(), 1);
    }

    #[test]
    fn social_block_guarded() {
        let once = ensure_social_tags(HEAD, "T", "D", "https://medtransic.com/");
        assert_eq!(once.matches("og:title").count(), 1);
        assert!(once.contains("content=\"summary_large_image\""));
        let twice = ensure_social_tags(&once, "T", "D", "https://medtransic.com/");
        assert_eq!(once, twice);
    }

    #[test]
    fn robots_guarded() {
        let once = ensure_robots(HEAD);
        assert!(once.contains("max-snippet:-1"));
        assert_eq!(ensure_robots(&once), once);
    }

    #[test]
    fn inserts_noop_without_head_close() {
        let html = "<title>Old</title>";
        assert_eq!(ensure_canonical(html, "u"), html);
        assert_eq!(ensure_robots(html), html);
    }
}
