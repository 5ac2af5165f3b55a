//! Shell preparation for the simplified generator: concatenate the built CSS
//! bundle and inline it into the shell so each snapshot is self-styled.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::info;

use crate::transform::insert_before;

static STYLESHEET_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<link[^>]*rel="stylesheet"[^>]*>\s*"#).unwrap()
});

/// Concatenate every `.css` file under the assets directory, sorted by file
/// name for a stable result. An absent directory yields an empty bundle.
pub fn collect_css(assets_dir: &Path) -> Result<String> {
    if !assets_dir.is_dir() {
        return Ok(String::new());
    }
    let mut css_files: Vec<_> = fs::read_dir(assets_dir)
        .with_context(|| format!("could not read {}", assets_dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "css"))
        .collect();
    css_files.sort();

    let mut bundle = String::new();
    for path in &css_files {
        let css = fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        bundle.push_str(&css);
        bundle.push('\n');
    }
    info!("Inlined {} stylesheet(s)", css_files.len());
    Ok(bundle)
}

/// Inline the bundle as a single `<style>` before `</head>` and drop the
/// stylesheet `<link>` tags it replaces.
pub fn inline_css(html: &str, css: &str) -> String {
    if css.is_empty() {
        return html.to_string();
    }
    let stripped = STYLESHEET_LINK_RE.replace_all(html, "").into_owned();
    insert_before(&stripped, "</head>", &format!("<style>{css}</style>\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concatenates_sorted_css() {
        let dir = std::env::temp_dir().join(format!("prerender-css-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("b.css"), "b{}").unwrap();
        fs::write(dir.join("a.css"), "a{}").unwrap();
        fs::write(dir.join("index.js"), "ignored").unwrap();

        let bundle = collect_css(&dir).unwrap();
        assert_eq!(bundle, "a{}\nb{}\n");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_assets_dir_is_empty_bundle() {
        let bundle = collect_css(Path::new("/nonexistent/assets")).unwrap();
        assert!(bundle.is_empty());
    }

    #[test]
    fn inlines_style_and_strips_links() {
        let html = "<head><link rel=\"stylesheet\" href=\"/assets/a.css\">\n</head><body></body>";
        let out = inline_css(html, "a{color:red}");
        assert!(out.contains("<style>a{color:red}</style>"));
        assert!(!out.contains("rel=\"stylesheet\""));
    }

    #[test]
    fn empty_css_leaves_shell_alone() {
        let html = "<head></head>";
        assert_eq!(inline_css(html, ""), html);
    }
}
