//! Sitemap writer: one `<url>` entry per successfully emitted route.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use tracing::info;

/// Write `sitemap.xml` at the output root. `lastmod` is the run date for
/// every entry; the whole site regenerates on each run.
pub fn write_sitemap(out_root: &Path, urls: &[String]) -> Result<()> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", "http://www.sitemaps.org/schemas/sitemap/0.9"));
    writer.write_event(Event::Start(urlset))?;

    let lastmod = chrono::Utc::now().format("%Y-%m-%d").to_string();
    for url in urls {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        writer.write_event(Event::Start(BytesStart::new("loc")))?;
        writer.write_event(Event::Text(BytesText::new(url)))?;
        writer.write_event(Event::End(BytesEnd::new("loc")))?;
        writer.write_event(Event::Start(BytesStart::new("lastmod")))?;
        writer.write_event(Event::Text(BytesText::new(&lastmod)))?;
        writer.write_event(Event::End(BytesEnd::new("lastmod")))?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("urlset")))?;

    let path = out_root.join("sitemap.xml");
    fs::write(&path, writer.into_inner())
        .with_context(|| format!("could not write {}", path.display()))?;
    info!("Wrote sitemap with {} URLs", urls.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_loc_per_url() {
        let dir = std::env::temp_dir().join(format!("prerender-sitemap-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();

        let urls = vec![
            "https://medtransic.com/".to_string(),
            "https://medtransic.com/services/medical-coding".to_string(),
        ];
        write_sitemap(&dir, &urls).unwrap();

        let xml = fs::read_to_string(dir.join("sitemap.xml")).unwrap();
        assert_eq!(xml.matches("<loc>").count(), 2);
        assert!(xml.contains("<loc>https://medtransic.com/services/medical-coding</loc>"));
        assert!(xml.contains("<lastmod>"));
        assert!(xml.starts_with("<?xml"));
        let _ = fs::remove_dir_all(&dir);
    }
}
