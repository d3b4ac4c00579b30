// src/sitemap/parse.rs
// Text-level parsing for robots.txt and sitemap XML.
//
// Sitemaps are scanned for <loc>...</loc> pairs with plain substring search.
// No XML parser is involved; namespaces, <url> vs <sitemap> wrappers and
// the rest of the document are ignored.

const SITEMAP_DIRECTIVE: &str = "sitemap:";
const LOC_OPEN: &str = "<loc>";
const LOC_CLOSE: &str = "</loc>";

/// Sitemap URLs declared in a robots.txt body, in file order.
pub fn parse_robots_sitemaps(robots_txt: &str) -> Vec<String> {
    robots_txt
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            let directive = line.get(..SITEMAP_DIRECTIVE.len())?;
            if !directive.eq_ignore_ascii_case(SITEMAP_DIRECTIVE) {
                return None;
            }
            let url = line[SITEMAP_DIRECTIVE.len()..].trim();
            (!url.is_empty()).then(|| url.to_string())
        })
        .collect()
}

/// Every non-empty `<loc>` value in document order, trimmed.
pub fn extract_locs(xml: &str) -> Vec<String> {
    let mut locs = Vec::new();
    let mut rest = xml;

    while let Some(start) = rest.find(LOC_OPEN) {
        let after_open = &rest[start + LOC_OPEN.len()..];
        let Some(end) = after_open.find(LOC_CLOSE) else {
            break;
        };

        let value = after_open[..end].trim();
        if !value.is_empty() {
            locs.push(value.to_string());
        }
        rest = &after_open[end + LOC_CLOSE.len()..];
    }

    locs
}

// Nested sitemap (index entry) rather than a content page
pub fn is_nested_sitemap(loc: &str) -> bool {
    loc.ends_with(".xml")
}
