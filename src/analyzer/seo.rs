//! SEO check catalog.
//!
//! Each check is a pure function over the queryable document and emits at
//! most one finding. The catalog order is fixed; `run` preserves it.

use crate::document::{DocumentElement, QueryableDocument};

use super::finding::{Finding, Status};

/// Meta descriptions longer than this may be truncated in result snippets.
const DESCRIPTION_TRUNCATION_CHARS: usize = 180;

/// Run the SEO catalog in fixed order.
pub fn run<D: QueryableDocument>(doc: &D) -> Vec<Finding> {
    let checks: [fn(&D) -> Option<Finding>; 6] = [
        check_title,
        check_meta_description,
        check_h1,
        check_canonical,
        check_open_graph,
        check_robots,
    ];
    checks.iter().filter_map(|check| check(doc)).collect()
}

fn check_title<D: QueryableDocument>(doc: &D) -> Option<Finding> {
    let title = doc
        .select_first("title")
        .map(|el| el.text().trim().to_string())
        .unwrap_or_default();

    let finding = if title.is_empty() {
        Finding::new("seo.title", "Title tag", Status::Issue, "Missing <title>.")
            .why("Titles help users and ranking systems understand the page.")
            .fix("Add a concise <title> under ~60 characters.")
            .example("<title>How to Replace a Bike Chain</title>")
    } else {
        Finding::new(
            "seo.title",
            "Title tag",
            Status::Ok,
            format!("Found title ({} characters).", title.chars().count()),
        )
        .why("Good titles improve clarity.")
        .fix("Keep it descriptive and concise.")
    };
    Some(finding)
}

fn check_meta_description<D: QueryableDocument>(doc: &D) -> Option<Finding> {
    let description = doc
        .select_first("meta[name='description']")
        .and_then(|el| el.attr("content").map(|s| s.trim().to_string()))
        .filter(|s| !s.is_empty());

    let finding = match description {
        None => Finding::new(
            "seo.meta.description",
            "Meta description",
            Status::Issue,
            "Missing meta description.",
        )
        .why("Improves click-through by summarizing the page.")
        .fix("Add 150-160 char summary.")
        .example(r#"<meta name="description" content="Short helpful summary..." />"#),
        Some(d) if d.chars().count() > DESCRIPTION_TRUNCATION_CHARS => Finding::new(
            "seo.meta.description",
            "Meta description",
            Status::Info,
            format!("Meta description is {} characters.", d.chars().count()),
        )
        .why("Long descriptions may be truncated.")
        .fix("Aim for ~150-160 characters."),
        Some(_) => Finding::new(
            "seo.meta.description",
            "Meta description",
            Status::Ok,
            "Meta description present.",
        ),
    };
    Some(finding)
}

fn check_h1<D: QueryableDocument>(doc: &D) -> Option<Finding> {
    let count = doc.select_all("h1").len();

    let finding = match count {
        0 => Finding::new("seo.h1", "H1 structure", Status::Issue, "No H1 on the page.")
            .why("Signals the main topic.")
            .fix("Add one H1 and use H2/H3 for sections."),
        1 => Finding::new("seo.h1", "H1 structure", Status::Ok, "Single H1 detected."),
        _ => Finding::new(
            "seo.h1",
            "H1 structure",
            Status::Info,
            "Multiple H1 tags detected.",
        )
        .fix("Use only one H1 per page."),
    };
    Some(finding)
}

fn check_canonical<D: QueryableDocument>(doc: &D) -> Option<Finding> {
    let canonical = doc
        .select_first("link[rel='canonical']")
        .and_then(|el| el.attr("href").map(|s| s.to_string()))
        .filter(|s| !s.is_empty());

    let finding = match canonical {
        Some(href) => Finding::new(
            "seo.canonical",
            "Canonical tag",
            Status::Ok,
            format!("Canonical set to {href}"),
        ),
        None => Finding::new(
            "seo.canonical",
            "Canonical tag",
            Status::Info,
            "Canonical not found.",
        )
        .why("Helps with duplicate URLs.")
        .fix(r#"Add: <link rel="canonical" href="https://example.com/page" />"#),
    };
    Some(finding)
}

fn check_open_graph<D: QueryableDocument>(doc: &D) -> Option<Finding> {
    let og_content = |property: &str| {
        doc.select_first(&format!("meta[property='{property}']"))
            .and_then(|el| el.attr("content").map(|s| s.to_string()))
            .filter(|s| !s.is_empty())
    };

    let all_present = og_content("og:title").is_some()
        && og_content("og:description").is_some()
        && og_content("og:image").is_some();

    let finding = if all_present {
        Finding::new("seo.og", "Open Graph Tags", Status::Ok, "OG tags present.")
    } else {
        Finding::new(
            "seo.og",
            "Open Graph Tags",
            Status::Info,
            "Missing some OG tags.",
        )
        .why("Controls social and preview snippets.")
        .fix("Add og:title, og:description, and og:image.")
    };
    Some(finding)
}

fn check_robots<D: QueryableDocument>(doc: &D) -> Option<Finding> {
    let robots = doc
        .select_first("meta[name='robots']")
        .and_then(|el| el.attr("content").map(|s| s.to_lowercase()))
        .unwrap_or_default();

    let finding = if robots.contains("noindex") {
        Finding::new(
            "seo.robots",
            "Robots Meta Tag",
            Status::Issue,
            "robots meta set to noindex.",
        )
        .why("Prevents indexing.")
        .fix("Remove noindex if you want this page indexed.")
    } else {
        Finding::new(
            "seo.robots",
            "Robots Meta Tag",
            Status::Ok,
            "robots meta allows indexing or is not present.",
        )
    };
    Some(finding)
}
