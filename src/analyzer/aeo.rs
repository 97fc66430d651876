//! AEO check catalog: signals that help answer engines extract and trust
//! page content.
//!
//! Unlike the SEO catalog, two of these checks stay silent when the aspect
//! is absent or already in good shape.

use serde_json::Value;

use crate::document::{DocumentElement, QueryableDocument};

use super::finding::{Finding, Status};

/// Run the AEO catalog in fixed order.
pub fn run<D: QueryableDocument>(doc: &D) -> Vec<Finding> {
    let checks: [fn(&D) -> Option<Finding>; 3] = [
        check_structured_data,
        check_faq_pattern,
        check_entity_trust,
    ];
    checks.iter().filter_map(|check| check(doc)).collect()
}

/// Parse every JSON-LD block independently; a block that fails to parse is
/// skipped without affecting the rest of the run.
fn parse_json_ld_blocks<D: QueryableDocument>(doc: &D) -> Vec<Value> {
    doc.select_all("script[type='application/ld+json']")
        .iter()
        .filter_map(|el| serde_json::from_str::<Value>(&el.text()).ok())
        .collect()
}

/// Flatten `@type` values (string or array of strings) into a de-duplicated,
/// first-seen-ordered list.
fn collect_types(blocks: &[Value]) -> Vec<String> {
    let mut types = Vec::new();
    for block in blocks {
        match block.get("@type") {
            Some(Value::String(t)) => {
                if !types.contains(t) {
                    types.push(t.clone());
                }
            }
            Some(Value::Array(items)) => {
                for item in items {
                    if let Value::String(t) = item {
                        if !types.contains(t) {
                            types.push(t.clone());
                        }
                    }
                }
            }
            _ => {}
        }
    }
    types
}

fn check_structured_data<D: QueryableDocument>(doc: &D) -> Option<Finding> {
    let blocks = parse_json_ld_blocks(doc);

    let finding = if blocks.is_empty() {
        Finding::new(
            "aeo.jsonld",
            "Structured Data (JSON-LD)",
            Status::Issue,
            "No JSON-LD found.",
        )
        .why("Helps answer systems understand entities.")
        .fix("Add Organization/Article/Product/FAQPage JSON-LD as relevant.")
    } else {
        let types = collect_types(&blocks);
        let types_label = if types.is_empty() {
            "unknown".to_string()
        } else {
            types.join(", ")
        };
        Finding::new(
            "aeo.jsonld",
            "Structured Data (JSON-LD)",
            Status::Ok,
            format!(
                "Found {} JSON-LD block(s), types: {}",
                blocks.len(),
                types_label
            ),
        )
    };
    Some(finding)
}

/// FAQ content without FAQPage markup is an opportunity, not a defect;
/// pages without any FAQ pattern get no finding at all.
fn check_faq_pattern<D: QueryableDocument>(doc: &D) -> Option<Finding> {
    let has_faq_heading = doc.select_all("h2, h3").iter().any(|el| {
        let text = el.text().to_lowercase();
        text.contains("faq") || text.contains("questions")
    });
    let has_disclosure = !doc.select_all("details summary").is_empty();

    if !(has_faq_heading || has_disclosure) {
        return None;
    }

    Some(
        Finding::new(
            "aeo.faq",
            "FAQ/Q&A",
            Status::Info,
            "FAQ pattern detected but not marked up.",
        )
        .fix("Add FAQPage JSON-LD for common questions."),
    )
}

fn check_entity_trust<D: QueryableDocument>(doc: &D) -> Option<Finding> {
    let has_about = !doc.select_all("a[href*='about']").is_empty();
    let has_contact = !doc.select_all("a[href*='contact']").is_empty();

    if has_about && has_contact {
        return None;
    }

    Some(
        Finding::new(
            "aeo.entity.trust",
            "Entity clarity",
            Status::Info,
            "Add About and Contact links.",
        )
        .why("Provenance helps AI and users trust content.")
        .fix("Add About/Contact in header or footer."),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::HtmlDocument;

    fn doc(html: &str) -> HtmlDocument {
        HtmlDocument::parse(html)
    }

    #[test]
    fn no_json_ld_is_issue() {
        let d = doc("<html><body></body></html>");
        let f = check_structured_data(&d).unwrap();
        assert_eq!(f.status, Status::Issue);
        assert_eq!(f.id, "aeo.jsonld");
    }

    #[test]
    fn bad_block_is_skipped_good_block_counts() {
        let d = doc(
            r#"<html><head>
            <script type="application/ld+json">{bad json}</script>
            <script type="application/ld+json">{"@type":"Article"}</script>
            </head></html>"#,
        );
        let f = check_structured_data(&d).unwrap();
        assert_eq!(f.status, Status::Ok);
        assert_eq!(f.details, "Found 1 JSON-LD block(s), types: Article");
    }

    #[test]
    fn type_arrays_flatten_and_dedupe() {
        let d = doc(
            r#"<html><head>
            <script type="application/ld+json">{"@type":["Organization","Brand"]}</script>
            <script type="application/ld+json">{"@type":"Organization"}</script>
            </head></html>"#,
        );
        let f = check_structured_data(&d).unwrap();
        assert_eq!(f.details, "Found 2 JSON-LD block(s), types: Organization, Brand");
    }

    #[test]
    fn typeless_blocks_report_unknown() {
        let d = doc(
            r#"<html><head>
            <script type="application/ld+json">{"name":"no type here"}</script>
            </head></html>"#,
        );
        let f = check_structured_data(&d).unwrap();
        assert_eq!(f.details, "Found 1 JSON-LD block(s), types: unknown");
    }

    #[test]
    fn faq_heading_detected() {
        let d = doc("<html><body><h2>Frequently Asked Questions</h2></body></html>");
        let f = check_faq_pattern(&d).unwrap();
        assert_eq!(f.status, Status::Info);
        assert_eq!(f.id, "aeo.faq");
    }

    #[test]
    fn disclosure_element_detected() {
        let d = doc("<html><body><details><summary>What is this?</summary></details></body></html>");
        assert!(check_faq_pattern(&d).is_some());
    }

    #[test]
    fn no_faq_pattern_emits_nothing() {
        let d = doc("<html><body><h2>Pricing</h2></body></html>");
        assert!(check_faq_pattern(&d).is_none());
    }

    #[test]
    fn entity_trust_silent_when_both_links_present() {
        let d = doc(
            r#"<html><body>
            <a href="/about-us">About</a>
            <a href="/contact">Contact</a>
            </body></html>"#,
        );
        assert!(check_entity_trust(&d).is_none());
    }

    #[test]
    fn entity_trust_info_when_contact_missing() {
        let d = doc(r#"<html><body><a href="/about">About</a></body></html>"#);
        let f = check_entity_trust(&d).unwrap();
        assert_eq!(f.status, Status::Info);
        assert_eq!(f.id, "aeo.entity.trust");
    }
}
