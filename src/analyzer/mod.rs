//! Analysis pipeline: degraded-content gate, check catalogs, aggregation,
//! and result assembly.
//!
//! The whole pipeline is pure computation over an already-fetched body: no
//! I/O, no shared state, and it cannot fail — a page that turns out not to
//! be HTML produces a valid result with a single explanatory finding.

mod aeo;
mod finding;
mod seo;

pub use finding::{AnalysisResult, CategoryBlock, FetchMeta, Finding, Status, Summary};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::document::HtmlDocument;

/// Input contract from the acquisition collaborator: raw body, HTTP status,
/// and the fetch timestamp, passed through to the result untouched.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub body: String,
    pub http_status: u16,
    pub fetched_at: DateTime<Utc>,
}

/// Analyze one fetched page.
pub fn analyze(url: &str, page: &FetchedPage) -> AnalysisResult {
    let meta = FetchMeta {
        http_status: page.http_status,
        fetched_at: page.fetched_at,
    };

    if !looks_like_html(&page.body) {
        debug!(url, "body is not readable HTML, short-circuiting");
        return degraded_result(url, meta);
    }

    let doc = HtmlDocument::parse(&page.body);
    let seo_findings = seo::run(&doc);
    let aeo_findings = aeo::run(&doc);

    assemble(url, seo_findings, aeo_findings, meta)
}

/// Viable HTML is non-empty and carries a doctype or an `<html` opening
/// tag, case-insensitive. Everything else short-circuits the pipeline.
fn looks_like_html(body: &str) -> bool {
    if body.is_empty() {
        return false;
    }
    let lowered = body.to_lowercase();
    lowered.contains("<!doctype html>") || lowered.contains("<html")
}

/// Terminal branch for non-HTML bodies: a single synthetic SEO issue,
/// empty AEO block. This is a successful analysis outcome, not an error.
fn degraded_result(url: &str, meta: FetchMeta) -> AnalysisResult {
    let finding = Finding::new(
        "seo.html",
        "HTML content",
        Status::Issue,
        "This URL did not return readable HTML.",
    )
    .why("Some sites require login or block bots.")
    .fix("Try a public page. Pages behind auth will not scan.");

    assemble(url, vec![finding], Vec::new(), meta)
}

/// Concatenate SEO then AEO findings for the summary count and package the
/// result. Trusts well-formed findings from the catalogs; no validation.
fn assemble(
    url: &str,
    seo_findings: Vec<Finding>,
    aeo_findings: Vec<Finding>,
    meta: FetchMeta,
) -> AnalysisResult {
    let summary = Summary::count(seo_findings.iter().chain(aeo_findings.iter()));

    AnalysisResult {
        url: url.to_string(),
        summary,
        seo: CategoryBlock {
            findings: seo_findings,
        },
        aeo: CategoryBlock {
            findings: aeo_findings,
        },
        meta,
    }
}
