//! Value types for analysis output.
//!
//! These types are catalog-agnostic: both the SEO and AEO check sets emit
//! the same `Finding` shape, and the assembler packages them unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tri-state severity of a finding. No numeric scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Issue,
    Info,
}

/// One unit of analysis output: an observed aspect, its severity, and
/// optional remediation guidance.
///
/// Ids are fixed per check so repeated runs over identical input produce
/// identical findings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub id: &'static str,
    pub label: &'static str,
    pub status: Status,
    pub details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub why: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<&'static str>,
}

impl Finding {
    pub fn new(
        id: &'static str,
        label: &'static str,
        status: Status,
        details: impl Into<String>,
    ) -> Self {
        Self {
            id,
            label,
            status,
            details: details.into(),
            why: None,
            fix: None,
            example: None,
        }
    }

    pub fn why(mut self, why: &'static str) -> Self {
        self.why = Some(why);
        self
    }

    pub fn fix(mut self, fix: &'static str) -> Self {
        self.fix = Some(fix);
        self
    }

    pub fn example(mut self, example: &'static str) -> Self {
        self.example = Some(example);
        self
    }
}

/// Ordered findings for one category (SEO or AEO).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryBlock {
    pub findings: Vec<Finding>,
}

/// Finding counts across both categories, grouped by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub issues: usize,
    pub oks: usize,
    pub infos: usize,
}

impl Summary {
    /// Tally statuses over any sequence of findings.
    pub fn count<'a>(findings: impl IntoIterator<Item = &'a Finding>) -> Self {
        findings
            .into_iter()
            .fold(Self::default(), |mut acc, f| {
                match f.status {
                    Status::Issue => acc.issues += 1,
                    Status::Ok => acc.oks += 1,
                    Status::Info => acc.infos += 1,
                }
                acc
            })
    }
}

/// Fetch metadata carried through from acquisition untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchMeta {
    pub http_status: u16,
    pub fetched_at: DateTime<Utc>,
}

/// Complete result of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub url: String,
    pub summary: Summary,
    pub seo: CategoryBlock,
    pub aeo: CategoryBlock,
    pub meta: FetchMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_statuses() {
        let findings = vec![
            Finding::new("a", "A", Status::Ok, "fine"),
            Finding::new("b", "B", Status::Issue, "bad"),
            Finding::new("c", "C", Status::Info, "note"),
            Finding::new("d", "D", Status::Ok, "fine"),
        ];
        let summary = Summary::count(&findings);
        assert_eq!(
            summary,
            Summary { issues: 1, oks: 2, infos: 1 }
        );
    }

    #[test]
    fn optional_fields_are_omitted_from_json() {
        let finding = Finding::new("seo.title", "Title tag", Status::Issue, "Missing <title>.")
            .fix("Add a concise <title> under ~60 characters.");
        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["status"], "issue");
        assert!(json.get("why").is_none());
        assert!(json.get("example").is_none());
        assert_eq!(json["fix"], "Add a concise <title> under ~60 characters.");
    }

    #[test]
    fn meta_serializes_camel_case() {
        let meta = FetchMeta {
            http_status: 200,
            fetched_at: Utc::now(),
        };
        let json = serde_json::to_value(&meta).unwrap();
        assert!(json.get("httpStatus").is_some());
        assert!(json.get("fetchedAt").is_some());
    }
}
