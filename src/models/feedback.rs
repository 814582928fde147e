// Feedback / bug report models

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    #[default]
    Bug,
    Feedback,
}

impl ReportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Bug => "Bug Report",
            ReportType::Feedback => "Feedback",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            ReportType::Bug => ReportType::Feedback,
            ReportType::Feedback => ReportType::Bug,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackCategory {
    Extraction,
    Pipeline,
    Ui,
    Performance,
    Access,
    Feature,
    Improvement,
    Documentation,
    Other,
}

const BUG_CATEGORIES: [FeedbackCategory; 6] = [
    FeedbackCategory::Extraction,
    FeedbackCategory::Pipeline,
    FeedbackCategory::Ui,
    FeedbackCategory::Performance,
    FeedbackCategory::Access,
    FeedbackCategory::Other,
];

const FEEDBACK_CATEGORIES: [FeedbackCategory; 4] = [
    FeedbackCategory::Feature,
    FeedbackCategory::Improvement,
    FeedbackCategory::Documentation,
    FeedbackCategory::Other,
];

impl FeedbackCategory {
    pub fn for_report_type(report_type: ReportType) -> &'static [FeedbackCategory] {
        match report_type {
            ReportType::Bug => &BUG_CATEGORIES,
            ReportType::Feedback => &FEEDBACK_CATEGORIES,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackCategory::Extraction => "Extraction Error",
            FeedbackCategory::Pipeline => "Pipeline Failure",
            FeedbackCategory::Ui => "UI/UX Issue",
            FeedbackCategory::Performance => "Performance Problem",
            FeedbackCategory::Access => "Access/Permission Issue",
            FeedbackCategory::Feature => "Feature Request",
            FeedbackCategory::Improvement => "UI/UX Improvement",
            FeedbackCategory::Documentation => "Documentation",
            FeedbackCategory::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Severity::Low => Severity::Medium,
            Severity::Medium => Severity::High,
            Severity::High => Severity::Low,
        }
    }
}

/// Record handed to the diagnostic sink on a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub category: Option<FeedbackCategory>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    pub current_screen: Option<String>,
    pub current_feature: Option<String>,
    pub timestamp: String,
}

/// Where the report was filed from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackContext {
    pub current_screen: Option<String>,
    pub current_feature: Option<String>,
}
