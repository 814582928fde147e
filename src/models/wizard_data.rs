// Wizard data model
// One typed section per wizard step. Defaults here are the values the wizard starts with.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

pub type UserId = String;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardData {
    pub discover: DiscoverSection,
    pub explore: ExploreSection,
    pub validate: ValidateSection,
    pub deploy: DeploySection,
}

// =========================
// Discover
// =========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusinessCategory {
    #[serde(rename = "healthcare")]
    Healthcare,
    #[serde(rename = "it-vendor")]
    ItVendor,
    #[serde(rename = "pbm")]
    Pbm,
    #[serde(rename = "financial")]
    Financial,
    #[serde(rename = "legal")]
    Legal,
}

impl BusinessCategory {
    pub const ALL: [BusinessCategory; 5] = [
        BusinessCategory::Healthcare,
        BusinessCategory::ItVendor,
        BusinessCategory::Pbm,
        BusinessCategory::Financial,
        BusinessCategory::Legal,
    ];

    pub fn as_id(&self) -> &'static str {
        match self {
            BusinessCategory::Healthcare => "healthcare",
            BusinessCategory::ItVendor => "it-vendor",
            BusinessCategory::Pbm => "pbm",
            BusinessCategory::Financial => "financial",
            BusinessCategory::Legal => "legal",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessCategory::Healthcare => "Healthcare Provider",
            BusinessCategory::ItVendor => "IT Vendor",
            BusinessCategory::Pbm => "Pharmacy Benefit Management",
            BusinessCategory::Financial => "Financial Services",
            BusinessCategory::Legal => "Legal & Compliance",
        }
    }

    /// Cycle through the categories; an unset category starts at the first one.
    pub fn cycle(current: Option<Self>, forward: bool) -> Self {
        let len = Self::ALL.len();
        let idx = match current {
            None if forward => 0,
            None => len - 1,
            Some(c) => {
                let pos = Self::ALL.iter().position(|x| *x == c).unwrap_or(0);
                if forward {
                    (pos + 1) % len
                } else {
                    (pos + len - 1) % len
                }
            }
        };
        Self::ALL[idx]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngestionSource {
    Upload,
    Cloud,
}

impl IngestionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            IngestionSource::Upload => "Direct Upload",
            IngestionSource::Cloud => "Cloud Connector",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            IngestionSource::Upload => "Drag & drop PDF/Word files directly",
            IngestionSource::Cloud => "Sync with SharePoint, Azure Data Lake",
        }
    }

    pub fn toggle(current: Option<Self>) -> Self {
        match current {
            Some(IngestionSource::Upload) => IngestionSource::Cloud,
            _ => IngestionSource::Upload,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidentialityLevel {
    Public,
    Internal,
    Confidential,
}

impl ConfidentialityLevel {
    pub const ALL: [ConfidentialityLevel; 3] = [
        ConfidentialityLevel::Public,
        ConfidentialityLevel::Internal,
        ConfidentialityLevel::Confidential,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidentialityLevel::Public => "Public",
            ConfidentialityLevel::Internal => "Internal",
            ConfidentialityLevel::Confidential => "Highly Confidential",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ConfidentialityLevel::Public => "Publicly accessible documents",
            ConfidentialityLevel::Internal => "Internal use only",
            ConfidentialityLevel::Confidential => "Restricted access with encryption",
        }
    }

    pub fn next(current: Option<Self>) -> Self {
        match current {
            None => ConfidentialityLevel::Public,
            Some(ConfidentialityLevel::Public) => ConfidentialityLevel::Internal,
            Some(ConfidentialityLevel::Internal) => ConfidentialityLevel::Confidential,
            Some(ConfidentialityLevel::Confidential) => ConfidentialityLevel::Public,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    #[default]
    Text,
    Number,
    Date,
    Currency,
    Percentage,
}

impl AttributeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeType::Text => "text",
            AttributeType::Number => "number",
            AttributeType::Date => "date",
            AttributeType::Currency => "currency",
            AttributeType::Percentage => "percentage",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            AttributeType::Text => AttributeType::Number,
            AttributeType::Number => AttributeType::Date,
            AttributeType::Date => AttributeType::Currency,
            AttributeType::Currency => AttributeType::Percentage,
            AttributeType::Percentage => AttributeType::Text,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    pub description: String,
}

/// Reference to a user-selected file. Only the name and size are kept; the file is never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileHandle {
    pub name: String,
    pub size_bytes: u64,
}

impl FileHandle {
    pub fn size_kb(&self) -> String {
        format!("{:.2} KB", self.size_bytes as f64 / 1024.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetManager {
    pub attributes: Vec<Attribute>,
    pub custom_dictionary: Option<FileHandle>,
    pub keyword_flags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverSection {
    pub project_name: String,
    pub business_category: Option<BusinessCategory>,
    pub ingestion_source: Option<IngestionSource>,
    pub confidentiality_level: Option<ConfidentialityLevel>,
    pub dataset_manager: DatasetManager,
}

// =========================
// Explore
// =========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeatureFlag {
    TableExtraction,
    ParagraphExtraction,
    ContractSearch,
    DashboardAnalytics,
    AutomatedNotifications,
    Summarization,
    Navigation,
    DeepAnalysis,
    Assistance,
    Quality,
    LegislationAnalysis,
    ContractRedlining,
    PerformanceComparison,
    MultiStateAnalysis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureGroup {
    CoreCapability,
    FunctionalModule,
}

impl FeatureGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureGroup::CoreCapability => "Core Capabilities",
            FeatureGroup::FunctionalModule => "Functional Modules",
        }
    }
}

impl FeatureFlag {
    /// Display order: core capabilities first, then functional modules.
    pub const ALL: [FeatureFlag; 14] = [
        FeatureFlag::TableExtraction,
        FeatureFlag::ParagraphExtraction,
        FeatureFlag::ContractSearch,
        FeatureFlag::DashboardAnalytics,
        FeatureFlag::AutomatedNotifications,
        FeatureFlag::Summarization,
        FeatureFlag::Navigation,
        FeatureFlag::DeepAnalysis,
        FeatureFlag::Assistance,
        FeatureFlag::Quality,
        FeatureFlag::LegislationAnalysis,
        FeatureFlag::ContractRedlining,
        FeatureFlag::PerformanceComparison,
        FeatureFlag::MultiStateAnalysis,
    ];

    pub fn group(&self) -> FeatureGroup {
        match self {
            FeatureFlag::TableExtraction
            | FeatureFlag::ParagraphExtraction
            | FeatureFlag::ContractSearch
            | FeatureFlag::DashboardAnalytics
            | FeatureFlag::AutomatedNotifications => FeatureGroup::CoreCapability,
            _ => FeatureGroup::FunctionalModule,
        }
    }

    /// Processing cost in minutes per 100 documents.
    pub fn weight_minutes(&self) -> u32 {
        match self {
            FeatureFlag::TableExtraction => 4,
            FeatureFlag::ParagraphExtraction => 3,
            FeatureFlag::ContractSearch => 2,
            FeatureFlag::DashboardAnalytics => 2,
            FeatureFlag::AutomatedNotifications => 1,
            FeatureFlag::Summarization => 2,
            FeatureFlag::Navigation => 1,
            FeatureFlag::DeepAnalysis => 3,
            FeatureFlag::Assistance => 2,
            FeatureFlag::Quality => 1,
            FeatureFlag::LegislationAnalysis => 3,
            FeatureFlag::ContractRedlining => 2,
            FeatureFlag::PerformanceComparison => 4,
            FeatureFlag::MultiStateAnalysis => 3,
        }
    }

    pub fn default_enabled(&self) -> bool {
        matches!(
            self,
            FeatureFlag::Summarization
                | FeatureFlag::Navigation
                | FeatureFlag::Assistance
                | FeatureFlag::ContractSearch
                | FeatureFlag::AutomatedNotifications
        )
    }

    pub fn title(&self) -> &'static str {
        match self {
            FeatureFlag::TableExtraction => "Table & Visual Extraction",
            FeatureFlag::ParagraphExtraction => "Paragraph & Section Extraction",
            FeatureFlag::ContractSearch => "Contract Search & Retrieval",
            FeatureFlag::DashboardAnalytics => "Dashboard & Analytics",
            FeatureFlag::AutomatedNotifications => "Automated Notifications",
            FeatureFlag::Summarization => "Summarization",
            FeatureFlag::Navigation => "Navigation",
            FeatureFlag::DeepAnalysis => "Deep Analysis",
            FeatureFlag::Assistance => "Assistance",
            FeatureFlag::Quality => "Quality",
            FeatureFlag::LegislationAnalysis => "New Legislation Analysis",
            FeatureFlag::ContractRedlining => "Contract Notations/Redlining",
            FeatureFlag::PerformanceComparison => "Comparison of Performance Analysis",
            FeatureFlag::MultiStateAnalysis => "Multi-state Analysis",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            FeatureFlag::TableExtraction => "Azure Document Intelligence",
            FeatureFlag::ParagraphExtraction => "Clause Isolation",
            FeatureFlag::ContractSearch => "Integration Hub",
            FeatureFlag::DashboardAnalytics => "Command Center",
            FeatureFlag::AutomatedNotifications => "Pipeline Monitoring",
            FeatureFlag::Summarization => "LLM-based Key Metrics",
            FeatureFlag::Navigation => "Hierarchy & Versioning",
            FeatureFlag::DeepAnalysis => "Table & Chart Extraction",
            FeatureFlag::Assistance => "Gen AI Chatbot",
            FeatureFlag::Quality => "Spell Check & Validation",
            FeatureFlag::LegislationAnalysis => "Regulatory Compliance",
            FeatureFlag::ContractRedlining => "Change Tracking",
            FeatureFlag::PerformanceComparison => "Benchmark Analytics",
            FeatureFlag::MultiStateAnalysis => "Geographic Compliance",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExploreSection {
    flags: BTreeMap<FeatureFlag, bool>,
}

impl Default for ExploreSection {
    fn default() -> Self {
        Self {
            flags: FeatureFlag::ALL
                .iter()
                .map(|f| (*f, f.default_enabled()))
                .collect(),
        }
    }
}

impl ExploreSection {
    pub fn is_enabled(&self, flag: FeatureFlag) -> bool {
        self.flags.get(&flag).copied().unwrap_or(false)
    }

    pub fn enabled_flags(&self) -> Vec<FeatureFlag> {
        FeatureFlag::ALL
            .iter()
            .copied()
            .filter(|f| self.is_enabled(*f))
            .collect()
    }

    /// Estimated processing time in minutes per 100 documents for the enabled flags.
    pub fn estimated_minutes(&self) -> u32 {
        FeatureFlag::ALL
            .iter()
            .filter(|f| self.is_enabled(**f))
            .map(|f| f.weight_minutes())
            .sum()
    }

    pub(crate) fn set(&mut self, flag: FeatureFlag, enabled: bool) {
        self.flags.insert(flag, enabled);
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

// =========================
// Validate
// =========================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateSection {
    pub validated: bool,
}

// =========================
// Deploy
// =========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessRole {
    Edit,
    Search,
    View,
}

impl AccessRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessRole::Edit => "edit",
            AccessRole::Search => "search",
            AccessRole::View => "view",
        }
    }

    pub fn next(current: Option<Self>) -> Self {
        match current {
            None | Some(AccessRole::Edit) => AccessRole::View,
            Some(AccessRole::View) => AccessRole::Search,
            Some(AccessRole::Search) => AccessRole::Edit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationOption {
    PublishToHub,
    ExportData,
    Notifications,
}

impl IntegrationOption {
    pub const ALL: [IntegrationOption; 3] = [
        IntegrationOption::PublishToHub,
        IntegrationOption::ExportData,
        IntegrationOption::Notifications,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            IntegrationOption::PublishToHub => "Publish to Contract Hub",
            IntegrationOption::ExportData => "Export Data",
            IntegrationOption::Notifications => "Email Notifications",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            IntegrationOption::PublishToHub => "Make documents searchable in the main LOB dashboard",
            IntegrationOption::ExportData => "Send extracted JSON/CSV to a downstream database",
            IntegrationOption::Notifications => "Get notified when ingestion is complete",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auditor {
    pub email: String,
    pub expiry_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalAccess {
    pub enabled: bool,
    pub auditors: Vec<Auditor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploySection {
    pub publish_to_hub: bool,
    pub export_data: bool,
    pub notifications: bool,
    pub selected_users: Vec<UserId>,
    pub user_roles: BTreeMap<UserId, AccessRole>,
    pub lob_assignments: BTreeMap<String, BTreeSet<UserId>>,
    pub external_access: ExternalAccess,
}

impl Default for DeploySection {
    fn default() -> Self {
        Self {
            publish_to_hub: true,
            export_data: false,
            notifications: true,
            selected_users: Vec::new(),
            user_roles: BTreeMap::new(),
            lob_assignments: BTreeMap::new(),
            external_access: ExternalAccess::default(),
        }
    }
}

impl DeploySection {
    pub fn integration(&self, option: IntegrationOption) -> bool {
        match option {
            IntegrationOption::PublishToHub => self.publish_to_hub,
            IntegrationOption::ExportData => self.export_data,
            IntegrationOption::Notifications => self.notifications,
        }
    }

    pub fn is_selected(&self, user_id: &str) -> bool {
        self.selected_users.iter().any(|u| u == user_id)
    }

    pub fn lob_members(&self, lob: &str) -> usize {
        self.lob_assignments.get(lob).map(|s| s.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_explore_enables_five_flags_for_eight_minutes() {
        let explore = ExploreSection::default();
        assert_eq!(explore.len(), FeatureFlag::ALL.len());
        assert_eq!(
            explore.enabled_flags(),
            vec![
                FeatureFlag::ContractSearch,
                FeatureFlag::AutomatedNotifications,
                FeatureFlag::Summarization,
                FeatureFlag::Navigation,
                FeatureFlag::Assistance,
            ]
        );
        assert_eq!(explore.estimated_minutes(), 8);
    }

    #[test]
    fn estimated_minutes_tracks_every_enabled_flag() {
        let mut explore = ExploreSection::default();
        for f in FeatureFlag::ALL {
            explore.set(f, true);
        }
        let all: u32 = FeatureFlag::ALL.iter().map(|f| f.weight_minutes()).sum();
        assert_eq!(explore.estimated_minutes(), all);
        assert_eq!(all, 33);

        for f in FeatureFlag::ALL {
            explore.set(f, false);
        }
        assert_eq!(explore.estimated_minutes(), 0);
    }

    #[test]
    fn default_discover_is_blank() {
        let d = DiscoverSection::default();
        assert!(d.project_name.is_empty());
        assert!(d.business_category.is_none());
        assert!(d.ingestion_source.is_none());
        assert!(d.confidentiality_level.is_none());
        assert!(d.dataset_manager.keyword_flags.is_empty());
    }

    #[test]
    fn default_deploy_matches_initial_toggles() {
        let d = DeploySection::default();
        assert!(d.publish_to_hub);
        assert!(!d.export_data);
        assert!(d.notifications);
        assert!(!d.external_access.enabled);
        assert!(d.selected_users.is_empty());
    }

    #[test]
    fn business_category_cycles_both_ways() {
        assert_eq!(BusinessCategory::cycle(None, true), BusinessCategory::Healthcare);
        assert_eq!(BusinessCategory::cycle(None, false), BusinessCategory::Legal);
        assert_eq!(
            BusinessCategory::cycle(Some(BusinessCategory::Legal), true),
            BusinessCategory::Healthcare
        );
        assert_eq!(
            BusinessCategory::cycle(Some(BusinessCategory::Healthcare), false),
            BusinessCategory::Legal
        );
    }

    #[test]
    fn file_handle_reports_kilobytes() {
        let f = FileHandle {
            name: "terms.csv".to_string(),
            size_bytes: 2048,
        };
        assert_eq!(f.size_kb(), "2.00 KB");
    }

    #[test]
    fn wizard_data_serializes_with_original_field_names() {
        let json = serde_json::to_value(WizardData::default()).unwrap();
        assert_eq!(json["discover"]["projectName"], "");
        assert_eq!(json["explore"]["summarization"], true);
        assert_eq!(json["deploy"]["publishToHub"], true);
        assert_eq!(json["validate"]["validated"], false);
    }
}
