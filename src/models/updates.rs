// Typed partial updates ("patches") for each wizard section.
//
// A patch carries an optional value per top-level field of its section. Merging replaces the
// fields that are present and keeps everything else. Nested records (`dataset_manager`,
// `external_access`) are replaced whole; callers merge them before building the patch.

use super::wizard_data::{
    AccessRole, BusinessCategory, ConfidentialityLevel, DatasetManager, DeploySection,
    DiscoverSection, ExploreSection, ExternalAccess, FeatureFlag, IngestionSource,
    IntegrationOption, UserId, ValidateSection, WizardData,
};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionName {
    Discover,
    Explore,
    Validate,
    Deploy,
}

impl SectionName {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionName::Discover => "discover",
            SectionName::Explore => "explore",
            SectionName::Validate => "validate",
            SectionName::Deploy => "deploy",
        }
    }
}

/// A wizard section that accepts shallow-merge updates.
pub trait SectionRecord {
    type Patch;

    const NAME: SectionName;

    fn section(data: &WizardData) -> &Self;
    fn section_mut(data: &mut WizardData) -> &mut Self;
    fn merge(&mut self, patch: Self::Patch);
}

fn merge_field<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoverPatch {
    pub project_name: Option<String>,
    pub business_category: Option<BusinessCategory>,
    pub ingestion_source: Option<IngestionSource>,
    pub confidentiality_level: Option<ConfidentialityLevel>,
    pub dataset_manager: Option<DatasetManager>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplorePatch {
    pub flags: BTreeMap<FeatureFlag, bool>,
}

impl ExplorePatch {
    pub fn set(flag: FeatureFlag, enabled: bool) -> Self {
        let mut flags = BTreeMap::new();
        flags.insert(flag, enabled);
        Self { flags }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatePatch {
    pub validated: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployPatch {
    pub publish_to_hub: Option<bool>,
    pub export_data: Option<bool>,
    pub notifications: Option<bool>,
    pub selected_users: Option<Vec<UserId>>,
    pub user_roles: Option<BTreeMap<UserId, AccessRole>>,
    pub lob_assignments: Option<BTreeMap<String, BTreeSet<UserId>>>,
    pub external_access: Option<ExternalAccess>,
}

impl DeployPatch {
    pub fn integration(option: IntegrationOption, enabled: bool) -> Self {
        let mut patch = Self::default();
        match option {
            IntegrationOption::PublishToHub => patch.publish_to_hub = Some(enabled),
            IntegrationOption::ExportData => patch.export_data = Some(enabled),
            IntegrationOption::Notifications => patch.notifications = Some(enabled),
        }
        patch
    }
}

/// One proposed change to the wizard data, tagged by section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionUpdate {
    Discover(DiscoverPatch),
    Explore(ExplorePatch),
    Validate(ValidatePatch),
    Deploy(DeployPatch),
}

impl SectionUpdate {
    pub fn section(&self) -> SectionName {
        match self {
            SectionUpdate::Discover(_) => SectionName::Discover,
            SectionUpdate::Explore(_) => SectionName::Explore,
            SectionUpdate::Validate(_) => SectionName::Validate,
            SectionUpdate::Deploy(_) => SectionName::Deploy,
        }
    }
}

impl From<DiscoverPatch> for SectionUpdate {
    fn from(p: DiscoverPatch) -> Self {
        SectionUpdate::Discover(p)
    }
}

impl From<ExplorePatch> for SectionUpdate {
    fn from(p: ExplorePatch) -> Self {
        SectionUpdate::Explore(p)
    }
}

impl From<ValidatePatch> for SectionUpdate {
    fn from(p: ValidatePatch) -> Self {
        SectionUpdate::Validate(p)
    }
}

impl From<DeployPatch> for SectionUpdate {
    fn from(p: DeployPatch) -> Self {
        SectionUpdate::Deploy(p)
    }
}

impl SectionRecord for DiscoverSection {
    type Patch = DiscoverPatch;
    const NAME: SectionName = SectionName::Discover;

    fn section(data: &WizardData) -> &Self {
        &data.discover
    }

    fn section_mut(data: &mut WizardData) -> &mut Self {
        &mut data.discover
    }

    fn merge(&mut self, patch: DiscoverPatch) {
        merge_field(&mut self.project_name, patch.project_name);
        merge_field(&mut self.business_category, patch.business_category.map(Some));
        merge_field(&mut self.ingestion_source, patch.ingestion_source.map(Some));
        merge_field(
            &mut self.confidentiality_level,
            patch.confidentiality_level.map(Some),
        );
        merge_field(&mut self.dataset_manager, patch.dataset_manager);
    }
}

impl SectionRecord for ExploreSection {
    type Patch = ExplorePatch;
    const NAME: SectionName = SectionName::Explore;

    fn section(data: &WizardData) -> &Self {
        &data.explore
    }

    fn section_mut(data: &mut WizardData) -> &mut Self {
        &mut data.explore
    }

    fn merge(&mut self, patch: ExplorePatch) {
        for (flag, enabled) in patch.flags {
            self.set(flag, enabled);
        }
    }
}

impl SectionRecord for ValidateSection {
    type Patch = ValidatePatch;
    const NAME: SectionName = SectionName::Validate;

    fn section(data: &WizardData) -> &Self {
        &data.validate
    }

    fn section_mut(data: &mut WizardData) -> &mut Self {
        &mut data.validate
    }

    fn merge(&mut self, patch: ValidatePatch) {
        merge_field(&mut self.validated, patch.validated);
    }
}

impl SectionRecord for DeploySection {
    type Patch = DeployPatch;
    const NAME: SectionName = SectionName::Deploy;

    fn section(data: &WizardData) -> &Self {
        &data.deploy
    }

    fn section_mut(data: &mut WizardData) -> &mut Self {
        &mut data.deploy
    }

    fn merge(&mut self, patch: DeployPatch) {
        merge_field(&mut self.publish_to_hub, patch.publish_to_hub);
        merge_field(&mut self.export_data, patch.export_data);
        merge_field(&mut self.notifications, patch.notifications);
        merge_field(&mut self.selected_users, patch.selected_users);
        merge_field(&mut self.user_roles, patch.user_roles);
        merge_field(&mut self.lob_assignments, patch.lob_assignments);
        merge_field(&mut self.external_access, patch.external_access);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::wizard_data::{Attribute, Auditor};

    #[test]
    fn discover_merge_touches_only_present_fields() {
        let mut d = DiscoverSection {
            project_name: "Old".to_string(),
            business_category: Some(BusinessCategory::Pbm),
            ..Default::default()
        };
        d.merge(DiscoverPatch {
            project_name: Some("New".to_string()),
            ..Default::default()
        });
        assert_eq!(d.project_name, "New");
        assert_eq!(d.business_category, Some(BusinessCategory::Pbm));
        assert!(d.ingestion_source.is_none());
    }

    #[test]
    fn nested_dataset_manager_is_replaced_not_deep_merged() {
        let mut d = DiscoverSection::default();
        d.dataset_manager.keyword_flags = vec!["Force Majeure".to_string()];
        d.dataset_manager.attributes.push(Attribute {
            name: "Annual Fee".to_string(),
            ..Default::default()
        });

        d.merge(DiscoverPatch {
            dataset_manager: Some(DatasetManager {
                keyword_flags: vec!["Indemnity".to_string()],
                ..Default::default()
            }),
            ..Default::default()
        });

        assert_eq!(d.dataset_manager.keyword_flags, vec!["Indemnity".to_string()]);
        assert!(
            d.dataset_manager.attributes.is_empty(),
            "nested record should be overwritten whole"
        );
    }

    #[test]
    fn explore_merge_never_drops_flags() {
        let mut e = ExploreSection::default();
        let before = e.len();
        e.merge(ExplorePatch::set(FeatureFlag::Quality, true));
        e.merge(ExplorePatch::default());
        assert_eq!(e.len(), before);
        assert!(e.is_enabled(FeatureFlag::Quality));
        assert!(e.is_enabled(FeatureFlag::Summarization));
    }

    #[test]
    fn deploy_integration_patch_sets_one_toggle() {
        let mut d = DeploySection::default();
        d.merge(DeployPatch::integration(IntegrationOption::ExportData, true));
        assert!(d.export_data);
        assert!(d.publish_to_hub);
        assert!(d.notifications);

        d.merge(DeployPatch::integration(IntegrationOption::PublishToHub, false));
        assert!(!d.publish_to_hub);
        assert!(d.export_data);
    }

    #[test]
    fn deploy_external_access_replaced_whole() {
        let mut d = DeploySection::default();
        d.external_access.auditors.push(Auditor {
            email: "a@example.com".to_string(),
            expiry_date: "2025-01-01".to_string(),
        });
        d.merge(DeployPatch {
            external_access: Some(ExternalAccess {
                enabled: true,
                auditors: Vec::new(),
            }),
            ..Default::default()
        });
        assert!(d.external_access.enabled);
        assert!(d.external_access.auditors.is_empty());
    }

    #[test]
    fn section_update_reports_its_section() {
        let u: SectionUpdate = ValidatePatch {
            validated: Some(true),
        }
        .into();
        assert_eq!(u.section(), SectionName::Validate);
        assert_eq!(u.section().as_str(), "validate");
    }
}
