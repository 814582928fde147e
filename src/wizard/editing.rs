//! Client-side list and toggle editing for the step sections.
//!
//! Every helper is pure: it reads the current section and returns the patch to dispatch, or
//! `None` when the edit is a no-op (duplicate keyword, empty input, out-of-range index, ...).

use crate::models::updates::{DeployPatch, DiscoverPatch, ExplorePatch};
use crate::models::wizard_data::{
    AccessRole, Attribute, Auditor, DatasetManager, DeploySection, ExploreSection, FeatureFlag,
    FileHandle, IntegrationOption,
};

fn dataset_patch(dm: DatasetManager) -> DiscoverPatch {
    DiscoverPatch {
        dataset_manager: Some(dm),
        ..Default::default()
    }
}

// =========================
// Dataset manager (discover)
// =========================

pub fn add_keyword_flag(dm: &DatasetManager, raw: &str) -> Option<DiscoverPatch> {
    let keyword = raw.trim();
    if keyword.is_empty() || dm.keyword_flags.iter().any(|k| k == keyword) {
        return None;
    }
    let mut next = dm.clone();
    next.keyword_flags.push(keyword.to_string());
    Some(dataset_patch(next))
}

pub fn remove_keyword_flag(dm: &DatasetManager, keyword: &str) -> Option<DiscoverPatch> {
    if !dm.keyword_flags.iter().any(|k| k == keyword) {
        return None;
    }
    let mut next = dm.clone();
    next.keyword_flags.retain(|k| k != keyword);
    Some(dataset_patch(next))
}

/// Append an attribute. Names may repeat; a blank name is rejected.
pub fn add_attribute(dm: &DatasetManager, draft: &Attribute) -> Option<DiscoverPatch> {
    if draft.name.trim().is_empty() {
        return None;
    }
    let mut next = dm.clone();
    next.attributes.push(draft.clone());
    Some(dataset_patch(next))
}

pub fn remove_attribute(dm: &DatasetManager, index: usize) -> Option<DiscoverPatch> {
    if index >= dm.attributes.len() {
        return None;
    }
    let mut next = dm.clone();
    next.attributes.remove(index);
    Some(dataset_patch(next))
}

pub fn set_custom_dictionary(dm: &DatasetManager, file: Option<FileHandle>) -> DiscoverPatch {
    let mut next = dm.clone();
    next.custom_dictionary = file;
    dataset_patch(next)
}

// =========================
// Explore
// =========================

pub fn toggle_feature(explore: &ExploreSection, flag: FeatureFlag) -> ExplorePatch {
    ExplorePatch::set(flag, !explore.is_enabled(flag))
}

// =========================
// Deploy
// =========================

/// `None` when the option already has the requested value.
pub fn set_integration(
    deploy: &DeploySection,
    option: IntegrationOption,
    on: bool,
) -> Option<DeployPatch> {
    if deploy.integration(option) == on {
        return None;
    }
    Some(DeployPatch::integration(option, on))
}

pub fn toggle_integration(deploy: &DeploySection, option: IntegrationOption) -> DeployPatch {
    DeployPatch::integration(option, !deploy.integration(option))
}

/// Add the user if absent, otherwise remove it together with its role assignment.
pub fn toggle_user(deploy: &DeploySection, user_id: &str) -> DeployPatch {
    if deploy.is_selected(user_id) {
        let selected_users = deploy
            .selected_users
            .iter()
            .filter(|u| u.as_str() != user_id)
            .cloned()
            .collect();
        let mut user_roles = deploy.user_roles.clone();
        user_roles.remove(user_id);
        DeployPatch {
            selected_users: Some(selected_users),
            user_roles: Some(user_roles),
            ..Default::default()
        }
    } else {
        let mut selected_users = deploy.selected_users.clone();
        selected_users.push(user_id.to_string());
        DeployPatch {
            selected_users: Some(selected_users),
            ..Default::default()
        }
    }
}

/// Roles can only be held by selected users.
pub fn set_user_role(deploy: &DeploySection, user_id: &str, role: AccessRole) -> Option<DeployPatch> {
    if !deploy.is_selected(user_id) || deploy.user_roles.get(user_id) == Some(&role) {
        return None;
    }
    let mut user_roles = deploy.user_roles.clone();
    user_roles.insert(user_id.to_string(), role);
    Some(DeployPatch {
        user_roles: Some(user_roles),
        ..Default::default()
    })
}

pub fn toggle_lob_member(deploy: &DeploySection, lob: &str, user_id: &str) -> DeployPatch {
    let mut lob_assignments = deploy.lob_assignments.clone();
    let members = lob_assignments.entry(lob.to_string()).or_default();
    if !members.remove(user_id) {
        members.insert(user_id.to_string());
    }
    DeployPatch {
        lob_assignments: Some(lob_assignments),
        ..Default::default()
    }
}

pub fn set_external_access(deploy: &DeploySection, enabled: bool) -> DeployPatch {
    let mut external_access = deploy.external_access.clone();
    external_access.enabled = enabled;
    DeployPatch {
        external_access: Some(external_access),
        ..Default::default()
    }
}

/// Append a blank auditor row. Email and expiry are filled in afterwards and are not
/// format-checked.
pub fn add_auditor(deploy: &DeploySection) -> DeployPatch {
    let mut external_access = deploy.external_access.clone();
    external_access.auditors.push(Auditor::default());
    DeployPatch {
        external_access: Some(external_access),
        ..Default::default()
    }
}

pub fn update_auditor(deploy: &DeploySection, index: usize, auditor: Auditor) -> Option<DeployPatch> {
    let mut external_access = deploy.external_access.clone();
    let slot = external_access.auditors.get_mut(index)?;
    if *slot == auditor {
        return None;
    }
    *slot = auditor;
    Some(DeployPatch {
        external_access: Some(external_access),
        ..Default::default()
    })
}

pub fn remove_auditor(deploy: &DeploySection, index: usize) -> Option<DeployPatch> {
    if index >= deploy.external_access.auditors.len() {
        return None;
    }
    let mut external_access = deploy.external_access.clone();
    external_access.auditors.remove(index);
    Some(DeployPatch {
        external_access: Some(external_access),
        ..Default::default()
    })
}
