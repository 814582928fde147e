// Wizard state (in-memory)
//
// NOTE: This is NOT persisted. It is created with fixed defaults at startup and discarded on
// exit. The only way to change the data is `apply`/`update`; the current step is moved by the
// controller.

use super::updates::{SectionRecord, SectionUpdate};
use super::wizard_data::{
    DeploySection, DiscoverSection, ExploreSection, ValidateSection, WizardData,
};
use crate::wizard::steps::Step;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    current_step: Step,
    data: WizardData,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> Step {
        self.current_step
    }

    pub(crate) fn set_current_step(&mut self, step: Step) {
        self.current_step = step;
    }

    pub fn data(&self) -> &WizardData {
        &self.data
    }

    pub fn section<S: SectionRecord>(&self) -> &S {
        S::section(&self.data)
    }

    /// Shallow-merge `patch` into section `S`. Never fails and performs no validation.
    pub fn update<S: SectionRecord>(&mut self, patch: S::Patch) {
        S::section_mut(&mut self.data).merge(patch);
    }

    pub fn apply(&mut self, update: SectionUpdate) {
        match update {
            SectionUpdate::Discover(p) => self.update::<DiscoverSection>(p),
            SectionUpdate::Explore(p) => self.update::<ExploreSection>(p),
            SectionUpdate::Validate(p) => self.update::<ValidateSection>(p),
            SectionUpdate::Deploy(p) => self.update::<DeploySection>(p),
        }
    }
}
