//! Step navigation and the deploy acknowledgment.
//!
//! The controller exclusively owns the [`WizardState`]. Views propose changes as
//! [`SectionUpdate`]s through [`WizardController::dispatch`]; nothing else mutates the data.

use super::steps::Step;
use crate::models::state::WizardState;
use crate::models::updates::SectionUpdate;
use crate::models::wizard_data::WizardData;
use log::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Destructive,
}

/// One-shot, user-visible acknowledgment (the UI shows it once and drops it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Destructive,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn deployed() -> Self {
        Self::success(
            "Project Deployed Successfully!",
            "Your digitization project is now live and processing documents.",
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Moved { from: Step, to: Step },
    /// `next()` on the last step: the step is unchanged and a deploy notification was emitted.
    Deployed,
    /// `previous()` on the first step.
    AtFirstStep,
}

#[derive(Debug, Default)]
pub struct WizardController {
    state: WizardState,
    outbox: Vec<Notification>,
    deployments: u32,
}

impl WizardController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> Step {
        self.state.current_step()
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn data(&self) -> &WizardData {
        self.state.data()
    }

    /// Number of deploy acknowledgments emitted so far.
    pub fn deployments(&self) -> u32 {
        self.deployments
    }

    pub fn dispatch(&mut self, update: SectionUpdate) {
        debug!(
            "[PHASE: wizard] [STEP: update] section={}",
            update.section().as_str()
        );
        self.state.apply(update);
    }

    pub fn next(&mut self) -> Transition {
        let from = self.current_step();
        match from.next() {
            Some(to) => {
                self.state.set_current_step(to);
                info!(
                    "[PHASE: wizard] [STEP: navigate] {} -> {}",
                    from.label(),
                    to.label()
                );
                Transition::Moved { from, to }
            }
            None => {
                self.deployments += 1;
                self.outbox.push(Notification::deployed());
                info!(
                    "[PHASE: wizard] [STEP: deploy] Deploy acknowledged project={:?} features={} users={}",
                    self.data().discover.project_name,
                    self.data().explore.enabled_flags().len(),
                    self.data().deploy.selected_users.len()
                );
                Transition::Deployed
            }
        }
    }

    pub fn previous(&mut self) -> Transition {
        let from = self.current_step();
        match from.previous() {
            Some(to) => {
                self.state.set_current_step(to);
                info!(
                    "[PHASE: wizard] [STEP: navigate] {} -> {}",
                    from.label(),
                    to.label()
                );
                Transition::Moved { from, to }
            }
            None => Transition::AtFirstStep,
        }
    }

    /// Drain pending notifications. Each one is returned exactly once.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.outbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::updates::DiscoverPatch;

    #[test]
    fn navigation_stays_in_range_for_any_sequence() {
        // Deterministic pseudo-random walk over next/previous.
        let mut c = WizardController::new();
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            if seed % 2 == 0 {
                c.next();
            } else {
                c.previous();
            }
            let n = c.current_step().number();
            assert!((1..=4).contains(&n), "step {} out of range", n);
        }
    }

    #[test]
    fn previous_is_noop_on_first_step() {
        let mut c = WizardController::new();
        assert_eq!(c.previous(), Transition::AtFirstStep);
        assert_eq!(c.current_step(), Step::Discover);
        assert!(c.take_notifications().is_empty());
    }

    #[test]
    fn next_on_last_step_emits_one_notification_per_call() {
        let mut c = WizardController::new();
        for _ in 0..3 {
            c.next();
        }
        assert_eq!(c.current_step(), Step::Deploy);
        assert!(c.take_notifications().is_empty());

        for call in 1..=3 {
            assert_eq!(c.next(), Transition::Deployed);
            assert_eq!(c.current_step(), Step::Deploy);
            let notes = c.take_notifications();
            assert_eq!(notes.len(), 1, "call {} should emit exactly one", call);
            assert_eq!(notes[0], Notification::deployed());
            assert_eq!(c.deployments(), call);
        }
    }

    #[test]
    fn wizard_can_be_revisited_after_deploy() {
        let mut c = WizardController::new();
        for _ in 0..4 {
            c.next();
        }
        assert_eq!(
            c.previous(),
            Transition::Moved {
                from: Step::Deploy,
                to: Step::Validate
            }
        );
        assert_eq!(c.current_step(), Step::Validate);
    }

    #[test]
    fn q1_audit_scenario() {
        let mut c = WizardController::new();
        c.dispatch(SectionUpdate::Discover(DiscoverPatch {
            project_name: Some("Q1 Audit".to_string()),
            ..Default::default()
        }));
        assert_eq!(c.data().discover.project_name, "Q1 Audit");
        assert_eq!(c.data().discover.business_category, None);

        c.next();
        c.next();
        c.next();
        assert_eq!(c.current_step().number(), 4);

        c.next();
        assert_eq!(c.current_step().number(), 4);
        assert_eq!(c.take_notifications().len(), 1);
        assert_eq!(c.deployments(), 1);
    }
}
