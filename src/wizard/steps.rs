//! Wizard steps and the progress indicator model.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    #[default]
    Discover,
    Explore,
    Validate,
    Deploy,
}

pub const STEP_COUNT: usize = 4;

impl Step {
    pub const ALL: [Step; STEP_COUNT] = [Step::Discover, Step::Explore, Step::Validate, Step::Deploy];

    /// 1-based position in the wizard.
    pub fn number(&self) -> usize {
        match self {
            Step::Discover => 1,
            Step::Explore => 2,
            Step::Validate => 3,
            Step::Deploy => 4,
        }
    }

    pub fn from_number(n: usize) -> Option<Step> {
        Self::ALL.get(n.checked_sub(1)?).copied()
    }

    pub fn next(&self) -> Option<Step> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(&self) -> Option<Step> {
        Self::from_number(self.number().checked_sub(1)?)
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Step::Discover => "Discover",
            Step::Explore => "Explore",
            Step::Validate => "Validate",
            Step::Deploy => "Deploy",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Step::Discover => "Identity & Data Source",
            Step::Explore => "Intelligence Config",
            Step::Validate => "Preview Lab",
            Step::Deploy => "Target & Access",
        }
    }

    pub fn next_label(&self) -> &'static str {
        if self.is_last() {
            "Deploy Project"
        } else {
            "Continue"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Complete,
    Active,
    Pending,
}

/// Status of every step relative to `current`, in wizard order.
pub fn step_statuses(current: Step, steps: &[Step]) -> Vec<(Step, StepStatus)> {
    steps
        .iter()
        .map(|s| {
            let status = match s.number().cmp(&current.number()) {
                std::cmp::Ordering::Less => StepStatus::Complete,
                std::cmp::Ordering::Equal => StepStatus::Active,
                std::cmp::Ordering::Greater => StepStatus::Pending,
            };
            (*s, status)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_round_trip_within_range() {
        for s in Step::ALL {
            assert_eq!(Step::from_number(s.number()), Some(s));
        }
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(STEP_COUNT + 1), None);
    }

    #[test]
    fn neighbours_stop_at_boundaries() {
        assert_eq!(Step::Discover.previous(), None);
        assert_eq!(Step::Discover.next(), Some(Step::Explore));
        assert_eq!(Step::Deploy.next(), None);
        assert_eq!(Step::Deploy.previous(), Some(Step::Validate));
    }

    #[test]
    fn next_label_switches_on_last_step() {
        assert_eq!(Step::Validate.next_label(), "Continue");
        assert_eq!(Step::Deploy.next_label(), "Deploy Project");
    }

    #[test]
    fn statuses_split_around_current() {
        let statuses = step_statuses(Step::Validate, &Step::ALL);
        assert_eq!(
            statuses,
            vec![
                (Step::Discover, StepStatus::Complete),
                (Step::Explore, StepStatus::Complete),
                (Step::Validate, StepStatus::Active),
                (Step::Deploy, StepStatus::Pending),
            ]
        );
    }
}
