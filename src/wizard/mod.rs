//! Wizard core: steps, navigation, and section editing.
//!
//! ```text
//! WizardController
//!   ├── WizardState (current step + WizardData)
//!   ├── Step (Discover → Explore → Validate → Deploy)
//!   └── editing (pure helpers producing section patches)
//! ```

pub mod controller;
pub mod editing;
pub mod steps;

pub use controller::{Notification, NotificationKind, Transition, WizardController};
pub use steps::{Step, StepStatus};
