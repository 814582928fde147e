//! Step 4: integrations, team access, line-of-business assignment, and external auditors.

use super::input::TextInput;
use super::widgets::{checkbox, focus_style, heading, marker, warning};
use super::StepView;
use crate::models::fixtures::{team_member, EXPORT_FORMATS, LINES_OF_BUSINESS, TEAM_MEMBERS};
use crate::models::updates::SectionUpdate;
use crate::models::wizard_data::{
    AccessRole, Auditor, DeploySection, FeatureFlag, IntegrationOption, WizardData,
};
use crate::utils::logging::mask_email;
use crate::wizard::editing;

use crossterm::event::KeyCode;
use log::debug;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

const USERS: usize = 3;
const LOB: usize = 4;
const EXTERNAL: usize = 5;
const AUDITORS: usize = 6;
const AUDITOR_EMAIL: usize = 7;
const AUDITOR_EXPIRY: usize = 8;

#[derive(Debug, Default)]
pub(crate) struct DeployView {
    user_cursor: usize,
    lob_index: usize,
    lob_member_cursor: usize,
    auditor_cursor: usize,
    auditor_email: TextInput,
    auditor_expiry: TextInput,
    warning: Option<String>,
}

fn step_cursor(cursor: usize, code: KeyCode, len: usize) -> usize {
    match code {
        KeyCode::Up | KeyCode::Left => cursor.saturating_sub(1),
        KeyCode::Down | KeyCode::Right => (cursor + 1).min(len.saturating_sub(1)),
        _ => cursor,
    }
}

impl DeployView {
    fn handle_auditor_input(
        &mut self,
        field: usize,
        code: KeyCode,
        section: &DeploySection,
    ) -> Option<SectionUpdate> {
        let current = section.external_access.auditors.get(self.auditor_cursor)?;
        let (input, stored) = if field == AUDITOR_EMAIL {
            (&mut self.auditor_email, &current.email)
        } else {
            (&mut self.auditor_expiry, &current.expiry_date)
        };
        if input.value != *stored {
            input.set(stored.clone());
        }
        if !input.handle_key(code) {
            return None;
        }

        let mut edited = current.clone();
        if field == AUDITOR_EMAIL {
            edited.email = self.auditor_email.value.clone();
        } else {
            edited.expiry_date = self.auditor_expiry.value.clone();
        }
        debug!(
            "[PHASE: deploy] [STEP: auditor] Editing auditor {} email={}",
            self.auditor_cursor,
            mask_email(&edited.email)
        );
        editing::update_auditor(section, self.auditor_cursor, edited).map(Into::into)
    }

    fn left_lines(&self, focus: Option<usize>, data: &WizardData) -> Vec<Line<'static>> {
        let d = &data.deploy;
        let mut lines = vec![Line::from(heading("Integrations"))];
        for (i, opt) in IntegrationOption::ALL.iter().enumerate() {
            let focused = focus == Some(i);
            lines.push(Line::styled(
                format!(
                    "{} {} {}",
                    marker(focused),
                    checkbox(d.integration(*opt)),
                    opt.title()
                ),
                focus_style(focused),
            ));
            lines.push(Line::from(format!("      {}", opt.description())));
            if *opt == IntegrationOption::ExportData && d.export_data {
                let formats: Vec<String> = EXPORT_FORMATS
                    .iter()
                    .map(|(label, desc)| format!("{} ({})", label, desc))
                    .collect();
                lines.push(Line::from(format!("      Formats: {}", formats.join(", "))));
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(heading("Project Summary")));
        lines.push(Line::from(format!(
            "  Processing estimate: ~{} min per 100 documents",
            data.explore.estimated_minutes()
        )));
        lines.push(Line::from(format!(
            "  AI features enabled: {} of {}",
            data.explore.enabled_flags().len(),
            FeatureFlag::ALL.len()
        )));
        lines.push(Line::from(format!(
            "  Team access: {} members",
            d.selected_users.len()
        )));
        lines.push(Line::from(format!(
            "  Sample validation: {}",
            if data.validate.validated {
                "complete"
            } else {
                "pending"
            }
        )));
        lines
    }

    fn right_lines(&self, focus: Option<usize>, d: &DeploySection) -> Vec<Line<'static>> {
        let f = |i: usize| focus == Some(i);
        let mut lines = vec![
            Line::from(heading("Access Control")),
            Line::styled(
                format!("{} Team members (Space: select, Left/Right: role)", marker(f(USERS))),
                focus_style(f(USERS)),
            ),
        ];
        for (i, m) in TEAM_MEMBERS.iter().enumerate() {
            let cur = if f(USERS) && i == self.user_cursor {
                ">"
            } else {
                " "
            };
            let role = d
                .user_roles
                .get(m.id)
                .map(|r| format!("  role: {}", r.as_str()))
                .unwrap_or_default();
            lines.push(Line::from(format!(
                "   {} {} {} ({}){}",
                cur,
                checkbox(d.is_selected(m.id)),
                m.name,
                m.role,
                role
            )));
        }

        let lob = LINES_OF_BUSINESS[self.lob_index.min(LINES_OF_BUSINESS.len() - 1)];
        let members: Vec<&str> = d
            .lob_assignments
            .get(lob)
            .map(|set| {
                set.iter()
                    .filter_map(|id| team_member(id).map(|m| m.name))
                    .collect()
            })
            .unwrap_or_default();
        let candidate = TEAM_MEMBERS[self.lob_member_cursor.min(TEAM_MEMBERS.len() - 1)];
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!(
                "{} Line of business: {} ({} assigned)",
                marker(f(LOB)),
                lob,
                d.lob_members(lob)
            ),
            focus_style(f(LOB)),
        ));
        lines.push(Line::from(format!(
            "      {} {}",
            checkbox(members.contains(&candidate.name)),
            candidate.name
        )));

        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!(
                "{} {} External auditor access",
                marker(f(EXTERNAL)),
                checkbox(d.external_access.enabled)
            ),
            focus_style(f(EXTERNAL)),
        ));
        if d.external_access.enabled {
            lines.push(Line::styled(
                format!(
                    "{} Auditors ({}) (a: add, Del: remove)",
                    marker(f(AUDITORS)),
                    d.external_access.auditors.len()
                ),
                focus_style(f(AUDITORS)),
            ));
            for (i, a) in d.external_access.auditors.iter().enumerate() {
                let cur = if i == self.auditor_cursor { ">" } else { " " };
                let email = if a.email.is_empty() { "(no email)" } else { &a.email };
                let expiry = if a.expiry_date.is_empty() {
                    "no expiry"
                } else {
                    &a.expiry_date
                };
                lines.push(Line::from(format!("   {} {} until {}", cur, email, expiry)));
            }
            let selected = d.external_access.auditors.get(self.auditor_cursor);
            let email = selected.map(|a| a.email.clone()).unwrap_or_default();
            let expiry = selected.map(|a| a.expiry_date.clone()).unwrap_or_default();
            lines.push(Line::styled(
                format!(
                    "{} Email: {}",
                    marker(f(AUDITOR_EMAIL)),
                    if f(AUDITOR_EMAIL) && self.auditor_email.value == email {
                        self.auditor_email.display(true)
                    } else {
                        email
                    }
                ),
                focus_style(f(AUDITOR_EMAIL)),
            ));
            lines.push(Line::styled(
                format!(
                    "{} Expiry date: {}",
                    marker(f(AUDITOR_EXPIRY)),
                    if f(AUDITOR_EXPIRY) && self.auditor_expiry.value == expiry {
                        self.auditor_expiry.display(true)
                    } else {
                        expiry
                    }
                ),
                focus_style(f(AUDITOR_EXPIRY)),
            ));
        }

        if let Some(w) = &self.warning {
            lines.push(Line::from(warning(w)));
        }
        lines
    }
}

impl StepView for DeployView {
    type Section = DeploySection;

    const FIELD_COUNT: usize = 9;

    fn handle_key(
        &mut self,
        field: usize,
        code: KeyCode,
        section: &DeploySection,
    ) -> Option<SectionUpdate> {
        self.warning = None;
        let toggle = matches!(code, KeyCode::Char(' ') | KeyCode::Enter);

        if let Some(opt) = IntegrationOption::ALL.get(field) {
            return toggle.then(|| editing::toggle_integration(section, *opt).into());
        }

        match field {
            USERS => {
                let member = TEAM_MEMBERS[self.user_cursor.min(TEAM_MEMBERS.len() - 1)];
                match code {
                    KeyCode::Up | KeyCode::Down => {
                        self.user_cursor = step_cursor(self.user_cursor, code, TEAM_MEMBERS.len());
                        None
                    }
                    KeyCode::Left | KeyCode::Right => {
                        let role = AccessRole::next(section.user_roles.get(member.id).copied());
                        let patch = editing::set_user_role(section, member.id, role);
                        if patch.is_none() && !section.is_selected(member.id) {
                            self.warning =
                                Some("Select the team member before assigning a role".to_string());
                        }
                        patch.map(Into::into)
                    }
                    _ if toggle => Some(editing::toggle_user(section, member.id).into()),
                    _ => None,
                }
            }
            LOB => match code {
                KeyCode::Up | KeyCode::Down => {
                    self.lob_index = step_cursor(self.lob_index, code, LINES_OF_BUSINESS.len());
                    None
                }
                KeyCode::Left | KeyCode::Right => {
                    self.lob_member_cursor =
                        step_cursor(self.lob_member_cursor, code, TEAM_MEMBERS.len());
                    None
                }
                _ if toggle => {
                    let lob = LINES_OF_BUSINESS[self.lob_index.min(LINES_OF_BUSINESS.len() - 1)];
                    let member =
                        TEAM_MEMBERS[self.lob_member_cursor.min(TEAM_MEMBERS.len() - 1)];
                    Some(editing::toggle_lob_member(section, lob, member.id).into())
                }
                _ => None,
            },
            EXTERNAL => toggle.then(|| {
                editing::set_external_access(section, !section.external_access.enabled).into()
            }),
            AUDITORS | AUDITOR_EMAIL | AUDITOR_EXPIRY if !section.external_access.enabled => None,
            AUDITORS => {
                let len = section.external_access.auditors.len();
                match code {
                    KeyCode::Up | KeyCode::Down => {
                        self.auditor_cursor = step_cursor(self.auditor_cursor, code, len);
                        None
                    }
                    KeyCode::Char('a') | KeyCode::Insert | KeyCode::Enter => {
                        self.auditor_cursor = len;
                        Some(editing::add_auditor(section).into())
                    }
                    KeyCode::Delete | KeyCode::Backspace => {
                        let patch = editing::remove_auditor(section, self.auditor_cursor)?;
                        self.auditor_cursor = self.auditor_cursor.min(len.saturating_sub(2));
                        Some(patch.into())
                    }
                    _ => None,
                }
            }
            AUDITOR_EMAIL | AUDITOR_EXPIRY => self.handle_auditor_input(field, code, section),
            _ => None,
        }
    }

    fn draw(&self, f: &mut Frame<'_>, area: Rect, focus: Option<usize>, data: &WizardData) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)].as_ref())
            .split(area);

        f.render_widget(
            Paragraph::new(Text::from(self.left_lines(focus, data))).wrap(Wrap { trim: false }),
            cols[0],
        );
        f.render_widget(
            Paragraph::new(Text::from(self.right_lines(focus, &data.deploy)))
                .wrap(Wrap { trim: false }),
            cols[1],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::state::WizardState;

    fn press(view: &mut DeployView, state: &mut WizardState, field: usize, codes: &[KeyCode]) {
        for code in codes {
            if let Some(u) = view.handle_key(field, *code, &state.data().deploy) {
                state.apply(u);
            }
        }
    }

    #[test]
    fn integration_toggles_on_space() {
        let mut view = DeployView::default();
        let mut state = WizardState::new();
        press(&mut view, &mut state, 1, &[KeyCode::Char(' ')]);
        assert!(state.data().deploy.export_data);
        press(&mut view, &mut state, 0, &[KeyCode::Enter]);
        assert!(!state.data().deploy.publish_to_hub);
    }

    #[test]
    fn role_requires_selection_and_is_dropped_on_deselect() {
        let mut view = DeployView::default();
        let mut state = WizardState::new();

        press(&mut view, &mut state, USERS, &[KeyCode::Right]);
        assert!(state.data().deploy.user_roles.is_empty());
        assert!(view.warning.is_some());

        press(
            &mut view,
            &mut state,
            USERS,
            &[KeyCode::Char(' '), KeyCode::Right],
        );
        assert_eq!(
            state.data().deploy.user_roles.get("1"),
            Some(&AccessRole::View)
        );

        press(&mut view, &mut state, USERS, &[KeyCode::Char(' ')]);
        assert!(state.data().deploy.selected_users.is_empty());
        assert!(state.data().deploy.user_roles.is_empty());
    }

    #[test]
    fn lob_assignment_uses_member_cursor() {
        let mut view = DeployView::default();
        let mut state = WizardState::new();
        press(
            &mut view,
            &mut state,
            LOB,
            &[KeyCode::Down, KeyCode::Right, KeyCode::Char(' ')],
        );
        let lob = LINES_OF_BUSINESS[1];
        assert!(state.data().deploy.lob_assignments[lob].contains(TEAM_MEMBERS[1].id));
    }

    #[test]
    fn auditors_need_external_access() {
        let mut view = DeployView::default();
        let mut state = WizardState::new();
        press(&mut view, &mut state, AUDITORS, &[KeyCode::Char('a')]);
        assert!(state.data().deploy.external_access.auditors.is_empty());

        press(&mut view, &mut state, EXTERNAL, &[KeyCode::Char(' ')]);
        press(&mut view, &mut state, AUDITORS, &[KeyCode::Char('a')]);
        assert_eq!(
            state.data().deploy.external_access.auditors,
            vec![Auditor::default()]
        );

        let keys: Vec<KeyCode> = "a@b.example".chars().map(KeyCode::Char).collect();
        press(&mut view, &mut state, AUDITOR_EMAIL, &keys);
        let keys: Vec<KeyCode> = "2025-06-30".chars().map(KeyCode::Char).collect();
        press(&mut view, &mut state, AUDITOR_EXPIRY, &keys);
        assert_eq!(
            state.data().deploy.external_access.auditors[0],
            Auditor {
                email: "a@b.example".to_string(),
                expiry_date: "2025-06-30".to_string(),
            }
        );

        press(&mut view, &mut state, AUDITORS, &[KeyCode::Delete]);
        assert!(state.data().deploy.external_access.auditors.is_empty());
    }
}
