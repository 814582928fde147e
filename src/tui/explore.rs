//! Step 2: feature flags and the processing-time estimate.

use super::widgets::{checkbox, focus_style, heading, marker};
use super::StepView;
use crate::models::updates::SectionUpdate;
use crate::models::wizard_data::{ExploreSection, FeatureFlag, FeatureGroup, WizardData};
use crate::wizard::editing;

use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

#[derive(Debug, Default)]
pub(crate) struct ExploreView;

fn flag_line(flag: FeatureFlag, index: usize, focus: Option<usize>, on: bool) -> Line<'static> {
    let focused = focus == Some(index);
    Line::styled(
        format!(
            "{} {} {} (+{} min)",
            marker(focused),
            checkbox(on),
            flag.title(),
            flag.weight_minutes()
        ),
        focus_style(focused),
    )
}

fn group_lines(
    group: FeatureGroup,
    focus: Option<usize>,
    section: &ExploreSection,
) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(heading(group.as_str()))];
    for (i, flag) in FeatureFlag::ALL.iter().enumerate() {
        if flag.group() == group {
            lines.push(flag_line(*flag, i, focus, section.is_enabled(*flag)));
        }
    }
    lines
}

impl StepView for ExploreView {
    type Section = ExploreSection;

    const FIELD_COUNT: usize = FeatureFlag::ALL.len();

    fn handle_key(
        &mut self,
        field: usize,
        code: KeyCode,
        section: &ExploreSection,
    ) -> Option<SectionUpdate> {
        let flag = *FeatureFlag::ALL.get(field)?;
        match code {
            KeyCode::Char(' ') | KeyCode::Enter => {
                Some(editing::toggle_feature(section, flag).into())
            }
            _ => None,
        }
    }

    fn draw(&self, f: &mut Frame<'_>, area: Rect, focus: Option<usize>, data: &WizardData) {
        let section = &data.explore;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0), Constraint::Length(2)].as_ref())
            .split(area);

        let summary = Line::styled(
            format!(
                "Estimated processing time: ~{} min per 100 documents  |  {} of {} features enabled",
                section.estimated_minutes(),
                section.enabled_flags().len(),
                FeatureFlag::ALL.len()
            ),
            Style::default().add_modifier(Modifier::BOLD),
        );
        f.render_widget(Paragraph::new(summary), rows[0]);

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
            .split(rows[1]);
        f.render_widget(
            Paragraph::new(Text::from(group_lines(
                FeatureGroup::CoreCapability,
                focus,
                section,
            ))),
            cols[0],
        );
        f.render_widget(
            Paragraph::new(Text::from(group_lines(
                FeatureGroup::FunctionalModule,
                focus,
                section,
            ))),
            cols[1],
        );

        let detail = focus
            .and_then(|i| FeatureFlag::ALL.get(i))
            .map(|flag| format!("{}: {}", flag.title(), flag.subtitle()))
            .unwrap_or_default();
        f.render_widget(
            Paragraph::new(detail).wrap(Wrap { trim: true }),
            rows[2],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::state::WizardState;

    #[test]
    fn space_toggles_focused_flag() {
        let mut view = ExploreView;
        let mut state = WizardState::new();
        let idx = FeatureFlag::ALL
            .iter()
            .position(|f| *f == FeatureFlag::TableExtraction)
            .unwrap();

        let u = view
            .handle_key(idx, KeyCode::Char(' '), &state.data().explore)
            .unwrap();
        state.apply(u);
        assert!(state.data().explore.is_enabled(FeatureFlag::TableExtraction));
        assert_eq!(state.data().explore.estimated_minutes(), 12);
    }

    #[test]
    fn other_keys_and_out_of_range_fields_are_ignored() {
        let mut view = ExploreView;
        let section = ExploreSection::default();
        assert!(view.handle_key(0, KeyCode::Char('x'), &section).is_none());
        assert!(view
            .handle_key(FeatureFlag::ALL.len(), KeyCode::Enter, &section)
            .is_none());
    }
}
