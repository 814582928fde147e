//! Step 3: preview lab over the sample documents.

use super::widgets::{checkbox, focus_style, heading, marker};
use super::StepView;
use crate::models::fixtures::{SampleStatus, EXTRACTED_TERMS, SAMPLE_DOCUMENTS};
use crate::models::updates::{SectionUpdate, ValidatePatch};
use crate::models::wizard_data::{ValidateSection, WizardData};

use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

const DOCUMENTS: usize = 0;
const VALIDATED: usize = 1;

#[derive(Debug, Default)]
pub(crate) struct ValidateView {
    selected: usize,
}

impl StepView for ValidateView {
    type Section = ValidateSection;

    const FIELD_COUNT: usize = 2;

    fn handle_key(
        &mut self,
        field: usize,
        code: KeyCode,
        section: &ValidateSection,
    ) -> Option<SectionUpdate> {
        match (field, code) {
            (DOCUMENTS, KeyCode::Up | KeyCode::Left) => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            (DOCUMENTS, KeyCode::Down | KeyCode::Right) => {
                self.selected = (self.selected + 1).min(SAMPLE_DOCUMENTS.len() - 1);
                None
            }
            (VALIDATED, KeyCode::Char(' ') | KeyCode::Enter) => Some(
                ValidatePatch {
                    validated: Some(!section.validated),
                }
                .into(),
            ),
            _ => None,
        }
    }

    fn draw(&self, f: &mut Frame<'_>, area: Rect, focus: Option<usize>, data: &WizardData) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(5)].as_ref())
            .split(area);
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)].as_ref())
            .split(rows[0]);

        let docs_focused = focus == Some(DOCUMENTS);
        let mut left = vec![Line::styled(
            format!("{} Sample documents", marker(docs_focused)),
            focus_style(docs_focused),
        )];
        for (i, doc) in SAMPLE_DOCUMENTS.iter().enumerate() {
            let (mark, color) = match doc.status {
                SampleStatus::Validated => ("✓", Color::Green),
                SampleStatus::Review => ("!", Color::Yellow),
            };
            let cur = if i == self.selected { ">" } else { " " };
            left.push(Line::from(vec![
                Span::raw(format!("   {} ", cur)),
                Span::styled(mark, Style::default().fg(color)),
                Span::raw(format!(" {} ({}%)", doc.name, doc.confidence)),
            ]));
        }
        f.render_widget(
            Paragraph::new(Text::from(left)).wrap(Wrap { trim: false }),
            cols[0],
        );

        let doc = SAMPLE_DOCUMENTS[self.selected.min(SAMPLE_DOCUMENTS.len() - 1)];
        let mut right = vec![
            Line::from(heading(&format!("Extracted terms: {}", doc.name))),
            Line::from(format!("{}% confidence", doc.confidence)),
        ];
        for term in EXTRACTED_TERMS.iter() {
            right.push(Line::from(format!(
                "  {:<17} {:<20} {:>3}%",
                term.label, term.value, term.confidence
            )));
        }
        f.render_widget(
            Paragraph::new(Text::from(right)).wrap(Wrap { trim: false }),
            cols[1],
        );

        let validated_focused = focus == Some(VALIDATED);
        let bottom = vec![
            Line::styled(
                "Visual artifact detected: a \"Rate Table\" image on page 12 can be converted to a chart.",
                Style::default().fg(Color::Yellow),
            ),
            Line::from(""),
            Line::styled(
                format!(
                    "{} {} Sample validation complete",
                    marker(validated_focused),
                    checkbox(data.validate.validated)
                ),
                focus_style(validated_focused),
            ),
        ];
        f.render_widget(
            Paragraph::new(Text::from(bottom)).wrap(Wrap { trim: false }),
            rows[1],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validated_toggle_flips() {
        let mut view = ValidateView::default();
        let section = ValidateSection::default();
        let u = view
            .handle_key(VALIDATED, KeyCode::Char(' '), &section)
            .unwrap();
        assert_eq!(
            u,
            SectionUpdate::Validate(ValidatePatch {
                validated: Some(true)
            })
        );
    }

    #[test]
    fn document_selection_is_clamped() {
        let mut view = ValidateView::default();
        let section = ValidateSection::default();
        for _ in 0..10 {
            assert!(view.handle_key(DOCUMENTS, KeyCode::Down, &section).is_none());
        }
        assert_eq!(view.selected, SAMPLE_DOCUMENTS.len() - 1);
        view.handle_key(DOCUMENTS, KeyCode::Up, &section);
        assert_eq!(view.selected, SAMPLE_DOCUMENTS.len() - 2);
    }
}
