//! Feedback / bug report modal.

use super::input::TextInput;
use super::widgets::{button_text, focus_style, marker, modal_area, radio, warning};
use crate::api::feedback::{DiagnosticSink, FeedbackForm};
use crate::models::feedback::{FeedbackCategory, FeedbackContext, ReportType, Severity};
use crate::wizard::Notification;

use crossterm::event::KeyCode;
use log::debug;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Type,
    Category,
    Severity,
    Description,
    Submit,
    Cancel,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum FeedbackOutcome {
    Pending,
    Closed,
    Submitted(Notification),
}

#[derive(Debug, Default)]
pub(crate) struct FeedbackView {
    pub(crate) form: FeedbackForm,
    description: TextInput,
    focus: usize,
    warning: Option<String>,
}

impl FeedbackView {
    fn fields(&self) -> Vec<Field> {
        let mut fields = vec![Field::Type, Field::Category];
        if self.form.report_type == ReportType::Bug {
            fields.push(Field::Severity);
        }
        fields.extend([Field::Description, Field::Submit, Field::Cancel]);
        fields
    }

    fn focused(&self) -> Field {
        let fields = self.fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    pub(crate) fn open(&mut self) {
        self.form.open();
        self.description.set(self.form.description.clone());
        self.focus = 0;
        self.warning = None;
    }

    pub(crate) fn is_open(&self) -> bool {
        self.form.is_open
    }

    pub(crate) fn handle_key(
        &mut self,
        code: KeyCode,
        context: &FeedbackContext,
        sink: &mut dyn DiagnosticSink,
    ) -> FeedbackOutcome {
        let n = self.fields().len();
        match code {
            KeyCode::Esc => {
                self.warning = None;
                self.form.close();
                return FeedbackOutcome::Closed;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % n;
                return FeedbackOutcome::Pending;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + n - 1) % n;
                return FeedbackOutcome::Pending;
            }
            _ => {}
        }

        match self.focused() {
            Field::Type => {
                if matches!(
                    code,
                    KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter
                ) {
                    self.form.set_report_type(self.form.report_type.toggle());
                }
            }
            Field::Category => {
                if matches!(
                    code,
                    KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter
                ) {
                    self.form.cycle_category();
                }
            }
            Field::Severity => {
                if matches!(
                    code,
                    KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter
                ) {
                    self.form.cycle_severity();
                }
            }
            Field::Description => {
                if code == KeyCode::Enter {
                    return self.submit(context, sink);
                }
                if self.description.handle_key(code) {
                    self.warning = None;
                    self.form.description = self.description.value.clone();
                }
            }
            Field::Submit => {
                if code == KeyCode::Enter {
                    return self.submit(context, sink);
                }
            }
            Field::Cancel => {
                if code == KeyCode::Enter {
                    self.warning = None;
                    self.form.close();
                    return FeedbackOutcome::Closed;
                }
            }
        }
        FeedbackOutcome::Pending
    }

    fn submit(
        &mut self,
        context: &FeedbackContext,
        sink: &mut dyn DiagnosticSink,
    ) -> FeedbackOutcome {
        match self.form.submit(context, sink) {
            Ok(note) => {
                self.description.clear();
                self.warning = None;
                self.focus = 0;
                FeedbackOutcome::Submitted(note)
            }
            Err(e) => {
                debug!("[PHASE: feedback] [STEP: validate] {}", e);
                self.warning = Some(e.to_string());
                FeedbackOutcome::Pending
            }
        }
    }

    pub(crate) fn draw(&self, f: &mut Frame<'_>, window: Rect) {
        let area = modal_area(window, 72, 16);
        f.render_widget(Clear, area);

        let title = match self.form.report_type {
            ReportType::Bug => "Report a Bug",
            ReportType::Feedback => "Share Feedback",
        };
        let focused = self.focused();
        let is = |fld: Field| focused == fld;

        let types = [ReportType::Bug, ReportType::Feedback]
            .iter()
            .map(|t| format!("{} {}", radio(self.form.report_type == *t), t.as_str()))
            .collect::<Vec<_>>()
            .join("  ");
        let category = self
            .form
            .category
            .map(|c| c.as_str())
            .unwrap_or("Select a category");
        let options = FeedbackCategory::for_report_type(self.form.report_type)
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let mut lines = vec![
            Line::styled(
                format!("{} Type: {}", marker(is(Field::Type)), types),
                focus_style(is(Field::Type)),
            ),
            Line::styled(
                format!("{} Category: < {} >", marker(is(Field::Category)), category),
                focus_style(is(Field::Category)),
            ),
            Line::from(format!("    ({})", options)),
        ];
        if self.form.report_type == ReportType::Bug {
            let levels = [Severity::Low, Severity::Medium, Severity::High]
                .iter()
                .map(|s| format!("{} {}", radio(self.form.severity == *s), s.as_str()))
                .collect::<Vec<_>>()
                .join("  ");
            lines.push(Line::styled(
                format!("{} Severity: {}", marker(is(Field::Severity)), levels),
                focus_style(is(Field::Severity)),
            ));
        }
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!(
                "{} Description: {}",
                marker(is(Field::Description)),
                self.description.display(is(Field::Description))
            ),
            focus_style(is(Field::Description)),
        ));
        if let Some(w) = &self.warning {
            lines.push(Line::from(warning(w)));
        }

        let block = Block::default().borders(Borders::ALL).title(title);
        f.render_widget(
            Paragraph::new(Text::from(lines))
                .block(block)
                .wrap(Wrap { trim: false }),
            area,
        );

        let buttons_area = Rect {
            x: area.x + 1,
            y: area.y + area.height.saturating_sub(2),
            width: area.width.saturating_sub(2),
            height: 1,
        };
        let line = Line::from(vec![
            button_text("Submit", is(Field::Submit), true),
            Span::raw(" "),
            button_text("Cancel", is(Field::Cancel), true),
        ]);
        f.render_widget(
            Paragraph::new(Text::from(line)).alignment(Alignment::Right),
            buttons_area,
        );
    }
}
