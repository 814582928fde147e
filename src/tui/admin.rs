//! Read-only admin dashboard over the fixture data.

use super::widgets::{bar, heading};
use crate::models::fixtures::{
    format_millions, format_thousands, format_usd, group_digits, ServiceHealth, StageStatus,
    BILLING, CLIENTS, CONFLICTS, EXTRACTION_AUDIT, INFRASTRUCTURE, PIPELINE_STAGES,
    PLATFORM_METRICS, total_billing_cost,
};

use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum AdminTab {
    #[default]
    Billing,
    Infrastructure,
    Clients,
    Testing,
}

impl AdminTab {
    pub(crate) const ALL: [AdminTab; 4] = [
        AdminTab::Billing,
        AdminTab::Infrastructure,
        AdminTab::Clients,
        AdminTab::Testing,
    ];

    pub(crate) fn title(&self) -> &'static str {
        match self {
            AdminTab::Billing => "Billing & Token Usage",
            AdminTab::Infrastructure => "Infrastructure",
            AdminTab::Clients => "Clients",
            AdminTab::Testing => "Testing & Monitoring",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }
}

#[derive(Debug, Default)]
pub(crate) struct AdminView {
    pub(crate) tab: AdminTab,
}

impl AdminView {
    pub(crate) fn handle_key(&mut self, code: KeyCode) {
        let i = self.tab.index();
        let n = AdminTab::ALL.len();
        self.tab = match code {
            KeyCode::Left | KeyCode::BackTab => AdminTab::ALL[(i + n - 1) % n],
            KeyCode::Right | KeyCode::Tab => AdminTab::ALL[(i + 1) % n],
            KeyCode::Char(c @ '1'..='4') => AdminTab::ALL[(c as usize) - ('1' as usize)],
            _ => self.tab,
        };
    }

    pub(crate) fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                [
                    Constraint::Length(2),
                    Constraint::Length(2),
                    Constraint::Min(0),
                ]
                .as_ref(),
            )
            .split(area);

        f.render_widget(Paragraph::new(metrics_line()), rows[0]);
        f.render_widget(Paragraph::new(self.tabs_line()), rows[1]);

        let body = match self.tab {
            AdminTab::Billing => billing_lines(),
            AdminTab::Infrastructure => infrastructure_lines(),
            AdminTab::Clients => client_lines(),
            AdminTab::Testing => testing_lines(),
        };
        f.render_widget(
            Paragraph::new(Text::from(body)).wrap(Wrap { trim: false }),
            rows[2],
        );
    }

    fn tabs_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, tab) in AdminTab::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            let style = if *tab == self.tab {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            spans.push(Span::styled(format!(" {} {} ", i + 1, tab.title()), style));
        }
        Line::from(spans)
    }
}

fn metrics_line() -> Line<'static> {
    let m = PLATFORM_METRICS;
    Line::styled(
        format!(
            "Projects: {} ({} active)   Avg accuracy: {:.1}%   Clients: {}   Documents: {}",
            m.total_projects,
            m.active_projects,
            m.average_accuracy,
            m.total_clients,
            group_digits(m.total_documents)
        ),
        Style::default().add_modifier(Modifier::BOLD),
    )
}

fn billing_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(heading("Usage by client and department")),
        Line::from(format!(
            "{:<24} {:<14} {:>10} {:>12} {:>10}",
            "Client", "Department", "DI calls", "LLM tokens", "Cost"
        )),
    ];
    for row in BILLING.iter() {
        lines.push(Line::from(format!(
            "{:<24} {:<14} {:>10} {:>12} {:>10}",
            row.client,
            row.department,
            format_thousands(row.doc_intelligence_calls),
            format_millions(row.llm_tokens),
            format_usd(row.cost_usd)
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!("Total cost: {}", format_usd(total_billing_cost())),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    lines
}

fn infrastructure_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(heading("Service health")),
        Line::from(format!(
            "{:<30} {:<10} {:>8} {:>9}",
            "Service", "Status", "Uptime", "Latency"
        )),
    ];
    for s in INFRASTRUCTURE.iter() {
        let color = match s.status {
            ServiceHealth::Healthy => Color::Green,
            ServiceHealth::Degraded => Color::Yellow,
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{:<30} ", s.service)),
            Span::styled(format!("{:<10}", s.status.as_str()), Style::default().fg(color)),
            Span::raw(format!(" {:>7.2}% {:>7}ms", s.uptime, s.latency_ms)),
        ]));
    }
    lines
}

fn client_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(heading("Client management")),
        Line::from(format!(
            "{:<26} {:>8} {:>9} {:>11}  {}",
            "Client", "Projects", "Accuracy", "Documents", "Status"
        )),
    ];
    for c in CLIENTS.iter() {
        lines.push(Line::from(format!(
            "{:<26} {:>8} {:>8.1}% {:>11}  {}",
            c.name,
            c.projects,
            c.accuracy,
            group_digits(c.documents),
            if c.active { "active" } else { "inactive" }
        )));
    }
    lines
}

fn testing_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(heading("Pipeline stages"))];
    for s in PIPELINE_STAGES.iter() {
        let color = match s.status {
            StageStatus::Complete => Color::Green,
            StageStatus::Processing => Color::Cyan,
            StageStatus::Error => Color::Red,
            StageStatus::Pending => Color::DarkGray,
        };
        lines.push(Line::from(vec![
            Span::raw(format!("  {:<22} ", s.name)),
            Span::raw(bar(s.progress, 16)),
            Span::raw(" "),
            Span::styled(format!("{:<10}", s.status.as_str()), Style::default().fg(color)),
            Span::raw(format!(
                " {}/{}",
                group_digits(s.documents_processed),
                group_digits(s.total_documents)
            )),
        ]));
    }

    lines.push(Line::from(heading("Extraction audit")));
    for e in EXTRACTION_AUDIT.iter() {
        let changed = match (e.manual_change, e.changed_by) {
            (true, Some(who)) => format!("  manual change by {}", who),
            (true, None) => "  manual change".to_string(),
            (false, _) => String::new(),
        };
        lines.push(Line::from(format!(
            "  {} {}: {} = {} ({}%){}",
            e.timestamp, e.document, e.attribute, e.extracted_value, e.confidence, changed
        )));
    }

    lines.push(Line::from(heading("Conflicts")));
    for c in CONFLICTS.iter() {
        lines.push(Line::from(format!(
            "  {} [{}] {}: {}",
            if c.resolved { "resolved" } else { "open    " },
            c.conflict_type.as_str(),
            c.document,
            c.description
        )));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_wrap_both_ways() {
        let mut view = AdminView::default();
        view.handle_key(KeyCode::Left);
        assert_eq!(view.tab, AdminTab::Testing);
        view.handle_key(KeyCode::Right);
        assert_eq!(view.tab, AdminTab::Billing);
    }

    #[test]
    fn number_keys_jump_to_tab() {
        let mut view = AdminView::default();
        view.handle_key(KeyCode::Char('3'));
        assert_eq!(view.tab, AdminTab::Clients);
        view.handle_key(KeyCode::Char('9'));
        assert_eq!(view.tab, AdminTab::Clients, "unknown digits are ignored");
    }

    #[test]
    fn billing_shows_total_cost() {
        let text: String = billing_lines()
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert!(
            text.contains(&format!("Total cost: {}", format_usd(total_billing_cost()))),
            "missing total: {}",
            text
        );
    }
}
