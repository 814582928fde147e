use crate::wizard::steps::{step_statuses, Step, StepStatus};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

fn symbol(status: StepStatus) -> &'static str {
    match status {
        StepStatus::Complete => "✓",
        StepStatus::Active => "●",
        StepStatus::Pending => "○",
    }
}

/// `✓ 1 Discover ── ● 2 Explore ── ○ 3 Validate ── ○ 4 Deploy`
pub(crate) fn progress_line(current: Step) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (step, status)) in step_statuses(current, &Step::ALL).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ── ", Style::default().fg(Color::DarkGray)));
        }
        let style = match status {
            StepStatus::Complete => Style::default().fg(Color::Green),
            StepStatus::Active => Style::default().add_modifier(Modifier::BOLD),
            StepStatus::Pending => Style::default().fg(Color::DarkGray),
        };
        spans.push(Span::styled(
            format!("{} {} {}", symbol(status), step.number(), step.label()),
            style,
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn marks_follow_current_step() {
        assert_eq!(
            plain(&progress_line(Step::Explore)),
            "✓ 1 Discover ── ● 2 Explore ── ○ 3 Validate ── ○ 4 Deploy"
        );
        assert!(plain(&progress_line(Step::Deploy)).ends_with("● 4 Deploy"));
    }
}
