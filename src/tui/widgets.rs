// Small rendering helpers shared by the wizard pages, the admin dashboard and the modals.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

pub(crate) fn button_text(label: &str, focused: bool, enabled: bool) -> Span<'static> {
    let mut style = Style::default();
    if !enabled {
        style = style.fg(Color::DarkGray);
    }
    if focused && enabled {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(format!("[ {} ]", label), style)
}

/// Centered rectangle clamped to the available area, never smaller than 60x20.
pub(crate) fn centered_window(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width.saturating_sub(2)).max(60).min(area.width);
    let h = height.min(area.height.saturating_sub(2)).max(20).min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect {
        x,
        y,
        width: w,
        height: h,
    }
}

/// Modal rectangle centered inside the wizard window.
pub(crate) fn modal_area(window: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(window.width.saturating_sub(4)).max(30).min(window.width);
    let h = height.min(window.height.saturating_sub(2)).max(5).min(window.height);
    Rect {
        x: window.x + (window.width.saturating_sub(w)) / 2,
        y: window.y + (window.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

pub(crate) fn checkbox(on: bool) -> &'static str {
    if on {
        "[x]"
    } else {
        "[ ]"
    }
}

pub(crate) fn radio(on: bool) -> &'static str {
    if on {
        "(x)"
    } else {
        "( )"
    }
}

/// Cursor marker in front of the focused field.
pub(crate) fn marker(focused: bool) -> &'static str {
    if focused {
        ">"
    } else {
        " "
    }
}

pub(crate) fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

pub(crate) fn heading(text: &str) -> Span<'static> {
    Span::styled(
        text.to_string(),
        Style::default().add_modifier(Modifier::UNDERLINED),
    )
}

pub(crate) fn warning(text: &str) -> Span<'static> {
    Span::styled(text.to_string(), Style::default().fg(Color::Yellow))
}

/// `[#####     ] 50%`
pub(crate) fn bar(percent: u8, width: usize) -> String {
    let pct = percent.min(100) as usize;
    let filled = (pct * width) / 100;
    format!(
        "[{}{}] {}%",
        "#".repeat(filled),
        " ".repeat(width.saturating_sub(filled)),
        pct
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_window_fits_small_terminals() {
        let area = Rect::new(0, 0, 50, 18);
        let r = centered_window(area, 100, 30);
        assert!(r.width <= area.width && r.height <= area.height, "{:?}", r);
    }

    #[test]
    fn centered_window_is_centered() {
        let r = centered_window(Rect::new(0, 0, 120, 40), 100, 30);
        assert_eq!(r, Rect::new(10, 5, 100, 30));
    }

    #[test]
    fn bar_clamps_percent() {
        assert_eq!(bar(50, 10), "[#####     ] 50%");
        assert_eq!(bar(250, 4), "[####] 100%");
    }
}
