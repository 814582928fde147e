//! Step 1: project identity, ingestion source, confidentiality, and the dataset manager.

use super::input::TextInput;
use super::widgets::{focus_style, heading, marker, radio, warning};
use super::StepView;
use crate::api::dictionary::select_custom_dictionary;
use crate::models::updates::{DiscoverPatch, SectionUpdate};
use crate::models::wizard_data::{
    Attribute, AttributeType, BusinessCategory, ConfidentialityLevel, DiscoverSection,
    IngestionSource, WizardData,
};
use crate::wizard::editing;

use crossterm::event::KeyCode;
use log::warn;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;
use std::path::Path;

const PROJECT_NAME: usize = 0;
const CATEGORY: usize = 1;
const SOURCE: usize = 2;
const CONFIDENTIALITY: usize = 3;
const KEYWORD_DRAFT: usize = 4;
const KEYWORDS: usize = 5;
const ATTR_NAME: usize = 6;
const ATTR_TYPE: usize = 7;
const ATTR_DESCRIPTION: usize = 8;
const ATTRIBUTES: usize = 9;
const DICTIONARY: usize = 10;

const SOURCES: [IngestionSource; 2] = [IngestionSource::Upload, IngestionSource::Cloud];

#[derive(Debug, Default)]
pub(crate) struct DiscoverView {
    project_name: TextInput,
    keyword_draft: TextInput,
    keyword_cursor: usize,
    attribute_name: TextInput,
    attribute_type: AttributeType,
    attribute_description: TextInput,
    attribute_cursor: usize,
    dictionary_path: TextInput,
    warning: Option<String>,
}

impl DiscoverView {
    fn add_attribute(&mut self, section: &DiscoverSection) -> Option<SectionUpdate> {
        let draft = Attribute {
            name: self.attribute_name.value.trim().to_string(),
            attribute_type: self.attribute_type,
            description: self.attribute_description.value.trim().to_string(),
        };
        match editing::add_attribute(&section.dataset_manager, &draft) {
            Some(patch) => {
                self.attribute_name.clear();
                self.attribute_description.clear();
                self.attribute_type = AttributeType::default();
                Some(patch.into())
            }
            None => {
                self.warning = Some("Attribute name required".to_string());
                None
            }
        }
    }

    fn load_dictionary(&mut self, section: &DiscoverSection) -> Option<SectionUpdate> {
        let raw = self.dictionary_path.value.trim().to_string();
        if raw.is_empty() {
            return None;
        }
        match select_custom_dictionary(Path::new(&raw)) {
            Ok(handle) => {
                self.dictionary_path.clear();
                Some(editing::set_custom_dictionary(&section.dataset_manager, Some(handle)).into())
            }
            Err(e) => {
                warn!(
                    "[PHASE: discover] [STEP: custom_dictionary] Rejected {:?}: {}",
                    raw, e
                );
                self.warning = Some(e.to_string());
                None
            }
        }
    }

    fn left_lines(&self, focus: Option<usize>, d: &DiscoverSection) -> Vec<Line<'static>> {
        let f = |i: usize| focus == Some(i);
        let category = d
            .business_category
            .map(|c| c.as_str())
            .unwrap_or("Select a category");

        let mut lines = vec![
            Line::from(heading("Project Identity")),
            Line::styled(
                format!(
                    "{} Project name: {}",
                    marker(f(PROJECT_NAME)),
                    self.project_name_display(f(PROJECT_NAME), d)
                ),
                focus_style(f(PROJECT_NAME)),
            ),
            Line::styled(
                format!("{} Business category: < {} >", marker(f(CATEGORY)), category),
                focus_style(f(CATEGORY)),
            ),
            Line::from(""),
            Line::from(heading("Ingestion Source")),
        ];

        let sources: Vec<String> = SOURCES
            .iter()
            .map(|s| format!("{} {}", radio(d.ingestion_source == Some(*s)), s.as_str()))
            .collect();
        lines.push(Line::styled(
            format!("{} {}", marker(f(SOURCE)), sources.join("  ")),
            focus_style(f(SOURCE)),
        ));
        if let Some(s) = d.ingestion_source {
            lines.push(Line::from(format!("    {}", s.description())));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(heading("Confidentiality Level")));
        let levels: Vec<String> = ConfidentialityLevel::ALL
            .iter()
            .map(|c| {
                format!(
                    "{} {}",
                    radio(d.confidentiality_level == Some(*c)),
                    c.as_str()
                )
            })
            .collect();
        lines.push(Line::styled(
            format!("{} {}", marker(f(CONFIDENTIALITY)), levels.join("  ")),
            focus_style(f(CONFIDENTIALITY)),
        ));
        if let Some(c) = d.confidentiality_level {
            lines.push(Line::from(format!("    {}", c.description())));
        }
        lines
    }

    fn project_name_display(&self, focused: bool, d: &DiscoverSection) -> String {
        if self.project_name.value == d.project_name {
            self.project_name.display(focused)
        } else {
            d.project_name.clone()
        }
    }

    fn right_lines(&self, focus: Option<usize>, d: &DiscoverSection) -> Vec<Line<'static>> {
        let f = |i: usize| focus == Some(i);
        let dm = &d.dataset_manager;

        let mut lines = vec![
            Line::from(heading("Dataset Manager")),
            Line::styled(
                format!(
                    "{} Keyword flag: {}",
                    marker(f(KEYWORD_DRAFT)),
                    self.keyword_draft.display(f(KEYWORD_DRAFT))
                ),
                focus_style(f(KEYWORD_DRAFT)),
            ),
        ];

        let mut spans = vec![Span::styled(
            format!("{} Flags ({}): ", marker(f(KEYWORDS)), dm.keyword_flags.len()),
            focus_style(f(KEYWORDS)),
        )];
        if dm.keyword_flags.is_empty() {
            spans.push(Span::raw("none"));
        }
        for (i, k) in dm.keyword_flags.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(", "));
            }
            if f(KEYWORDS) && i == self.keyword_cursor {
                spans.push(Span::raw(format!("[{}]", k)));
            } else {
                spans.push(Span::raw(k.clone()));
            }
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));

        lines.push(Line::styled(
            format!(
                "{} Attribute name: {}",
                marker(f(ATTR_NAME)),
                self.attribute_name.display(f(ATTR_NAME))
            ),
            focus_style(f(ATTR_NAME)),
        ));
        lines.push(Line::styled(
            format!(
                "{} Type: < {} >",
                marker(f(ATTR_TYPE)),
                self.attribute_type.as_str()
            ),
            focus_style(f(ATTR_TYPE)),
        ));
        lines.push(Line::styled(
            format!(
                "{} Description: {}",
                marker(f(ATTR_DESCRIPTION)),
                self.attribute_description.display(f(ATTR_DESCRIPTION))
            ),
            focus_style(f(ATTR_DESCRIPTION)),
        ));
        lines.push(Line::styled(
            format!(
                "{} Attributes ({}):",
                marker(f(ATTRIBUTES)),
                dm.attributes.len()
            ),
            focus_style(f(ATTRIBUTES)),
        ));
        for (i, a) in dm.attributes.iter().enumerate().take(4) {
            let cur = if f(ATTRIBUTES) && i == self.attribute_cursor {
                ">"
            } else {
                " "
            };
            lines.push(Line::from(format!(
                "   {} {} ({})",
                cur,
                a.name,
                a.attribute_type.as_str()
            )));
        }
        if dm.attributes.len() > 4 {
            lines.push(Line::from(format!("     +{} more", dm.attributes.len() - 4)));
        }
        lines.push(Line::from(""));

        lines.push(Line::styled(
            format!(
                "{} Custom dictionary: {}",
                marker(f(DICTIONARY)),
                self.dictionary_path.display(f(DICTIONARY))
            ),
            focus_style(f(DICTIONARY)),
        ));
        lines.push(Line::from(match &dm.custom_dictionary {
            Some(h) => format!("    Loaded: {} ({})", h.name, h.size_kb()),
            None => "    .csv, .json or .txt".to_string(),
        }));

        if let Some(w) = &self.warning {
            lines.push(Line::from(warning(w)));
        }
        lines
    }
}

impl StepView for DiscoverView {
    type Section = DiscoverSection;

    const FIELD_COUNT: usize = 11;

    fn handle_key(
        &mut self,
        field: usize,
        code: KeyCode,
        section: &DiscoverSection,
    ) -> Option<SectionUpdate> {
        self.warning = None;
        let dm = &section.dataset_manager;

        match field {
            PROJECT_NAME => {
                if self.project_name.value != section.project_name {
                    self.project_name.set(section.project_name.clone());
                }
                if !self.project_name.handle_key(code) {
                    return None;
                }
                Some(
                    DiscoverPatch {
                        project_name: Some(self.project_name.value.clone()),
                        ..Default::default()
                    }
                    .into(),
                )
            }
            CATEGORY => {
                let forward = match code {
                    KeyCode::Left => false,
                    KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter => true,
                    _ => return None,
                };
                Some(
                    DiscoverPatch {
                        business_category: Some(BusinessCategory::cycle(
                            section.business_category,
                            forward,
                        )),
                        ..Default::default()
                    }
                    .into(),
                )
            }
            SOURCE => match code {
                KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter => Some(
                    DiscoverPatch {
                        ingestion_source: Some(IngestionSource::toggle(section.ingestion_source)),
                        ..Default::default()
                    }
                    .into(),
                ),
                _ => None,
            },
            CONFIDENTIALITY => match code {
                KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter => Some(
                    DiscoverPatch {
                        confidentiality_level: Some(ConfidentialityLevel::next(
                            section.confidentiality_level,
                        )),
                        ..Default::default()
                    }
                    .into(),
                ),
                _ => None,
            },
            KEYWORD_DRAFT => {
                if code != KeyCode::Enter {
                    self.keyword_draft.handle_key(code);
                    return None;
                }
                if self.keyword_draft.is_blank() {
                    return None;
                }
                match editing::add_keyword_flag(dm, &self.keyword_draft.value) {
                    Some(patch) => {
                        self.keyword_draft.clear();
                        Some(patch.into())
                    }
                    None => {
                        self.warning = Some("Keyword already added".to_string());
                        None
                    }
                }
            }
            KEYWORDS => {
                let len = dm.keyword_flags.len();
                match code {
                    KeyCode::Up | KeyCode::Left => {
                        self.keyword_cursor = self.keyword_cursor.saturating_sub(1);
                        None
                    }
                    KeyCode::Down | KeyCode::Right => {
                        self.keyword_cursor = (self.keyword_cursor + 1).min(len.saturating_sub(1));
                        None
                    }
                    KeyCode::Delete | KeyCode::Backspace => {
                        let keyword = dm.keyword_flags.get(self.keyword_cursor)?;
                        let patch = editing::remove_keyword_flag(dm, keyword)?;
                        self.keyword_cursor = self.keyword_cursor.min(len.saturating_sub(2));
                        Some(patch.into())
                    }
                    _ => None,
                }
            }
            ATTR_NAME | ATTR_DESCRIPTION => {
                if code == KeyCode::Enter {
                    return self.add_attribute(section);
                }
                let input = if field == ATTR_NAME {
                    &mut self.attribute_name
                } else {
                    &mut self.attribute_description
                };
                input.handle_key(code);
                None
            }
            ATTR_TYPE => {
                match code {
                    KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                        self.attribute_type = self.attribute_type.next();
                    }
                    KeyCode::Enter => return self.add_attribute(section),
                    _ => {}
                }
                None
            }
            ATTRIBUTES => {
                let len = dm.attributes.len();
                match code {
                    KeyCode::Up => {
                        self.attribute_cursor = self.attribute_cursor.saturating_sub(1);
                        None
                    }
                    KeyCode::Down => {
                        self.attribute_cursor =
                            (self.attribute_cursor + 1).min(len.saturating_sub(1));
                        None
                    }
                    KeyCode::Delete | KeyCode::Backspace => {
                        let patch = editing::remove_attribute(dm, self.attribute_cursor)?;
                        self.attribute_cursor = self.attribute_cursor.min(len.saturating_sub(2));
                        Some(patch.into())
                    }
                    _ => None,
                }
            }
            DICTIONARY => match code {
                KeyCode::Enter => self.load_dictionary(section),
                KeyCode::Delete
                    if self.dictionary_path.value.is_empty() && dm.custom_dictionary.is_some() =>
                {
                    Some(editing::set_custom_dictionary(dm, None).into())
                }
                _ => {
                    self.dictionary_path.handle_key(code);
                    None
                }
            },
            _ => None,
        }
    }

    fn draw(&self, f: &mut Frame<'_>, area: Rect, focus: Option<usize>, data: &WizardData) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
            .split(area);

        let left = Paragraph::new(Text::from(self.left_lines(focus, &data.discover)))
            .wrap(Wrap { trim: false });
        f.render_widget(left, cols[0]);

        let right = Paragraph::new(Text::from(self.right_lines(focus, &data.discover)))
            .wrap(Wrap { trim: false });
        f.render_widget(right, cols[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::state::WizardState;

    fn press(
        view: &mut DiscoverView,
        state: &mut WizardState,
        field: usize,
        codes: &[KeyCode],
    ) {
        for code in codes {
            if let Some(u) = view.handle_key(field, *code, &state.data().discover) {
                state.apply(u);
            }
        }
    }

    fn chars(s: &str) -> Vec<KeyCode> {
        s.chars().map(KeyCode::Char).collect()
    }

    #[test]
    fn typing_project_name_dispatches_each_edit() {
        let mut view = DiscoverView::default();
        let mut state = WizardState::new();
        press(&mut view, &mut state, PROJECT_NAME, &chars("Q1 Audit"));
        assert_eq!(state.data().discover.project_name, "Q1 Audit");
        assert_eq!(state.data().discover.business_category, None);
    }

    #[test]
    fn keyword_draft_commits_on_enter_and_rejects_duplicates() {
        let mut view = DiscoverView::default();
        let mut state = WizardState::new();
        let mut keys = chars(" Indemnity ");
        keys.push(KeyCode::Enter);
        press(&mut view, &mut state, KEYWORD_DRAFT, &keys);
        assert_eq!(
            state.data().discover.dataset_manager.keyword_flags,
            vec!["Indemnity".to_string()]
        );
        assert!(view.keyword_draft.value.is_empty(), "draft cleared");

        press(&mut view, &mut state, KEYWORD_DRAFT, &keys);
        assert_eq!(state.data().discover.dataset_manager.keyword_flags.len(), 1);
        assert_eq!(view.warning.as_deref(), Some("Keyword already added"));
    }

    #[test]
    fn keyword_list_delete_removes_selected() {
        let mut view = DiscoverView::default();
        let mut state = WizardState::new();
        for k in ["a", "b", "c"] {
            let mut keys = chars(k);
            keys.push(KeyCode::Enter);
            press(&mut view, &mut state, KEYWORD_DRAFT, &keys);
        }
        press(
            &mut view,
            &mut state,
            KEYWORDS,
            &[KeyCode::Down, KeyCode::Delete],
        );
        assert_eq!(
            state.data().discover.dataset_manager.keyword_flags,
            vec!["a".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn attribute_draft_uses_selected_type() {
        let mut view = DiscoverView::default();
        let mut state = WizardState::new();
        press(&mut view, &mut state, ATTR_NAME, &chars("Annual Fee"));
        press(&mut view, &mut state, ATTR_TYPE, &[KeyCode::Right]);
        press(&mut view, &mut state, ATTR_DESCRIPTION, &[KeyCode::Enter]);

        let attrs = &state.data().discover.dataset_manager.attributes;
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs[0].name, "Annual Fee");
        assert_eq!(attrs[0].attribute_type, AttributeType::default().next());
        assert!(view.attribute_name.value.is_empty());
    }

    #[test]
    fn blank_attribute_name_shows_warning() {
        let mut view = DiscoverView::default();
        let mut state = WizardState::new();
        press(&mut view, &mut state, ATTR_NAME, &[KeyCode::Enter]);
        assert!(state.data().discover.dataset_manager.attributes.is_empty());
        assert_eq!(view.warning.as_deref(), Some("Attribute name required"));
    }

    #[test]
    fn enum_fields_cycle_from_unset() {
        let mut view = DiscoverView::default();
        let mut state = WizardState::new();
        press(&mut view, &mut state, CATEGORY, &[KeyCode::Right]);
        press(&mut view, &mut state, SOURCE, &[KeyCode::Char(' ')]);
        press(&mut view, &mut state, CONFIDENTIALITY, &[KeyCode::Enter]);
        let d = &state.data().discover;
        assert!(d.business_category.is_some());
        assert!(d.ingestion_source.is_some());
        assert!(d.confidentiality_level.is_some());
    }

    #[test]
    fn bad_dictionary_path_leaves_data_untouched() {
        let tmp = tempfile::tempdir().unwrap();
        let bad = tmp.path().join("terms.pdf");
        std::fs::write(&bad, b"x").unwrap();

        let mut view = DiscoverView::default();
        let mut state = WizardState::new();
        let before = state.clone();
        let mut keys = chars(&bad.to_string_lossy());
        keys.push(KeyCode::Enter);
        press(&mut view, &mut state, DICTIONARY, &keys);

        assert_eq!(state, before);
        assert!(view.warning.is_some());
    }

    #[test]
    fn dictionary_load_and_clear() {
        let tmp = tempfile::tempdir().unwrap();
        let good = tmp.path().join("terms.json");
        std::fs::write(&good, b"[]").unwrap();

        let mut view = DiscoverView::default();
        let mut state = WizardState::new();
        let mut keys = chars(&good.to_string_lossy());
        keys.push(KeyCode::Enter);
        press(&mut view, &mut state, DICTIONARY, &keys);
        let handle = state
            .data()
            .discover
            .dataset_manager
            .custom_dictionary
            .clone()
            .unwrap();
        assert_eq!(handle.name, "terms.json");

        press(&mut view, &mut state, DICTIONARY, &[KeyCode::Delete]);
        assert!(state.data().discover.dataset_manager.custom_dictionary.is_none());
    }
}
