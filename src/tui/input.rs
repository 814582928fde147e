use crossterm::event::KeyCode;

/// Single-line text field. `cursor` counts characters, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TextInput {
    pub(crate) value: String,
    cursor: usize,
}

impl TextInput {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            cursor: value.chars().count(),
            value,
        }
    }

    pub(crate) fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    pub(crate) fn clear(&mut self) {
        self.set(String::new());
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Value with a `|` marker at the cursor, for the focused field.
    pub(crate) fn display(&self, focused: bool) -> String {
        if !focused {
            return self.value.clone();
        }
        let mut out = self.value.clone();
        out.insert(self.byte_index(self.cursor), '|');
        out
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Returns true when the value changed.
    pub(crate) fn handle_key(&mut self, code: KeyCode) -> bool {
        let len = self.value.chars().count();
        match code {
            KeyCode::Char(c) => {
                let idx = self.byte_index(self.cursor);
                self.value.insert(idx, c);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor -= 1;
                let idx = self.byte_index(self.cursor);
                self.value.remove(idx);
                true
            }
            KeyCode::Delete => {
                if self.cursor >= len {
                    return false;
                }
                let idx = self.byte_index(self.cursor);
                self.value.remove(idx);
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(len);
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = len;
                false
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> TextInput {
        let mut t = TextInput::default();
        for c in s.chars() {
            t.handle_key(KeyCode::Char(c));
        }
        t
    }

    #[test]
    fn typing_and_backspace() {
        let mut t = typed("Q1 Audit");
        assert_eq!(t.value, "Q1 Audit");
        assert!(t.handle_key(KeyCode::Backspace));
        assert_eq!(t.value, "Q1 Audi");
    }

    #[test]
    fn cursor_moves_do_not_report_change() {
        let mut t = typed("ab");
        assert!(!t.handle_key(KeyCode::Left));
        assert!(!t.handle_key(KeyCode::Home));
        assert!(!t.handle_key(KeyCode::Backspace), "nothing before cursor");
        assert!(t.handle_key(KeyCode::Delete));
        assert_eq!(t.value, "b");
    }

    #[test]
    fn multibyte_input_is_safe() {
        let mut t = typed("déjà");
        t.handle_key(KeyCode::Left);
        t.handle_key(KeyCode::Char('x'));
        assert_eq!(t.value, "déjxà");
        assert_eq!(t.display(true), "déjx|à");
        t.handle_key(KeyCode::End);
        t.handle_key(KeyCode::Backspace);
        assert_eq!(t.value, "déjx");
    }
}
