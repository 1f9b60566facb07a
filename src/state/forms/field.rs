//! Controlled form fields and their input surfaces

/// Maximum length of a date input's text (`YYYY-MM-DD`)
const DATE_INPUT_LEN: usize = 10;

/// Kind of input surface a field is rendered with.
///
/// The kind only filters what the input surface proposes from keystrokes;
/// the form itself accepts any text it is handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    /// Number input: digits, sign, decimal point and exponent
    Amount,
    /// Date input: digits and dashes, `YYYY-MM-DD`
    Date,
}

impl InputKind {
    /// Whether the input surface lets `c` through when appended to `current`
    pub fn accepts(&self, c: char, current: &str) -> bool {
        match self {
            InputKind::Text => !c.is_control(),
            InputKind::Amount => c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'),
            InputKind::Date => {
                (c.is_ascii_digit() || c == '-') && current.chars().count() < DATE_INPUT_LEN
            }
        }
    }

    /// Placeholder shown while the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            InputKind::Text => "",
            InputKind::Amount => "0.00",
            InputKind::Date => "YYYY-MM-DD",
        }
    }
}

/// A single controlled field: the displayed text is always `value`
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    value: String,
}

impl FormField {
    pub fn new(name: &'static str, label: &'static str, kind: InputKind) -> Self {
        Self {
            name,
            label,
            kind,
            value: String::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the value. Only the owning form writes its fields.
    pub(super) fn set_value(&mut self, value: String) {
        self.value = value;
    }

    pub(super) fn clear(&mut self) {
        self.value.clear();
    }

    /// The text the input surface would deliver after typing `c`,
    /// or `None` if the surface swallows the keystroke
    pub fn proposed_with_char(&self, c: char) -> Option<String> {
        if !self.kind.accepts(c, &self.value) {
            return None;
        }
        let mut next = self.value.clone();
        next.push(c);
        Some(next)
    }

    /// The text the input surface would deliver after a backspace
    pub fn proposed_with_backspace(&self) -> String {
        let mut next = self.value.clone();
        next.pop();
        next
    }
}
