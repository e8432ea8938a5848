use std::fmt;

/// Text shown to the user, either produced at runtime or a fixed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiText {
    Dynamic(String),
    Static(&'static str),
}

impl UiText {
    pub fn as_str(&self) -> &str {
        match self {
            UiText::Dynamic(text) => text,
            UiText::Static(text) => text,
        }
    }
}

impl fmt::Display for UiText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for UiText {
    fn from(text: String) -> Self {
        UiText::Dynamic(text)
    }
}

impl From<&'static str> for UiText {
    fn from(text: &'static str) -> Self {
        UiText::Static(text)
    }
}
