//! Labeled text input with an inline error marker.

use askama::Template;

/// Kind of `<input>` to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    /// Masks the typed characters.
    Password,
}

impl InputKind {
    pub fn html_type(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Password => "password",
        }
    }
}

/// A label, an input reflecting `value`, and, when `error` is set, a warning
/// icon whose tooltip is the error message.
///
/// Stateless: the output depends only on the fields. Edits travel back to the
/// form under `name`.
///
/// # Example
///
/// ```rust,ignore
/// let html = LabeledInput::new("Password", "password", "")
///     .kind(InputKind::Password)
///     .error(Some("Password is required"))
///     .render()?;
/// ```
#[derive(Debug, Clone, Template)]
#[template(path = "components/labeled_input.html")]
pub struct LabeledInput<'a> {
    label: &'a str,
    name: &'a str,
    value: &'a str,
    kind: InputKind,
    error: Option<&'a str>,
}

impl<'a> LabeledInput<'a> {
    pub fn new(label: &'a str, name: &'a str, value: &'a str) -> Self {
        Self {
            label,
            name,
            value,
            kind: InputKind::default(),
            error: None,
        }
    }

    pub fn kind(self, kind: InputKind) -> Self {
        Self { kind, ..self }
    }

    /// Sets the message shown in the tooltip. An empty message means no error.
    pub fn error(self, error: Option<&'a str>) -> Self {
        Self {
            error: error.filter(|e| !e.is_empty()),
            ..self
        }
    }
}
