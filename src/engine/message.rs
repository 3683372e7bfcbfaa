use crate::domain::catalog::ErrorCodeEntry;
use crate::domain::schema::DataType;

/// Placeholder replaced with the sub-section key.
pub const SUB_SECTION_TOKEN: &str = "LXY";
/// Placeholder replaced with the section key.
pub const SECTION_TOKEN: &str = "LX";

/// Ordered token substitutions applied in a single pass over a template.
///
/// At each position the longest matching token wins, so a token that is a
/// prefix of another (`LX` of `LXY`) never splits it, and substituted values
/// are never scanned again.
#[derive(Debug, Clone, Default)]
pub struct Substitutions {
    pairs: Vec<(String, String)>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a token. Empty tokens are ignored.
    pub fn with(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        let token = token.into();
        if !token.is_empty() {
            self.pairs.push((token, value.into()));
            self.pairs
                .sort_by(|left, right| right.0.len().cmp(&left.0.len()));
        }
        self
    }

    pub fn apply(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        'scan: while let Some(ch) = rest.chars().next() {
            for (token, value) in &self.pairs {
                if let Some(tail) = rest.strip_prefix(token.as_str()) {
                    out.push_str(value);
                    rest = tail;
                    continue 'scan;
                }
            }
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
        out
    }
}

/// Renders the newline-terminated summary sentence for one validated field.
pub fn build_message(
    entry: &ErrorCodeEntry,
    section: &str,
    sub_section: &str,
    data_type: DataType,
    max_length: usize,
) -> String {
    let mut substitutions = Substitutions::new()
        .with(SUB_SECTION_TOKEN, sub_section)
        .with(SECTION_TOKEN, section);
    if entry.code.uses_format_slots() {
        substitutions = substitutions
            .with("{data_type}", data_type.as_str())
            .with("{max_length}", max_length.to_string());
    }

    let mut message = substitutions.apply(&entry.message_template);
    message.push('\n');
    message
}
