use crate::domain::record::FieldValue;

/// Character count of the value's rendering.
pub fn rendered_length(value: &FieldValue) -> usize {
    value.render().chars().count()
}

/// True when the rendered value fits within `max_length` characters.
pub fn length_ok(max_length: usize, value: &FieldValue) -> bool {
    rendered_length(value) <= max_length
}
