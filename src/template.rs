//! Path template substitution.

/// The literal placeholder replaced with the project name.
pub const NAME_PLACEHOLDER: &str = "{NAME}";

/// Replaces every `{NAME}` occurrence in `template` with `name`.
/// Templates without the placeholder pass through unchanged.
pub fn substitute_name(template: &str, name: &str) -> String {
    template.replace(NAME_PLACEHOLDER, name)
}

/// Optional variant: an absent template stays absent, it is never
/// promoted to an empty string.
pub fn substitute(template: Option<&str>, name: &str) -> Option<String> {
    template.map(|t| substitute_name(t, name))
}
