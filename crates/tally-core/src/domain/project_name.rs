//! Project names and the substitution rules used to rename a template.

use std::fmt;

use serde::Serialize;

use crate::domain::error::DomainError;

/// A validated project identifier (`^[A-Za-z_][A-Za-z0-9_]*$`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate `name` as a project identifier.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidProjectName`] describing the first violation.
    pub fn parse(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let invalid = |reason: String| DomainError::InvalidProjectName {
            name: name.clone(),
            reason,
        };

        let mut chars = name.char_indices();
        match chars.next() {
            None => return Err(invalid("name cannot be empty".into())),
            Some((_, first)) if !(first.is_ascii_alphabetic() || first == '_') => {
                return Err(invalid(format!(
                    "must start with a letter or underscore, found '{first}'"
                )));
            }
            Some(_) => {}
        }
        if let Some((index, bad)) = chars.find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '_'))
        {
            return Err(invalid(format!(
                "invalid character '{bad}' at position {index}"
            )));
        }

        Ok(Self(name))
    }

    /// The name as given (snake form).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name with every `_` replaced by `-`.
    pub fn hyphenated(&self) -> String {
        hyphenate(&self.0)
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Replace every `_` with `-`.
pub fn hyphenate(name: &str) -> String {
    name.replace('_', "-")
}

/// One ordered `from -> to` substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

impl Replacement {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Build the substitution rules that rename `old_name` to `new_name`.
///
/// The order is significant: rules are applied one after another to the
/// already rewritten content.
pub fn replacements(old_name: &str, new_name: &str) -> Vec<Replacement> {
    let old_hyphen = hyphenate(old_name);
    let new_hyphen = hyphenate(new_name);

    vec![
        // bare names
        Replacement::new(old_name, new_name),
        Replacement::new(&old_hyphen, &new_hyphen),
        // quoted
        Replacement::new(format!("\"{old_name}\""), format!("\"{new_name}\"")),
        Replacement::new(format!("'{old_name}'"), format!("'{new_name}'")),
        Replacement::new(format!("\"{old_hyphen}\""), format!("\"{new_hyphen}\"")),
        Replacement::new(format!("'{old_hyphen}'"), format!("'{new_hyphen}'")),
        // imports and paths
        Replacement::new(format!("use {old_name}"), format!("use {new_name}")),
        Replacement::new(format!("{old_name}::"), format!("{new_name}::")),
        // markdown code spans
        Replacement::new(format!("`{old_name}`"), format!("`{new_name}`")),
        Replacement::new(format!("`{old_hyphen}`"), format!("`{new_hyphen}`")),
    ]
}

/// Apply `rules` in order and return the rewritten content together with the
/// total number of occurrences replaced.
pub fn apply_replacements(content: &str, rules: &[Replacement]) -> (String, usize) {
    let mut content = content.to_owned();
    let mut total = 0;

    for rule in rules {
        if rule.from.is_empty() {
            continue;
        }
        let count = content.matches(rule.from.as_str()).count();
        if count > 0 {
            content = content.replace(rule.from.as_str(), &rule.to);
            total += count;
        }
    }

    (content, total)
}
