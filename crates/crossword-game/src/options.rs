use serde::{Deserialize, Serialize};

/// How clue input is checked before the grid is built.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Build whatever the input describes; conflicting cells are resolved
    /// last-write-wins, down answers over across answers.
    #[default]
    Lenient,
    /// Reject inconsistent input with an
    /// [`InputError`](crossword_core::InputError).
    Strict,
}

/// Host-supplied policy flags for a [`Crossword`](crate::Crossword).
///
/// Deserializing fills missing fields from [`CrosswordOptions::default`], so a
/// config file only needs the fields it changes.
///
/// # Examples
///
/// ```
/// use crossword_game::{CrosswordOptions, ValidationPolicy};
///
/// let options = CrosswordOptions::default()
///     .allow_mutation(false)
///     .validation(ValidationPolicy::Strict);
/// assert!(!options.allow_non_square);
/// assert!(!options.allow_mutation);
///
/// let parsed: CrosswordOptions = serde_json::from_str(r#"{ "validation": "strict" }"#).unwrap();
/// assert!(parsed.allow_mutation);
/// assert!(parsed.validation.is_strict());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrosswordOptions {
    /// Keep the grid at its natural bounding box instead of squaring it.
    pub allow_non_square: bool,
    /// Let keyboard character entry and deletion change guesses.
    pub allow_mutation: bool,
    /// How clue input is checked.
    pub validation: ValidationPolicy,
}

impl Default for CrosswordOptions {
    fn default() -> Self {
        Self {
            allow_non_square: false,
            allow_mutation: true,
            validation: ValidationPolicy::Lenient,
        }
    }
}

impl CrosswordOptions {
    /// Sets whether non-square grids are allowed.
    #[must_use]
    pub const fn allow_non_square(mut self, allow: bool) -> Self {
        self.allow_non_square = allow;
        self
    }

    /// Sets whether keyboard editing is allowed.
    #[must_use]
    pub const fn allow_mutation(mut self, allow: bool) -> Self {
        self.allow_mutation = allow;
        self
    }

    /// Sets the validation policy.
    #[must_use]
    pub const fn validation(mut self, validation: ValidationPolicy) -> Self {
        self.validation = validation;
        self
    }

    /// Returns `true` if switching from `self` to `other` changes the built grid.
    pub(crate) fn requires_rebuild(self, other: Self) -> bool {
        self.allow_non_square != other.allow_non_square || self.validation != other.validation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CrosswordOptions::default();
        assert!(!options.allow_non_square);
        assert!(options.allow_mutation);
        assert!(options.validation.is_lenient());

        let parsed: CrosswordOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_requires_rebuild() {
        let base = CrosswordOptions::default();
        assert!(!base.requires_rebuild(base.allow_mutation(false)));
        assert!(base.requires_rebuild(base.allow_non_square(true)));
        assert!(base.requires_rebuild(base.validation(ValidationPolicy::Strict)));
    }
}
