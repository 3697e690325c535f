//! Identifier quoting.

/// Wraps identifiers in a dialect's quote characters.
///
/// Embedded quote characters are not escaped; callers must supply
/// identifiers that do not contain the dialect's quote characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierQuoter {
    open: char,
    close: char,
}

impl IdentifierQuoter {
    /// Creates a quoter from an opening and closing quote character.
    #[must_use]
    pub const fn new(open: char, close: char) -> Self {
        Self { open, close }
    }

    /// Quotes a single identifier.
    #[must_use]
    pub fn quote(&self, identifier: &str) -> String {
        let mut quoted = String::with_capacity(identifier.len() + 2);
        quoted.push(self.open);
        quoted.push_str(identifier);
        quoted.push(self.close);
        quoted
    }

    /// Quotes each part of a qualified name and joins them with `.`.
    #[must_use]
    pub fn quote_qualified(&self, parts: &[&str]) -> String {
        parts
            .iter()
            .map(|part| self.quote(part))
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl Default for IdentifierQuoter {
    fn default() -> Self {
        Self::new('"', '"')
    }
}
