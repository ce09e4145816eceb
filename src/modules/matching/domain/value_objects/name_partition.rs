use std::fmt;

/// One candidate split of a full name into first and last components.
///
/// Either side may be empty: `{"", "smith"}` is the last-name-only reading.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamePartition {
    pub first_name: String,
    pub last_name: String,
}

impl NamePartition {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Split `parts` at `index`: tokens before it form the first name.
    pub fn split_at(parts: &[&str], index: usize) -> Self {
        Self::new(parts[..index].join(" "), parts[index..].join(" "))
    }
}

impl fmt::Display for NamePartition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{'{}', '{}'}}", self.first_name, self.last_name)
    }
}
