use std::collections::HashMap;

/// Read-only table of known aliases: a scraped roster name mapped to the
/// name the directory lists the person under.
///
/// Keys are compared trimmed and case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct NameMappings {
    aliases: HashMap<String, String>,
}

impl NameMappings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alias(mut self, scraped: &str, canonical: &str) -> Self {
        self.aliases
            .insert(Self::key(scraped), canonical.trim().to_string());
        self
    }

    /// Canonical name for `raw_name`, or `raw_name` itself when no alias exists.
    pub fn apply<'a>(&'a self, raw_name: &'a str) -> &'a str {
        self.aliases
            .get(&Self::key(raw_name))
            .map(String::as_str)
            .unwrap_or(raw_name)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    fn key(name: &str) -> String {
        name.trim().to_lowercase()
    }
}

impl FromIterator<(String, String)> for NameMappings {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |mappings, (scraped, canonical)| {
                mappings.with_alias(&scraped, &canonical)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_lookup_ignores_case_and_padding() {
        let mappings = NameMappings::new().with_alias("Bob Smith", "Robert Smith");
        assert_eq!(mappings.apply("  bob SMITH "), "Robert Smith");
    }

    #[test]
    fn test_unknown_name_passes_through() {
        let mappings = NameMappings::new().with_alias("Bob Smith", "Robert Smith");
        assert_eq!(mappings.apply("Jane Doe"), "Jane Doe");
    }

    #[test]
    fn test_collect_from_pairs() {
        let mappings: NameMappings = vec![
            ("A B".to_string(), "Alpha Beta".to_string()),
            ("C D".to_string(), "Charlie Delta".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(mappings.len(), 2);
        assert_eq!(mappings.apply("c d"), "Charlie Delta");
    }
}
