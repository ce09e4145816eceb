use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::config::MatchingConfig;
use crate::modules::matching::domain::value_objects::NamePartition;
use crate::shared::errors::{AppError, AppResult};

/// A single initial followed by a period: "J." -> "J"
static INITIAL_PERIOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z])\.").expect("static regex"));

/// Transformation that can be applied to a scraped name
///
/// Each transformation is composable and testable in isolation.
pub trait NameTransformation: Send + Sync {
    fn transform(&self, name: &str) -> String;
    fn name(&self) -> &'static str;
}

/// Removes placeholder phrases such as "TBA" wherever they occur, including
/// inside a longer token ("JohnTBA" -> "John")
#[derive(Debug, Clone)]
pub struct RemovePlaceholdersTransform {
    pattern: Option<Regex>,
}

impl RemovePlaceholdersTransform {
    pub fn new(placeholders: &[String]) -> AppResult<Self> {
        let mut phrases: Vec<&String> = placeholders.iter().filter(|p| !p.is_empty()).collect();
        if phrases.is_empty() {
            return Ok(Self { pattern: None });
        }

        // Longest first so "to be announced" wins over any shorter overlap
        phrases.sort_by_key(|p| std::cmp::Reverse(p.len()));
        let alternation = phrases
            .iter()
            .map(|p| regex::escape(p))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = Regex::new(&format!(r"(?i)(?:{})", alternation))
            .map_err(|e| AppError::ConfigError(format!("Invalid placeholder list: {}", e)))?;

        Ok(Self {
            pattern: Some(pattern),
        })
    }
}

impl NameTransformation for RemovePlaceholdersTransform {
    fn transform(&self, name: &str) -> String {
        match &self.pattern {
            Some(pattern) => pattern.replace_all(name, "").into_owned(),
            None => name.to_string(),
        }
    }

    fn name(&self) -> &'static str {
        "RemovePlaceholders"
    }
}

/// Drops the period after a single uppercase initial
#[derive(Debug, Clone)]
pub struct CollapseInitialsTransform;

impl NameTransformation for CollapseInitialsTransform {
    fn transform(&self, name: &str) -> String {
        INITIAL_PERIOD.replace_all(name, "$1").into_owned()
    }

    fn name(&self) -> &'static str {
        "CollapseInitials"
    }
}

/// Removes punctuation noise, keeping letters, digits, whitespace, hyphens
/// and apostrophes
#[derive(Debug, Clone)]
pub struct RemovePunctuationTransform;

impl NameTransformation for RemovePunctuationTransform {
    fn transform(&self, name: &str) -> String {
        name.chars()
            .map(|c| {
                if c.is_alphanumeric() || c.is_whitespace() || c == '-' || c == '\'' {
                    c
                } else {
                    ' '
                }
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "RemovePunctuation"
    }
}

/// Turns hyphens into spaces so "Smith-Jones" becomes two tokens
#[derive(Debug, Clone)]
pub struct SplitHyphensTransform;

impl NameTransformation for SplitHyphensTransform {
    fn transform(&self, name: &str) -> String {
        name.replace('-', " ")
    }

    fn name(&self) -> &'static str {
        "SplitHyphens"
    }
}

/// Normalizes whitespace (collapses multiple spaces, trims) and strips
/// hyphens dangling at either end of a token ("Staff-" -> "Staff")
#[derive(Debug, Clone)]
pub struct NormalizeWhitespaceTransform;

impl NameTransformation for NormalizeWhitespaceTransform {
    fn transform(&self, name: &str) -> String {
        name.split_whitespace()
            .map(|token| token.trim_matches('-'))
            .filter(|token| !token.is_empty())
            .collect::<Vec<&str>>()
            .join(" ")
    }

    fn name(&self) -> &'static str {
        "NormalizeWhitespace"
    }
}

/// Empties a name that is nothing but honorifics ("Dr")
#[derive(Debug, Clone)]
pub struct DropTitleOnlyTransform {
    titles: HashSet<String>,
}

impl DropTitleOnlyTransform {
    pub fn new(titles: &[String]) -> Self {
        Self {
            titles: titles.iter().map(|t| t.to_lowercase()).collect(),
        }
    }
}

impl NameTransformation for DropTitleOnlyTransform {
    fn transform(&self, name: &str) -> String {
        let only_titles = name
            .split_whitespace()
            .all(|word| self.titles.contains(&word.to_lowercase()));
        if only_titles {
            String::new()
        } else {
            name.to_string()
        }
    }

    fn name(&self) -> &'static str {
        "DropTitleOnly"
    }
}

/// Cleans scraped names and splits them into first/last partitions
///
/// Holds two pipelines: one for whole names, which keeps hyphens because
/// their placement separates surname parts, and one for single name parts,
/// which splits on them.
pub struct NameNormalizer {
    full_name: Vec<Box<dyn NameTransformation>>,
    name_part: Vec<Box<dyn NameTransformation>>,
}

impl NameNormalizer {
    pub fn new(config: &MatchingConfig) -> AppResult<Self> {
        let full_name: Vec<Box<dyn NameTransformation>> = vec![
            Box::new(RemovePlaceholdersTransform::new(&config.placeholders)?),
            Box::new(CollapseInitialsTransform),
            Box::new(RemovePunctuationTransform),
            Box::new(NormalizeWhitespaceTransform),
            Box::new(DropTitleOnlyTransform::new(&config.title_prefixes)),
        ];
        let name_part: Vec<Box<dyn NameTransformation>> = vec![
            Box::new(RemovePlaceholdersTransform::new(&config.placeholders)?),
            Box::new(CollapseInitialsTransform),
            Box::new(RemovePunctuationTransform),
            Box::new(SplitHyphensTransform),
            Box::new(NormalizeWhitespaceTransform),
        ];

        Ok(Self {
            full_name,
            name_part,
        })
    }

    /// Clean a whole scraped name, preserving hyphens
    pub fn clean(&self, raw: &str) -> String {
        Self::run(&self.full_name, raw)
    }

    /// Clean one name component, splitting hyphenated parts into words
    pub fn clean_part(&self, raw: &str) -> String {
        Self::run(&self.name_part, raw)
    }

    /// Names of the whole-name transformations in application order
    pub fn pipeline_names(&self) -> Vec<&'static str> {
        self.full_name.iter().map(|t| t.name()).collect()
    }

    fn run(pipeline: &[Box<dyn NameTransformation>], raw: &str) -> String {
        pipeline
            .iter()
            .fold(raw.to_string(), |name, step| step.transform(&name))
    }

    /// Every plausible (first, last) reading of a cleaned name, most preferred first.
    ///
    /// For tokens `p[0..n]` this yields each split point from "no first name"
    /// to "no last name", then the first+last form without middle tokens when
    /// there are more than two, or the swapped form when there are exactly two.
    pub fn generate_partitions(cleaned: &str) -> Vec<NamePartition> {
        let parts: Vec<&str> = cleaned.split_whitespace().collect();
        let n = parts.len();
        if n == 0 {
            return Vec::new();
        }

        let mut partitions: Vec<NamePartition> =
            (0..=n).map(|i| NamePartition::split_at(&parts, i)).collect();

        if n > 2 {
            partitions.push(NamePartition::new(parts[0], parts[n - 1]));
        } else if n == 2 {
            partitions.push(NamePartition::new(parts[1], parts[0]));
        }

        partitions
    }
}
