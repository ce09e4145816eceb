use std::time::Duration;

/// Configuration for name matching and resolution
///
/// Externalizes the weights, thresholds and word lists the matcher uses so
/// they can be tuned and tested without touching the algorithms.
#[derive(Debug, Clone)]
pub struct MatchingConfig {
    // Fuzzy matching configuration
    /// Weight for Jaro-Winkler similarity (0.0 to 1.0)
    pub jaro_winkler_weight: f64,

    /// Weight for Levenshtein similarity (0.0 to 1.0)
    pub levenshtein_weight: f64,

    /// Threshold applied when either compared string is shorter than `short_name_length`
    pub strict_threshold: f64,

    /// Threshold applied to everything else
    pub relaxed_threshold: f64,

    /// Strings shorter than this use `strict_threshold`
    pub short_name_length: usize,

    // Name cleaning rules
    /// Placeholder phrases removed from scraped names (matched case-insensitively)
    pub placeholders: Vec<String>,

    /// Lowercase honorifics that may precede a surname ("dr smith")
    pub title_prefixes: Vec<String>,

    // Projection
    /// Maximum reviews copied into a profile; `None` keeps all of them
    pub max_reviews: Option<usize>,

    /// Directory id is appended to this to build the profile link
    pub profile_link_base: String,

    // Resolution limits
    /// Upper bound on a single directory search call
    pub search_timeout: Duration,

    /// Number of resolved names kept in the result cache
    pub cache_capacity: usize,

    /// Maximum names resolved at once by `resolve_many`
    pub max_concurrent_resolutions: usize,
}

impl MatchingConfig {
    /// Creates a new configuration with production defaults
    pub fn new() -> Self {
        Self {
            // Jaro-Winkler is better for names, so weight it higher
            jaro_winkler_weight: 0.7,
            levenshtein_weight: 0.3,

            strict_threshold: 0.95,
            relaxed_threshold: 0.85,
            short_name_length: 4,

            placeholders: vec!["to be announced".to_string(), "tba".to_string()],
            title_prefixes: vec!["dr".to_string()],

            max_reviews: None,
            profile_link_base: "https://www.ratemyprofessors.com/ShowRatings.jsp?tid="
                .to_string(),

            search_timeout: Duration::from_secs(10),
            cache_capacity: 100,
            max_concurrent_resolutions: 4,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), String> {
        // Validate weights sum to ~1.0
        let weight_sum = self.jaro_winkler_weight + self.levenshtein_weight;
        if (weight_sum - 1.0).abs() > 0.01 {
            return Err(format!(
                "Fuzzy matching weights must sum to 1.0, got {}",
                weight_sum
            ));
        }

        if self.jaro_winkler_weight < 0.0 || self.levenshtein_weight < 0.0 {
            return Err("Fuzzy matching weights must be non-negative".to_string());
        }

        for (name, value) in [
            ("strict_threshold", self.strict_threshold),
            ("relaxed_threshold", self.relaxed_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be within [0, 1], got {}", name, value));
            }
        }

        if self.strict_threshold < self.relaxed_threshold {
            return Err(format!(
                "Strict threshold ({}) cannot be below relaxed threshold ({})",
                self.strict_threshold, self.relaxed_threshold
            ));
        }

        if self.cache_capacity == 0 {
            return Err("cache_capacity must be > 0".to_string());
        }

        if self.max_concurrent_resolutions == 0 {
            return Err("max_concurrent_resolutions must be > 0".to_string());
        }

        if self.search_timeout.is_zero() {
            return Err("search_timeout must be > 0".to_string());
        }

        Ok(())
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for MatchingConfig to make test setup easier
#[derive(Default)]
pub struct MatchingConfigBuilder {
    config: MatchingConfig,
}

impl MatchingConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: MatchingConfig::new(),
        }
    }

    pub fn jaro_winkler_weight(mut self, weight: f64) -> Self {
        self.config.jaro_winkler_weight = weight;
        self
    }

    pub fn levenshtein_weight(mut self, weight: f64) -> Self {
        self.config.levenshtein_weight = weight;
        self
    }

    pub fn thresholds(mut self, strict: f64, relaxed: f64) -> Self {
        self.config.strict_threshold = strict;
        self.config.relaxed_threshold = relaxed;
        self
    }

    pub fn placeholders(mut self, placeholders: Vec<String>) -> Self {
        self.config.placeholders = placeholders;
        self
    }

    pub fn title_prefixes(mut self, titles: Vec<String>) -> Self {
        self.config.title_prefixes = titles;
        self
    }

    pub fn max_reviews(mut self, max: usize) -> Self {
        self.config.max_reviews = Some(max);
        self
    }

    pub fn search_timeout(mut self, timeout: Duration) -> Self {
        self.config.search_timeout = timeout;
        self
    }

    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.config.cache_capacity = capacity;
        self
    }

    pub fn max_concurrent_resolutions(mut self, max: usize) -> Self {
        self.config.max_concurrent_resolutions = max;
        self
    }

    pub fn build(self) -> Result<MatchingConfig, String> {
        self.config.validate()?;
        Ok(self.config)
    }
}
