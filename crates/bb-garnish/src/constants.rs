/// Database file used when nothing else is configured
pub const DEFAULT_DATABASE_PATH: &str = "garnish.db";

/// Environment variable naming the database file.
pub const DATABASE_ENV_VAR: &str = "GARNISH_DATABASE";

/// Environment variable naming the TOML configuration file.
pub const CONFIG_ENV_VAR: &str = "GARNISH_CONFIG";

/// Most terms accepted by a single search
pub const MAX_SEARCH_TERMS: usize = 16;

/// Joins search terms into a LIKE pattern
pub const SEARCH_WILDCARD: &str = "%";
