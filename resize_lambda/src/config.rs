pub(crate) const DEFAULT_BUCKET_NAME: &str = "two-point-five-lambda";
pub(crate) const DEFAULT_SOURCE_PREFIX: &str = "original-images/";
pub(crate) const DEFAULT_DESTINATION_PREFIX: &str = "resized-images/";
pub(crate) const MAX_WIDTH: u32 = 300;
pub(crate) const MAX_HEIGHT: u32 = 300;

/// Where the handler reads from and writes to, and the box resized images must fit in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResizeConfig {
    pub bucket: String,
    pub source_prefix: String,
    pub destination_prefix: String,
    pub max_width: u32,
    pub max_height: u32,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            bucket: DEFAULT_BUCKET_NAME.to_string(),
            source_prefix: DEFAULT_SOURCE_PREFIX.to_string(),
            destination_prefix: DEFAULT_DESTINATION_PREFIX.to_string(),
            max_width: MAX_WIDTH,
            max_height: MAX_HEIGHT,
        }
    }
}

impl ResizeConfig {
    /// Reads `BUCKET_NAME`, `SOURCE_PREFIX` and `DESTINATION_PREFIX` from the
    /// function's environment, falling back to the defaults when unset.
    pub(crate) fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();
        Self {
            bucket: var("BUCKET_NAME").unwrap_or(defaults.bucket),
            source_prefix: var("SOURCE_PREFIX").unwrap_or(defaults.source_prefix),
            destination_prefix: var("DESTINATION_PREFIX").unwrap_or(defaults.destination_prefix),
            ..defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = ResizeConfig::from_lookup(|_| None);
        assert_eq!(config, ResizeConfig::default());
        assert_eq!(config.bucket, "two-point-five-lambda");
        assert_eq!(config.source_prefix, "original-images/");
        assert_eq!(config.destination_prefix, "resized-images/");
        assert_eq!((config.max_width, config.max_height), (300, 300));
    }

    #[test]
    fn test_environment_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("BUCKET_NAME", "my-images"),
            ("SOURCE_PREFIX", "uploads/"),
            ("DESTINATION_PREFIX", ""),
        ]);
        let config = ResizeConfig::from_lookup(|name| env.get(name).map(|v| v.to_string()));
        assert_eq!(config.bucket, "my-images");
        assert_eq!(config.source_prefix, "uploads/");
        // blank values keep the default
        assert_eq!(config.destination_prefix, "resized-images/");
        assert_eq!((config.max_width, config.max_height), (300, 300));
    }
}
