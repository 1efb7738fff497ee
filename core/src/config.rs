use serde::Deserialize;

use crate::errors::{ConfigError, TraceError};

pub const DEFAULT_ARGS_MAX_LENGTH: usize = 1024;
pub const DEFAULT_MAX_ITEMS: usize = 256;
pub const DEFAULT_MAX_CAUSES: usize = 64;
/// Smallest argument budget that still leaves room for an ellipsis.
pub const MIN_ARGS_MAX_LENGTH: usize = 3;

/// Immutable rendering options. Construct through [`TraceConfig::builder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceConfig {
    include_args: bool,
    include_complex_args: bool,
    args_max_length: Option<usize>,
    max_items: Option<usize>,
    max_causes: Option<usize>,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            include_args: false,
            include_complex_args: false,
            args_max_length: Some(DEFAULT_ARGS_MAX_LENGTH),
            max_items: Some(DEFAULT_MAX_ITEMS),
            max_causes: Some(DEFAULT_MAX_CAUSES),
        }
    }
}

impl TraceConfig {
    pub fn builder() -> TraceConfigBuilder {
        TraceConfigBuilder::default()
    }

    /// Start a builder from this snapshot, e.g. to apply overrides.
    pub fn to_builder(self) -> TraceConfigBuilder {
        TraceConfigBuilder { config: self }
    }

    pub fn include_args(&self) -> bool {
        self.include_args
    }

    /// Complex arguments only render while arguments are rendered at all.
    pub fn include_complex_args(&self) -> bool {
        self.include_args && self.include_complex_args
    }

    pub fn args_max_length(&self) -> Option<usize> {
        self.args_max_length
    }

    pub fn max_items(&self) -> Option<usize> {
        self.max_items
    }

    pub fn max_causes(&self) -> Option<usize> {
        self.max_causes
    }

    /// Load options from a JSON document. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, TraceError> {
        let file: ConfigFile = serde_json::from_str(json)?;
        Ok(file.into_config()?)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TraceConfigBuilder {
    config: TraceConfig,
}

impl TraceConfigBuilder {
    pub fn include_args(mut self, include: bool) -> Self {
        self.config.include_args = include;
        self
    }

    pub fn include_complex_args(mut self, include: bool) -> Self {
        self.config.include_complex_args = include;
        self
    }

    pub fn args_max_length(mut self, max: Option<usize>) -> Result<Self, ConfigError> {
        if let Some(value) = max
            && value < MIN_ARGS_MAX_LENGTH
        {
            return Err(ConfigError::ArgsMaxLengthTooSmall {
                value,
                min: MIN_ARGS_MAX_LENGTH,
            });
        }
        self.config.args_max_length = max;
        Ok(self)
    }

    pub fn max_items(mut self, max: Option<usize>) -> Self {
        self.config.max_items = max;
        self
    }

    pub fn max_causes(mut self, max: Option<usize>) -> Self {
        self.config.max_causes = max;
        self
    }

    /// Freeze the options. A requested `include_complex_args` is kept as asked
    /// and takes effect once `include_args` is enabled, e.g. by a later override.
    pub fn build(self) -> TraceConfig {
        self.config
    }
}

/// A count limit as written in config files and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Count(usize),
    Unlimited,
}

impl Limit {
    pub fn parse(option: &'static str, value: &str) -> Result<Self, ConfigError> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("unlimited") {
            return Ok(Limit::Unlimited);
        }
        trimmed
            .parse::<usize>()
            .map(Limit::Count)
            .map_err(|_| ConfigError::UnknownLimit {
                option,
                value: value.to_string(),
            })
    }
}

impl From<Limit> for Option<usize> {
    fn from(limit: Limit) -> Self {
        match limit {
            Limit::Count(n) => Some(n),
            Limit::Unlimited => None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawLimit {
    Count(usize),
    Keyword(String),
}

impl RawLimit {
    fn resolve(self, option: &'static str) -> Result<Option<usize>, ConfigError> {
        match self {
            RawLimit::Count(n) => Ok(Some(n)),
            RawLimit::Keyword(word) => Limit::parse(option, &word).map(Into::into),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ConfigFile {
    include_args: Option<bool>,
    include_complex_args: Option<bool>,
    args_max_length: Option<RawLimit>,
    max_items: Option<RawLimit>,
    max_causes: Option<RawLimit>,
}

impl ConfigFile {
    fn into_config(self) -> Result<TraceConfig, ConfigError> {
        let mut builder = TraceConfig::builder();
        if let Some(include) = self.include_args {
            builder = builder.include_args(include);
        }
        if let Some(include) = self.include_complex_args {
            builder = builder.include_complex_args(include);
        }
        if let Some(limit) = self.args_max_length {
            builder = builder.args_max_length(limit.resolve("argsMaxLength")?)?;
        }
        if let Some(limit) = self.max_items {
            builder = builder.max_items(limit.resolve("maxItems")?);
        }
        if let Some(limit) = self.max_causes {
            builder = builder.max_causes(limit.resolve("maxCauses")?);
        }
        Ok(builder.build())
    }
}
