//! Configuration for runtime-checked builds.

/// Options for [`build_with`](crate::RightOperand::build_with).
///
/// The typed `build` fixes the argument count at compile time and never
/// needs these. They only matter when values arrive as a runtime list.
///
/// # Example
///
/// ```rust
/// use cel_builder::BuildConfig;
///
/// let config = BuildConfig::builder()
///     .with_strict_arity(true)
///     .build();
/// assert!(config.strict_arity);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildConfig {
    /// Reject surplus values instead of ignoring them.
    pub strict_arity: bool,
}

impl BuildConfig {
    /// Creates a new builder for BuildConfig.
    pub fn builder() -> BuildConfigBuilder {
        BuildConfigBuilder::default()
    }

    /// Lenient configuration: surplus values are ignored.
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Strict configuration: surplus values are an error.
    pub fn strict() -> Self {
        Self { strict_arity: true }
    }
}

/// Builder for BuildConfig.
#[derive(Debug, Clone, Default)]
pub struct BuildConfigBuilder {
    strict_arity: bool,
}

impl BuildConfigBuilder {
    /// Enables or disables strict arity checking.
    pub fn with_strict_arity(mut self, strict: bool) -> Self {
        self.strict_arity = strict;
        self
    }

    /// Builds the BuildConfig.
    pub fn build(self) -> BuildConfig {
        BuildConfig {
            strict_arity: self.strict_arity,
        }
    }
}
