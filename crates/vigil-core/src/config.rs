//! Per-element exposure configuration

use std::fmt;
use std::sync::Arc;

use crate::{CrossingEvent, ExposureResult, ObserverId};

/// Minimum intersection ratio that counts as exposed, by default
pub const DEFAULT_RATIO: f64 = 0.75;

/// Callback invoked at finalization
///
/// Receives the finalized result, the raw crossing event that closed the
/// exposure, and the identity of the shared observer. Returning `true`
/// suppresses the engine's default report action.
pub type ExposureCallback =
    Arc<dyn Fn(&ExposureResult, &CrossingEvent, ObserverId) -> bool + Send + Sync>;

fn noop_callback() -> ExposureCallback {
    Arc::new(|_, _, _| false)
}

/// Configuration attached one-to-one with a registered element
#[derive(Clone)]
pub struct ExposureConfig {
    /// Minimum intersection ratio that counts as exposed, in [0, 1]
    ///
    /// Out-of-range values are accepted as-is and simply never or always
    /// match.
    pub ratio: f64,
    /// Unregister the element after its first finalized exposure
    pub once: bool,
    /// Finalization callback
    pub callback: ExposureCallback,
}

impl Default for ExposureConfig {
    fn default() -> Self {
        ExposureConfig {
            ratio: DEFAULT_RATIO,
            once: true,
            callback: noop_callback(),
        }
    }
}

impl ExposureConfig {
    pub fn new() -> Self {
        ExposureConfig::default()
    }

    /// Set the exposure ratio threshold
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Set whether the element is unregistered after its first result
    pub fn with_once(mut self, once: bool) -> Self {
        self.once = once;
        self
    }

    /// Set the finalization callback
    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&ExposureResult, &CrossingEvent, ObserverId) -> bool + Send + Sync + 'static,
    {
        self.callback = Arc::new(callback);
        self
    }
}

impl fmt::Debug for ExposureConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExposureConfig")
            .field("ratio", &self.ratio)
            .field("once", &self.once)
            .finish_non_exhaustive()
    }
}

/// Registration argument
///
/// The caller states explicitly whether it is registering a bare callback
/// (wrapped over defaults) or a full configuration.
#[derive(Clone)]
pub enum RegisterSpec {
    /// Bare callback, all other fields defaulted
    Callback(ExposureCallback),
    /// Full configuration
    Config(ExposureConfig),
}

impl RegisterSpec {
    /// Wrap a bare callback over the default configuration
    pub fn callback<F>(callback: F) -> Self
    where
        F: Fn(&ExposureResult, &CrossingEvent, ObserverId) -> bool + Send + Sync + 'static,
    {
        RegisterSpec::Callback(Arc::new(callback))
    }

    /// Normalize into a full configuration
    pub fn into_config(self) -> ExposureConfig {
        match self {
            RegisterSpec::Callback(callback) => ExposureConfig {
                callback,
                ..ExposureConfig::default()
            },
            RegisterSpec::Config(config) => config,
        }
    }
}

impl From<ExposureConfig> for RegisterSpec {
    fn from(config: ExposureConfig) -> Self {
        RegisterSpec::Config(config)
    }
}

impl fmt::Debug for RegisterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterSpec::Callback(_) => f.write_str("RegisterSpec::Callback"),
            RegisterSpec::Config(config) => f.debug_tuple("RegisterSpec::Config").field(config).finish(),
        }
    }
}
