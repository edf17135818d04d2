//! Registry resolving logical types to their converters.

use std::sync::Arc;

use recwire_core::LogicalType;

use crate::{
    converter::Converter,
    decimal::DecimalConverter,
    passthrough::Passthrough,
    temporal::{DateConverter, TimestampMillisConverter},
};

/// Maps a field's logical annotation to the [`Converter`] that handles it.
///
/// Converter instances are constructed once and shared; cloning a registry
/// only clones handles. Configuration is copy-on-write: [`with_enabled`]
/// returns a reconfigured registry and never mutates in place, so two codecs
/// with different settings can run concurrently on the same converter set.
///
/// [`with_enabled`]: Registry::with_enabled
#[derive(Debug, Clone)]
pub struct Registry {
    enabled: bool,
    decimal: Arc<DecimalConverter>,
    date: Arc<DateConverter>,
    timestamp: Arc<TimestampMillisConverter>,
    passthrough: Arc<Passthrough>,
}

impl Default for Registry {
    /// Registry with logical-type conversion enabled.
    fn default() -> Self {
        Self::with_conversion(true)
    }
}

impl Registry {
    pub fn with_conversion(enabled: bool) -> Self {
        Self {
            enabled,
            decimal: Arc::new(DecimalConverter),
            date: Arc::new(DateConverter),
            timestamp: Arc::new(TimestampMillisConverter),
            passthrough: Arc::new(Passthrough::default()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Reconfigured copy sharing the same converter instances.
    pub fn with_enabled(&self, enabled: bool) -> Self {
        Self {
            enabled,
            ..self.clone()
        }
    }

    /// Converter for the given logical type, or the identity [`Passthrough`]
    /// when conversion is disabled.
    pub fn converter_for(&self, logical: &LogicalType) -> &dyn Converter {
        if !self.enabled {
            return self.passthrough.as_ref();
        }
        match logical {
            LogicalType::Decimal { .. } => self.decimal.as_ref(),
            LogicalType::Date => self.date.as_ref(),
            LogicalType::TimestampMillis => self.timestamp.as_ref(),
        }
    }
}
