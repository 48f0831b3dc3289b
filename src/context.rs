//! Service context that bundles all port trait objects.

use crate::adapters::disabled::DisabledWriter;
use crate::adapters::png::PngWriter;
use crate::ports::IconWriter;

/// Bundles all port trait objects into a single context.
pub struct ServiceContext {
    /// Icon writer port.
    pub writer: Box<dyn IconWriter>,
}

impl ServiceContext {
    /// Context that writes real PNG files.
    #[must_use]
    pub fn live() -> Self {
        Self { writer: Box::new(PngWriter) }
    }

    /// Context whose encoder is missing.
    #[must_use]
    pub fn disabled() -> Self {
        Self { writer: Box::new(DisabledWriter) }
    }

    /// Pick the context from the environment.
    ///
    /// `ICONGEN_DISABLE_PNG=1` (or `true`) selects the disabled writer.
    #[must_use]
    pub fn from_env() -> Self {
        let disabled =
            std::env::var("ICONGEN_DISABLE_PNG").is_ok_and(|v| v == "true" || v == "1");
        if disabled {
            Self::disabled()
        } else {
            Self::live()
        }
    }
}
