//! Gate parameters: trainable angles and externally injected data

use crate::{LayerError, Result};

/// A single scalar gate parameter
///
/// A parameter is either *trainable* (owned by the gate, free to be updated
/// by an optimizer) or *encoded* (injected from classical data; the gate
/// treats it as fixed). The distinction matters for layer parameter counts:
/// only trainable and encoded slots owned by the gate are counted, and
/// encoded values may not be mutated through [`Parameter::set_value`].
///
/// # Example
/// ```
/// use varq_core::Parameter;
///
/// let mut theta = Parameter::trainable(0.5);
/// theta.set_value(1.0).unwrap();
/// assert_eq!(theta.value(), 1.0);
///
/// let mut phi = Parameter::encoded(0.3);
/// assert!(phi.set_value(1.0).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Parameter {
    name: Option<String>,
    value: f64,
    encoded: bool,
}

impl Parameter {
    /// Create a trainable parameter
    pub fn trainable(value: f64) -> Self {
        Self {
            name: None,
            value,
            encoded: false,
        }
    }

    /// Create a data-encoded (non-trainable) parameter
    pub fn encoded(value: f64) -> Self {
        Self {
            name: None,
            value,
            encoded: true,
        }
    }

    /// Attach a name, for diagnostics
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Get the parameter name
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the current value
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Whether this parameter is trainable
    #[inline]
    pub fn is_trainable(&self) -> bool {
        !self.encoded
    }

    /// Set the value
    ///
    /// # Errors
    /// Returns error if the parameter is encoded.
    pub fn set_value(&mut self, value: f64) -> Result<()> {
        if self.encoded {
            return Err(LayerError::EncodedParameter(
                self.name
                    .as_ref()
                    .map(|n| format!(" '{}'", n))
                    .unwrap_or_default(),
            ));
        }
        self.value = value;
        Ok(())
    }
}
