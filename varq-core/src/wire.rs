//! Wire addressing and identification

use std::fmt;

/// Type-safe identifier for a wire
///
/// A wire is one addressable qubit or photonic mode. The newtype prevents
/// accidentally using raw integers where wire indices are expected.
///
/// # Example
/// ```
/// use varq_core::WireId;
///
/// let w0 = WireId::new(0);
/// let w1 = WireId::new(1);
/// assert!(w0 < w1);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct WireId(usize);

impl WireId {
    /// Create a new wire identifier
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the underlying index
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

impl From<usize> for WireId {
    #[inline]
    fn from(id: usize) -> Self {
        Self::new(id)
    }
}

impl From<WireId> for usize {
    #[inline]
    fn from(wire: WireId) -> Self {
        wire.index()
    }
}
