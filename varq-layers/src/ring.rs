//! Ring wiring generator: cyclic step-neighbor connectivity

use crate::layer::Layer;
use varq_core::{LayerError, Result};

impl Layer {
    /// A layer of CNOT gates wired in a cycle
    ///
    /// Produces one wire group per position in the inclusive `[low, high]`
    /// sub-range (default the full range), each connecting a wire to the
    /// wire `step` positions ahead modulo the sub-range width. With
    /// `reverse`, positions are enumerated descending from `high` and the
    /// neighbor offset runs `step` positions behind instead.
    ///
    /// The two directions are independently specified connectivity
    /// patterns, not element-wise reversals of each other.
    ///
    /// # Errors
    /// Returns [`LayerError::InvalidRange`] unless `low < high < num_wires`.
    pub fn cnot_ring(
        num_wires: usize,
        minmax: Option<[usize; 2]>,
        step: usize,
        reverse: bool,
    ) -> Result<Layer> {
        let [low, high] = minmax.unwrap_or([0, num_wires.saturating_sub(1)]);
        if low >= high || high >= num_wires {
            return Err(LayerError::InvalidRange {
                low,
                high,
                num_wires,
            });
        }

        let width = high - low + 1;
        let offset = step % width;
        let mut groups = Vec::with_capacity(width);
        if reverse {
            // from high down to low
            for i in (0..width).rev() {
                groups.push(vec![low + i, low + (i + width - offset) % width]);
            }
        } else {
            for i in 0..width {
                groups.push(vec![low + i, low + (i + offset) % width]);
            }
        }

        Self::cnot_layer_named("CnotRing", num_wires, Some(groups))
    }
}
