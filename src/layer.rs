//! Layers
//!
//! The firmware keeps a bitmask of active layers, one bit per layer.  It is read-only from here:
//! the keymap only ever asks which layer is on top.

/// A layer number, the index into a keymap's layer table.
pub type Layer = u8;

/// The default layer, which is always at the bottom.
pub const BASE: Layer = 0;

/// A snapshot of the runtime's active layer bitmask.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct LayerState(u32);

impl LayerState {
    pub const fn from_bits(bits: u32) -> Self {
        LayerState(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// This state with `layer` also active.  Layers past the end of the mask are ignored.
    pub const fn with(self, layer: Layer) -> Self {
        if layer < 32 {
            LayerState(self.0 | (1 << layer))
        } else {
            self
        }
    }

    pub const fn is_active(self, layer: Layer) -> bool {
        layer < 32 && self.0 & (1 << layer) != 0
    }

    /// The highest active layer.  With nothing set, this is the base layer.
    pub const fn top(self) -> Layer {
        if self.0 == 0 {
            BASE
        } else {
            (31 - self.0.leading_zeros()) as Layer
        }
    }
}
