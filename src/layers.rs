//! Layer selections along one axis.

use std::fmt;

use crate::error::{CubeError, Result};

/// Maximum number of layers a mask can hold.
pub const MAX_LAYERS: usize = 128;

/// A set of layers along one axis, stored as a bitmask.
///
/// Bit `i` set means layer `i` takes part in the twist. The mask remembers
/// how many layers it covers so a mask built for one cube size is never
/// silently applied to another.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerMask {
    bits: u128,
    count: u8,
}

impl LayerMask {
    /// Creates a mask with no layers selected.
    ///
    /// Fails with [`CubeError::InvalidLayer`] if `count` exceeds
    /// [`MAX_LAYERS`].
    pub fn empty(count: usize) -> Result<Self> {
        if count > MAX_LAYERS {
            return Err(CubeError::InvalidLayer {
                layer: count - 1,
                count: MAX_LAYERS,
            });
        }
        Ok(Self::zeroed(count as u8))
    }

    /// Creates a mask with every layer selected.
    pub fn all(count: usize) -> Result<Self> {
        let mut mask = Self::empty(count)?;
        mask.bits = mask.full_bits();
        Ok(mask)
    }

    /// Creates a mask selecting only `layer`.
    pub fn single(count: usize, layer: usize) -> Result<Self> {
        let mut mask = Self::empty(count)?;
        mask.set(layer, true)?;
        Ok(mask)
    }

    /// Builds a mask by asking `selected` about each layer in turn.
    pub fn from_fn(count: usize, mut selected: impl FnMut(usize) -> bool) -> Result<Self> {
        let mut mask = Self::empty(count)?;
        for layer in 0..mask.layer_count() {
            if selected(layer) {
                mask.bits |= 1 << layer;
            }
        }
        Ok(mask)
    }

    /// Builds a mask from one flag per layer.
    pub fn from_bools(flags: &[bool]) -> Result<Self> {
        Self::from_fn(flags.len(), |layer| flags[layer])
    }

    const fn zeroed(count: u8) -> Self {
        Self { bits: 0, count }
    }

    /// Returns one flag per layer.
    pub fn to_bools(&self) -> Vec<bool> {
        (0..self.layer_count()).map(|layer| self.contains(layer)).collect()
    }

    /// Returns how many layers this mask covers.
    #[inline]
    pub fn layer_count(&self) -> usize {
        self.count as usize
    }

    #[inline]
    pub fn contains(&self, layer: usize) -> bool {
        layer < self.layer_count() && self.bits & (1 << layer) != 0
    }

    /// Selects or deselects `layer`.
    pub fn set(&mut self, layer: usize, selected: bool) -> Result<()> {
        if layer >= self.layer_count() {
            return Err(CubeError::InvalidLayer {
                layer,
                count: self.layer_count(),
            });
        }
        if selected {
            self.bits |= 1 << layer;
        } else {
            self.bits &= !(1 << layer);
        }
        Ok(())
    }

    /// Returns the mask with layer order flipped end to end.
    pub fn reversed(&self) -> Self {
        let count = self.layer_count();
        let mut out = Self::zeroed(self.count);
        for layer in self.iter() {
            out.bits |= 1 << (count - 1 - layer);
        }
        out
    }

    /// Returns `true` if no layer is selected.
    #[inline]
    pub fn is_none(&self) -> bool {
        self.bits == 0
    }

    /// Returns `true` if every layer is selected.
    #[inline]
    pub fn is_all(&self) -> bool {
        self.bits == self.full_bits()
    }

    /// Iterates over the selected layer indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.layer_count()).filter(|&layer| self.contains(layer))
    }

    /// Moves the selection one layer deeper, unless the deepest layer is
    /// already selected.
    pub fn shift_deeper(&mut self) {
        if !self.contains(self.layer_count().saturating_sub(1)) {
            self.bits = (self.bits << 1) & self.full_bits();
        }
    }

    /// Moves the selection one layer toward the face, unless the outermost
    /// layer is already selected.
    pub fn shift_shallower(&mut self) {
        if !self.contains(0) {
            self.bits >>= 1;
        }
    }

    fn full_bits(&self) -> u128 {
        if self.count as usize >= MAX_LAYERS {
            u128::MAX
        } else {
            (1 << self.count) - 1
        }
    }
}

impl fmt::Debug for LayerMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LayerMask({self})")
    }
}

impl fmt::Display for LayerMask {
    /// Writes one character per layer: `#` selected, `.` not.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for layer in 0..self.layer_count() {
            f.write_str(if self.contains(layer) { "#" } else { "." })?;
        }
        Ok(())
    }
}
