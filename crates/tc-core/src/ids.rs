use core::fmt;
use core::num::NonZeroU32;

/// Compact, stable identifier for graph nodes and branches.
///
/// The stored value is the 1-based label engineers use (`n1`, `b3`), so the
/// 0-based matrix position is `label - 1`.
///
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<Id>` to be pointer-optimized
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Id(NonZeroU32);

impl Id {
    /// Create an Id from a 0-based matrix row/column index.
    pub fn from_index(index: usize) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        Self(NonZeroU32::MIN.saturating_add(index))
    }

    /// Create an Id from a 1-based label; `None` for 0.
    pub fn from_label(label: usize) -> Option<Self> {
        u32::try_from(label).ok().and_then(NonZeroU32::new).map(Self)
    }

    /// Recover the 0-based index.
    pub fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }

    /// The 1-based label.
    pub fn label(self) -> usize {
        self.0.get() as usize
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.label())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Domain-specific ID aliases for clarity (no runtime cost).
pub type NodeId = Id;
pub type BranchId = Id;
