use core::fmt;
use core::num::NonZeroU32;

/// Compact identifier for an entity of a loaded graph.
///
/// Ids are positions in first-seen order and are only meaningful for the
/// graph that issued them; a reload invalidates every id.
///
/// - `u32` keeps traversal frames small
/// - `NonZero` lets `Option<Id>` (parent links, current edge) stay the same size
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Id for the entity at 0-based position `index`.
    pub fn from_index(index: u32) -> Self {
        match NonZeroU32::new(index.wrapping_add(1)) {
            Some(v) => Self(v),
            None => panic!("id index overflow"),
        }
    }

    /// Create an Id from a `usize` position.
    pub fn from_usize(index: usize) -> Self {
        Self::from_index(index as u32)
    }

    /// 0-based position in the issuing graph.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// Same position as a `usize` for slice access.
    pub fn slot(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

pub type NodeId = Id;
pub type EdgeId = Id;
