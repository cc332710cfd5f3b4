//! Growth policy of parameter arrays.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ResizePolicy {
    /// Grow by at least half the current capacity.
    #[default]
    Geometric,
    /// Grow by exactly the missing slots.
    Exact,
}

impl ResizePolicy {
    /// New capacity needed to hold `count + add` slots, or `None` when
    /// `capacity` already suffices.
    pub fn grow(self, capacity: usize, count: usize, add: usize) -> Result<Option<usize>> {
        let needed = count.checked_add(add).ok_or(Error::NoMemory)?;
        if needed <= capacity {
            return Ok(None);
        }
        let delta = needed - capacity;
        let delta = match self {
            Self::Geometric => delta.max(capacity / 2),
            Self::Exact => delta,
        };
        capacity.checked_add(delta).map(Some).ok_or(Error::NoMemory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_growth_when_room() {
        assert_eq!(ResizePolicy::Geometric.grow(4, 3, 1).unwrap(), None);
        assert_eq!(ResizePolicy::Exact.grow(0, 0, 0).unwrap(), None);
    }

    #[test]
    fn test_geometric_sequence() {
        let mut cap = 0;
        let mut seen = Vec::new();
        for count in 0..20 {
            if let Some(next) = ResizePolicy::Geometric.grow(cap, count, 1).unwrap() {
                cap = next;
                seen.push(cap);
            }
        }
        assert_eq!(seen, [1, 2, 3, 4, 6, 9, 13, 19, 28]);
    }

    #[test]
    fn test_exact() {
        assert_eq!(ResizePolicy::Exact.grow(8, 8, 1).unwrap(), Some(9));
        assert_eq!(ResizePolicy::Exact.grow(0, 0, 5).unwrap(), Some(5));
    }

    #[test]
    fn test_overflow_is_no_memory() {
        assert_eq!(
            ResizePolicy::Geometric.grow(usize::MAX, usize::MAX, 1),
            Err(Error::NoMemory)
        );
    }
}
