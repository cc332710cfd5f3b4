use crate::collection::TypedParams;
use crate::error::Result;
use crate::resize::ResizePolicy;
use crate::Builder;

/// Configures a [`TypedParams`] before first use.
///
/// ```
/// use typed_params::{Builder, ResizePolicy, TypedParams};
///
/// let params = TypedParams::builder()
///     .capacity(8)
///     .resize_policy(ResizePolicy::Exact)
///     .build()
///     .unwrap();
/// assert!(params.capacity() >= 8);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TypedParamsBuilder {
    capacity: usize,
    policy: ResizePolicy,
}

impl TypedParamsBuilder {
    /// Number of slots to preallocate.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn resize_policy(mut self, policy: ResizePolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl Builder for TypedParamsBuilder {
    type Output = TypedParams;

    fn build(self) -> Result<Self::Output> {
        let mut params = Vec::new();
        params.try_reserve_exact(self.capacity)?;
        Ok(TypedParams::from_parts(params, self.policy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_default_is_empty() {
        let params = TypedParamsBuilder::default().build().unwrap();
        assert!(params.is_empty());
        assert_eq!(params.resize_policy(), ResizePolicy::Geometric);
    }

    #[test]
    fn test_huge_capacity_is_no_memory() {
        let res = TypedParams::builder().capacity(usize::MAX).build();
        assert_eq!(res, Err(Error::NoMemory));
    }
}
