//! Name/tag access shared by Rust parameters and raw C slots.
//!
//! Lookup and validation only need a parameter's name bytes and raw tag, so
//! they are written once against [`ParamView`] and reused by the C layer
//! over its `#[repr(C)]` arrays.

pub trait ParamView {
    /// Name bytes, without any terminator.
    fn field(&self) -> &[u8];

    /// Raw tag; may be out of range for slots written by foreign code.
    fn raw_kind(&self) -> i32;
}

/// Index of the first parameter named `name` (byte-wise, case-sensitive).
pub fn position<P: ParamView>(params: &[P], name: &[u8]) -> Option<usize> {
    params.iter().position(|p| p.field() == name)
}

pub fn find<'a, P: ParamView>(params: &'a [P], name: &[u8]) -> Option<&'a P> {
    position(params, name).map(|i| &params[i])
}

impl<P: ParamView + ?Sized> ParamView for &P {
    fn field(&self) -> &[u8] {
        (**self).field()
    }

    fn raw_kind(&self) -> i32 {
        (**self).raw_kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Raw(&'static str, i32);

    impl ParamView for Raw {
        fn field(&self) -> &[u8] {
            self.0.as_bytes()
        }

        fn raw_kind(&self) -> i32 {
            self.1
        }
    }

    #[test]
    fn test_first_match_wins() {
        let params = [Raw("a", 1), Raw("b", 2), Raw("b", 3)];
        assert_eq!(position(&params, b"b"), Some(1));
        assert_eq!(find(&params, b"b").map(|p| p.1), Some(2));
        assert!(find(&params, b"B").is_none());
        assert!(find::<Raw>(&[], b"a").is_none());
    }
}
