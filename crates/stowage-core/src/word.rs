//! Fixed-width integer element types for sparse arrays.

use std::fmt::Debug;

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width integer that can be stored in a sparse array.
///
/// `Word::default()` is the value read back from positions that were
/// never written. Sealed: implemented for the primitive integer types
/// only.
pub trait Word: Copy + Default + PartialEq + Debug + sealed::Sealed + 'static {}

macro_rules! impl_word {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}
            impl Word for $t {}
        )*
    };
}

impl_word!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    fn zero<W: Word>() -> W {
        W::default()
    }

    #[test]
    fn default_word_is_zero() {
        assert_eq!(zero::<i32>(), 0);
        assert_eq!(zero::<u64>(), 0);
        assert_eq!(zero::<usize>(), 0);
    }
}
