use crate::error::{Error, Result};

/// A value that can be written as a bencode integer.
///
/// Bencode integers are signed 64-bit, so wider types only convert when the
/// value fits.
pub trait PrintableInteger {
    /// Convert the value to the `i64` that will be written
    fn to_i64(self) -> Result<i64>;
}

macro_rules! impl_integer {
    ($($type:ty)*) => {$(
        impl PrintableInteger for $type {
            fn to_i64(self) -> Result<i64> {
                i64::try_from(self).map_err(|_| Error::InvalidInput)
            }
        }
    )*}
}

impl_integer!(u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize);

impl<T: PrintableInteger + Copy> PrintableInteger for &T {
    fn to_i64(self) -> Result<i64> {
        T::to_i64(*self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn values_in_range_convert() {
        assert_eq!(0u8.to_i64(), Ok(0));
        assert_eq!((-5i16).to_i64(), Ok(-5));
        assert_eq!(i64::MIN.to_i64(), Ok(i64::MIN));
        assert_eq!((i64::MAX as u64).to_i64(), Ok(i64::MAX));
    }

    #[test]
    fn values_out_of_range_are_rejected() {
        assert_eq!(u64::MAX.to_i64(), Err(Error::InvalidInput));
        assert_eq!((i64::MAX as u128 + 1).to_i64(), Err(Error::InvalidInput));
        assert_eq!((i64::MIN as i128 - 1).to_i64(), Err(Error::InvalidInput));
    }
}
