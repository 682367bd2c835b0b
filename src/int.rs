mod sealed {
    pub trait Sealed {}
}

/// Longest decimal magnitude of any [`Integer`].
pub(crate) const MAX_DIGITS: usize = 20;

/// Signed integers that [`FastIo`](crate::FastIo) can read and write.
///
/// All arithmetic wraps: reading a value outside the type's range silently
/// overflows instead of failing.
pub trait Integer: Copy + sealed::Sealed {
    #[doc(hidden)]
    const ZERO: Self;

    #[doc(hidden)]
    fn push_digit(self, digit: u8) -> Self;

    #[doc(hidden)]
    fn negate(self) -> Self;

    #[doc(hidden)]
    fn is_negative(self) -> bool;

    /// Writes the magnitude's digits least significant first and returns how many.
    #[doc(hidden)]
    fn digits(self, out: &mut [u8; MAX_DIGITS]) -> usize;
}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Integer for $t {
                const ZERO: Self = 0;

                fn push_digit(self, digit: u8) -> Self {
                    self.wrapping_mul(10).wrapping_add(digit as $t)
                }

                fn negate(self) -> Self {
                    self.wrapping_neg()
                }

                fn is_negative(self) -> bool {
                    self < 0
                }

                fn digits(self, out: &mut [u8; MAX_DIGITS]) -> usize {
                    let mut x = self.unsigned_abs();
                    let mut len = 0;
                    loop {
                        out[len] = b'0' + (x % 10) as u8;
                        len += 1;
                        x /= 10;
                        if x == 0 {
                            break len;
                        }
                    }
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, isize);

#[cfg(test)]
mod tests {
    use super::{Integer, MAX_DIGITS};

    fn digits<T: Integer>(x: T) -> Vec<u8> {
        let mut out = [0; MAX_DIGITS];
        let len = x.digits(&mut out);
        out[..len].iter().rev().copied().collect()
    }

    #[test]
    fn test_digits() {
        assert_eq!(digits(0), b"0");
        assert_eq!(digits(7), b"7");
        assert_eq!(digits(-120), b"120");
        assert_eq!(digits(i32::MIN), b"2147483648");
        assert_eq!(digits(i64::MIN), b"9223372036854775808");
        assert_eq!(digits(i8::MIN), b"128");
    }

    #[test]
    fn test_push_digit_wraps() {
        let x = [2, 1, 4, 7, 4, 8, 3, 6, 4, 8]
            .into_iter()
            .fold(0_i32, |x, d| x.push_digit(d));
        assert_eq!(x, i32::MIN);
        assert_eq!(x.negate(), i32::MIN);
        assert_eq!(i32::MAX.push_digit(0), -10);
        assert_eq!(12_i8.push_digit(8), 128_u8 as i8);
    }
}
