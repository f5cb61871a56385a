use crate::error::{Error, Result};

pub type Key = i64;

/// Conversion of caller supplied values into a [`Key`].
///
/// Integers convert when they fit in an `i64`; anything else is rejected
/// with [`Error::InvalidKey`] rather than coerced.
pub trait AsKey {
    fn as_key(&self) -> Result<Key>;
}

macro_rules! integer_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl AsKey for $t {
                fn as_key(&self) -> Result<Key> {
                    Key::try_from(*self).map_err(|_| {
                        Error::InvalidKey(format!("{} does not fit in an i64", self))
                    })
                }
            }
        )*
    };
}

macro_rules! float_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl AsKey for $t {
                fn as_key(&self) -> Result<Key> {
                    Err(Error::InvalidKey(format!(
                        "{} is a {}, keys must be integers",
                        self,
                        stringify!($t)
                    )))
                }
            }
        )*
    };
}

integer_key!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_key!(f32, f64);

impl<T: AsKey + ?Sized> AsKey for &T {
    fn as_key(&self) -> Result<Key> {
        (**self).as_key()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;

    use super::AsKey;

    #[test]
    fn integers() {
        assert_eq!(5u8.as_key().unwrap(), 5);
        assert_eq!((-3i32).as_key().unwrap(), -3);
        assert_eq!(i64::MIN.as_key().unwrap(), i64::MIN);
        assert_eq!((i64::MAX as u64).as_key().unwrap(), i64::MAX);
        assert_eq!((&&7usize).as_key().unwrap(), 7);
    }

    #[test]
    fn out_of_range() {
        assert!(matches!(u64::MAX.as_key(), Err(Error::InvalidKey(_))));
        assert!(matches!(i128::MIN.as_key(), Err(Error::InvalidKey(_))));
    }

    #[test]
    fn floats_rejected() {
        assert!(matches!(1.0f64.as_key(), Err(Error::InvalidKey(_))));
        let err = 2.5f32.as_key().unwrap_err();
        assert!(err.to_string().contains("f32"));
    }
}
