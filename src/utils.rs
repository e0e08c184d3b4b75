use core::convert::Infallible;

/// Helper trait to resolve Infallible Results
///
/// Most HAL output pins cannot fail, so the LED indicator results can be
/// unwrapped without a panic path.
pub trait InfallibleResult<T> {
    fn infallible(self) -> T;
}

impl<T> InfallibleResult<T> for Result<T, Infallible> {
    fn infallible(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => match e {},
        }
    }
}
