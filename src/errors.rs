use std::{alloc::{self, Layout, LayoutError}, error::Error, fmt};


/// Returned by the checked accessors (`at`, `List::insert`, ...) when a
/// position falls outside the live range of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    pub index: usize,
    pub len: usize,
}

impl OutOfRange {
    #[inline]
    pub(crate) const fn new(index: usize, len: usize) -> Self { Self { index, len } }
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "index {} is out of range for length {}", self.index, self.len)
    }
}

impl Error for OutOfRange {}


/// Failure to obtain or resize a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocErr {
    /// The requested capacity does not fit in `isize::MAX` bytes.
    Overflow,
    Layout,
    /// The global allocator refused the request.
    Alloc { layout: Layout }
}

impl AllocErr {
    #[inline]
    pub(crate) const fn layout(_err: LayoutError) -> Self { Self::Layout }

    #[inline]
    pub(crate) const fn alloc(layout: Layout) -> Self { Self::Alloc { layout } }
}

impl fmt::Display for AllocErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow => write!(f, "capacity overflow"),
            Self::Layout => write!(f, "invalid parameters to Layout::from_size_align"),
            Self::Alloc { layout } => write!(
                f, "allocation of {} bytes (align {}) failed", layout.size(), layout.align()
            ),
        }
    }
}

impl Error for AllocErr {}

/// Turns an allocation result into the standard panics, or into the global
/// allocation error handler when the allocator itself failed.
#[inline]
pub(crate) fn infallible<T>(result: Result<T, AllocErr>) -> T {
    match result {
        Ok(x) => x,
        Err(AllocErr::Layout) => panic!("invalid parameters to Layout::from_size_align"),
        Err(AllocErr::Overflow) => panic!("capacity overflow"),
        Err(AllocErr::Alloc { layout }) => alloc::handle_alloc_error(layout),
    }
}

#[cfg(test)]
mod tests {
    use std::panic;
    use super::*;

    #[test]
    fn display() {
        let err = OutOfRange::new(3, 3);
        assert_eq!(err.to_string(), "index 3 is out of range for length 3");

        assert_eq!(AllocErr::Overflow.to_string(), "capacity overflow");

        let layout = Layout::array::<u32>(4).unwrap();
        assert_eq!(
            AllocErr::alloc(layout).to_string(),
            "allocation of 16 bytes (align 4) failed"
        );
    }

    #[test]
    fn infallible_() {
        let results: [Result<i32, AllocErr>; 3] = [
            Ok(3),
            Err(AllocErr::Layout),
            Err(AllocErr::Overflow),
        ];

        let fallibles = results
            .into_iter()
            .map(|err| panic::catch_unwind(|| infallible(err) ))
            .map(|err| err.is_ok())
            .collect::<Vec<_>>();

        assert_eq!(fallibles, [true, false, false]);
    }

    #[test]
    fn as_error_trait_object() {
        let err: Box<dyn Error> = Box::new(OutOfRange::new(7, 2));
        assert_eq!(err.to_string(), "index 7 is out of range for length 2");
    }
}
