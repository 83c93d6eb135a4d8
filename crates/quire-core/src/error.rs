mod accessor;
mod index_out_of_range;

use accessor::AccessorError;
use index_out_of_range::IndexOutOfRangeError;
pub(crate) use index_out_of_range::get;
use std::sync::Arc;

/// An error raised while inspecting a statement tree.
///
/// Rendering never fails, so errors only surface from the accessors that
/// index into ordered clause lists.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Wraps this error with the name of the accessor that raised it.
    ///
    /// Context is displayed first, followed by the root cause.
    #[inline(never)]
    #[cold]
    pub(crate) fn context(self, accessor: &'static str) -> Error {
        Error {
            inner: Arc::new(ErrorInner {
                kind: ErrorKind::Accessor(AccessorError { name: accessor }),
                cause: Some(self),
            }),
        }
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.inner.cause {
            Some(cause) => Some(cause),
            None => match self.kind() {
                ErrorKind::IndexOutOfRange(err) => Some(err),
                ErrorKind::Accessor(_) => None,
            },
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Accessor(AccessorError),
    IndexOutOfRange(IndexOutOfRangeError),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Accessor(err) => core::fmt::Display::fmt(err, f),
            IndexOutOfRange(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(ErrorInner { kind, cause: None }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        // Error stays one pointer wide
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn index_out_of_range_with_context() {
        let err = Error::index_out_of_range("joins", 0, 0).context("first_join");
        assert_eq!(
            err.to_string(),
            "first_join(): index out of range: joins[0] (len 0)"
        );
        assert!(err.is_index_out_of_range());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn get_in_range() {
        let items = [1, 2];
        assert_eq!(*get("items", &items, 1).unwrap(), 2);

        let err = get("items", &items, 2).unwrap_err();
        assert_eq!(err.to_string(), "index out of range: items[2] (len 2)");
    }
}
