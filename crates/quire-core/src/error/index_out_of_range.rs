use super::Error;

/// Error when an indexed accessor reaches past the end of an ordered clause
/// list, for example asking for the first `ON` expression of a join that has
/// none.
#[derive(Debug)]
pub(super) struct IndexOutOfRangeError {
    list: &'static str,
    index: usize,
    len: usize,
}

impl std::error::Error for IndexOutOfRangeError {}

impl core::fmt::Display for IndexOutOfRangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "index out of range: {}[{}] (len {})",
            self.list, self.index, self.len
        )
    }
}

impl Error {
    /// Creates an index out of range error for the named clause list.
    pub fn index_out_of_range(list: &'static str, index: usize, len: usize) -> Error {
        Error::from(super::ErrorKind::IndexOutOfRange(IndexOutOfRangeError {
            list,
            index,
            len,
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is an index out
    /// of range error.
    pub fn is_index_out_of_range(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::IndexOutOfRange(_)))
    }
}

/// Looks up `index` in `items`, failing with an index out of range error
/// naming `list`.
pub(crate) fn get<'a, T>(list: &'static str, items: &'a [T], index: usize) -> crate::Result<&'a T> {
    items
        .get(index)
        .ok_or_else(|| Error::index_out_of_range(list, index, items.len()))
}
