/// Names the accessor an error surfaced through, for example a deprecated
/// single-value getter over a list.
#[derive(Debug)]
pub(super) struct AccessorError {
    pub(super) name: &'static str,
}

impl std::error::Error for AccessorError {}

impl core::fmt::Display for AccessorError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}()", self.name)
    }
}
