use crate::f;

/// Extends Option for printing optional header fields
pub trait OptionExt {
    /// Display the contained value, or "none"
    ///
    /// Generic over anything that implements `Display`, so optional header
    /// lines can be summarised without a match at every call site.
    ///
    /// ```rust
    /// # use voltools_utils::OptionExt;
    /// let dataset = Some("STRUCTURED_POINTS");
    /// assert_eq!(dataset.display(), "STRUCTURED_POINTS");
    ///
    /// let dataset: Option<&str> = None;
    /// assert_eq!(dataset.display(), "none");
    /// ```
    fn display(&self) -> String;

    /// Display the contained value, or a caller-provided placeholder
    ///
    /// ```rust
    /// # use voltools_utils::OptionExt;
    /// let range: Option<u8> = None;
    /// assert_eq!(range.display_or("empty"), "empty");
    /// assert_eq!(Some(255).display_or("empty"), "255");
    /// ```
    fn display_or(&self, placeholder: &str) -> String;
}

impl<T: std::fmt::Display> OptionExt for Option<T> {
    fn display(&self) -> String {
        self.display_or("none")
    }

    fn display_or(&self, placeholder: &str) -> String {
        match self {
            Some(value) => f!("{value}"),
            None => placeholder.to_string(),
        }
    }
}
