use crate::error::{Error, Result};

/// Extends functionality for slices of ordered samples
pub trait SliceExt<T> {
    /// Find the minimum value in a slice of samples
    ///
    /// An empty slice has no minimum and is an error.
    ///
    /// ```rust
    /// # use voltools_utils::SliceExt;
    /// # use voltools_utils::Error;
    /// assert_eq!([10u8, 0, 255].try_min(), Ok(0));
    /// assert_eq!(Vec::<u8>::new().try_min(), Err(Error::SliceContainsNoValues));
    /// ```
    fn try_min(&self) -> Result<T>;

    /// Find the maximum value in a slice of samples
    ///
    /// An empty slice has no maximum and is an error.
    ///
    /// ```rust
    /// # use voltools_utils::SliceExt;
    /// # use voltools_utils::Error;
    /// assert_eq!([10u8, 0, 255].try_max(), Ok(255));
    /// assert_eq!(Vec::<u8>::new().try_max(), Err(Error::SliceContainsNoValues));
    /// ```
    fn try_max(&self) -> Result<T>;

    /// Find both the minimum and maximum in a single pass
    ///
    /// Volumes can be hundreds of megabytes, so this avoids walking the data
    /// twice when both ends of the range are needed.
    ///
    /// ```rust
    /// # use voltools_utils::SliceExt;
    /// # use voltools_utils::Error;
    /// assert_eq!([3u8, 7, 1, 9].try_range(), Ok((1, 9)));
    /// assert_eq!([42u8].try_range(), Ok((42, 42)));
    /// assert_eq!(Vec::<u8>::new().try_range(), Err(Error::SliceContainsNoValues));
    /// ```
    fn try_range(&self) -> Result<(T, T)>;
}

impl<T: Ord + Copy> SliceExt<T> for [T] {
    fn try_min(&self) -> Result<T> {
        self.iter().min().copied().ok_or(Error::SliceContainsNoValues)
    }

    fn try_max(&self) -> Result<T> {
        self.iter().max().copied().ok_or(Error::SliceContainsNoValues)
    }

    fn try_range(&self) -> Result<(T, T)> {
        let (first, rest) = self.split_first().ok_or(Error::SliceContainsNoValues)?;
        Ok(rest
            .iter()
            .fold((*first, *first), |(lo, hi), v| (lo.min(*v), hi.max(*v))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_matches_min_and_max() {
        let samples = [128u8, 4, 250, 4, 17];
        assert_eq!(samples.try_range(), Ok((4, 250)));
        assert_eq!(samples.try_min(), Ok(4));
        assert_eq!(samples.try_max(), Ok(250));
    }

    #[test]
    fn works_for_other_ordered_types() {
        let values = vec![-3i32, 12, 0];
        assert_eq!(values.try_range(), Ok((-3, 12)));
    }
}
