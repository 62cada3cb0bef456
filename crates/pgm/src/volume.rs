// crate modules
use crate::error::{Error, Result};

// voltools modules
use voltools_utils::{f, OptionExt, SliceExt};

// external crates
use ndarray::{Array3, ArrayView3, ShapeBuilder};
use serde::{Deserialize, Serialize};

/// Dense 3D volume of unsigned 8-bit samples
///
/// Samples are stored in column-major (Fortran) order, exactly as they appear
/// in the raw data section of a file. The X index varies fastest, then Y, then
/// Z, so the linear index of voxel `(x, y, z)` is:
///
/// ```text
/// x + nx * (y + ny * z)
/// ```
///
/// The number of samples always matches the [Dimensions], which is checked on
/// construction.
///
/// ```rust
/// # use voltools_pgm::{Dimensions, Volume};
/// let volume = Volume::from_fn(Dimensions::new(2, 2, 1), |x, y, _| (10 * x + y) as u8).unwrap();
///
/// // X varies fastest in memory
/// assert_eq!(volume.as_slice(), &[0, 10, 1, 11]);
/// assert_eq!(volume.get(1, 0, 0), Some(10));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Volume {
    dimensions: Dimensions,
    /// Physical gap between adjacent voxels along each axis
    pub spacing: Spacing,
    #[serde(rename = "samples")]
    data: Vec<u8>,
}

impl Volume {
    /// Create a volume from column-major sample data
    ///
    /// Fails if the length of `data` is not the product of the dimensions.
    pub fn new(dimensions: Dimensions, data: Vec<u8>) -> Result<Self> {
        let expected = voxel_count(dimensions)?;
        if data.len() != expected {
            return Err(Error::UnexpectedByteLength {
                expected,
                found: data.len(),
            });
        }

        Ok(Self {
            dimensions,
            spacing: Spacing::default(),
            data,
        })
    }

    /// Create a volume with every sample set to zero
    ///
    /// Fails with [Error::InvalidDimensions] if the number of voxels overflows.
    pub fn zeros(dimensions: Dimensions) -> Result<Self> {
        Ok(Self {
            dimensions,
            spacing: Spacing::default(),
            data: vec![0; voxel_count(dimensions)?],
        })
    }

    /// Create a volume by calling `f(x, y, z)` for every voxel
    ///
    /// Voxels are visited in column-major order. Fails with
    /// [Error::InvalidDimensions] if the number of voxels overflows.
    pub fn from_fn<F>(dimensions: Dimensions, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize, usize) -> u8,
    {
        let mut data = Vec::with_capacity(voxel_count(dimensions)?);
        for z in 0..dimensions.nz {
            for y in 0..dimensions.ny {
                for x in 0..dimensions.nx {
                    data.push(f(x, y, z));
                }
            }
        }

        Ok(Self {
            dimensions,
            spacing: Spacing::default(),
            data,
        })
    }

    /// Copy an `ndarray` view into a new volume
    ///
    /// The view may have any memory layout, indexing is always `[x, y, z]`.
    pub fn from_array(array: ArrayView3<u8>) -> Self {
        let (nx, ny, nz) = array.dim();
        Self {
            dimensions: Dimensions::new(nx, ny, nz),
            spacing: Spacing::default(),
            // reversed axes walk x fastest
            data: array.t().iter().copied().collect(),
        }
    }

    /// Replace the voxel spacing
    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Shape of the volume as (nx, ny, nz)
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Total number of voxels in the volume
    pub fn number_of_voxels(&self) -> usize {
        self.data.len()
    }

    /// Column-major linear index of a voxel, if it is inside the volume
    pub fn index(&self, x: usize, y: usize, z: usize) -> Option<usize> {
        let Dimensions { nx, ny, nz } = self.dimensions;
        if x < nx && y < ny && z < nz {
            Some(x + nx * (y + ny * z))
        } else {
            None
        }
    }

    /// Sample value at `(x, y, z)`
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<u8> {
        self.index(x, y, z).map(|i| self.data[i])
    }

    /// Set the sample value at `(x, y, z)`
    pub fn set(&mut self, x: usize, y: usize, z: usize, value: u8) -> Result<()> {
        let i = self.index(x, y, z).ok_or(Error::OutOfBounds {
            x,
            y,
            z,
            dimensions: self.dimensions,
        })?;
        self.data[i] = value;
        Ok(())
    }

    /// Samples in column-major order
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consume the volume, returning the column-major samples
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Minimum and maximum sample values, `None` for an empty volume
    pub fn value_range(&self) -> Option<(u8, u8)> {
        self.data.try_range().ok()
    }

    /// Copy into an `ndarray` array with Fortran memory layout
    ///
    /// ```rust
    /// # use voltools_pgm::{Dimensions, Volume};
    /// let volume =
    ///     Volume::from_fn(Dimensions::new(3, 2, 2), |x, y, z| (x + 3 * y + 6 * z) as u8).unwrap();
    /// let array = volume.to_array();
    ///
    /// assert_eq!(array.dim(), (3, 2, 2));
    /// assert_eq!(array[[2, 1, 0]], 5);
    /// assert_eq!(array.as_slice_memory_order(), Some(volume.as_slice()));
    /// ```
    pub fn to_array(&self) -> Array3<u8> {
        let Dimensions { nx, ny, nz } = self.dimensions;
        Array3::from_shape_fn((nx, ny, nz).f(), |(x, y, z)| {
            self.data[x + nx * (y + ny * z)]
        })
    }
}

/// Number of samples for the dimensions, rejecting overflow
fn voxel_count(dimensions: Dimensions) -> Result<usize> {
    dimensions
        .checked_number_of_voxels()
        .ok_or_else(|| Error::InvalidDimensions(dimensions.to_string()))
}

impl std::fmt::Display for Volume {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let range = self
            .value_range()
            .map(|(min, max)| f!("{min}..={max}"));

        let mut s = "Volume {\n".to_string();
        s += &f!(
            "    voxels: {} ({})\n",
            self.number_of_voxels(),
            self.dimensions
        );
        s += &f!("    spacing: {}\n", self.spacing);
        s += &f!("    value range: {}\n}}", range.display_or("empty"));

        write!(f, "{}", s)
    }
}

/// Number of voxels along each axis of a [Volume]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    /// Number of voxels in x, varies fastest
    pub nx: usize,
    /// Number of voxels in y
    pub ny: usize,
    /// Number of voxels in z, varies slowest
    pub nz: usize,
}

impl Dimensions {
    /// Dimensions from the number of voxels along each axis
    pub fn new(nx: usize, ny: usize, nz: usize) -> Self {
        Self { nx, ny, nz }
    }

    /// Total number of voxels, or `None` if the product overflows
    pub fn checked_number_of_voxels(&self) -> Option<usize> {
        self.nx.checked_mul(self.ny)?.checked_mul(self.nz)
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.nx, self.ny, self.nz)
    }
}

/// Axis of a volume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// First axis, varies fastest
    X,
    /// Second axis
    Y,
    /// Third axis, varies slowest
    Z,
}

/// Physical gap between adjacent voxels along each axis
///
/// Carried in the header as `#xdim`, `#ydim`, and `#zdim` comment lines. The
/// skeletonization tools only ever write unit spacing, which is the default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    /// Gap between adjacent voxels in a row
    pub x: f64,
    /// Gap between adjacent voxels in a column
    pub y: f64,
    /// Gap between adjacent planes
    pub z: f64,
}

impl Spacing {
    /// Spacing from the gap along each axis
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Set the gap along one axis
    pub fn set(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

impl std::fmt::Display for Spacing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} x {} x {}", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_major_indexing() {
        let volume = Volume::from_fn(Dimensions::new(2, 3, 4), |x, y, z| {
            (x + 2 * y + 6 * z) as u8
        })
        .unwrap();

        // linear index and sample value coincide for this fill
        for (i, value) in volume.as_slice().iter().enumerate() {
            assert_eq!(*value as usize, i);
        }

        assert_eq!(volume.index(1, 0, 0), Some(1));
        assert_eq!(volume.index(0, 1, 0), Some(2));
        assert_eq!(volume.index(0, 0, 1), Some(6));
        assert_eq!(volume.index(2, 0, 0), None);
        assert_eq!(volume.get(1, 2, 3), Some(23));
        assert_eq!(volume.get(0, 3, 0), None);
    }

    #[test]
    fn new_checks_length() {
        let dimensions = Dimensions::new(2, 2, 2);
        assert!(Volume::new(dimensions, vec![0; 8]).is_ok());

        match Volume::new(dimensions, vec![0; 7]) {
            Err(Error::UnexpectedByteLength { expected, found }) => {
                assert_eq!(expected, 8);
                assert_eq!(found, 7);
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn set_inside_and_outside() {
        let mut volume = Volume::zeros(Dimensions::new(2, 2, 2)).unwrap();
        volume.set(1, 1, 1, 200).unwrap();
        assert_eq!(volume.get(1, 1, 1), Some(200));
        assert_eq!(volume.as_slice()[7], 200);

        assert!(matches!(
            volume.set(2, 0, 0, 1),
            Err(Error::OutOfBounds { x: 2, .. })
        ));
    }

    #[test]
    fn value_range() {
        let volume = Volume::new(Dimensions::new(3, 1, 1), vec![9, 3, 250]).unwrap();
        assert_eq!(volume.value_range(), Some((3, 250)));
        assert_eq!(
            Volume::zeros(Dimensions::new(0, 4, 4)).unwrap().value_range(),
            None
        );
    }

    #[test]
    fn array_conversions_keep_positions() {
        // standard (row-major) layout on purpose
        let array = Array3::from_shape_fn((3, 2, 2), |(x, y, z)| (x + 3 * y + 6 * z) as u8);
        let volume = Volume::from_array(array.view());

        assert_eq!(volume.dimensions(), Dimensions::new(3, 2, 2));
        assert_eq!(volume.as_slice(), &(0..12).collect::<Vec<u8>>()[..]);
        assert_eq!(volume.to_array(), array);
    }

    #[test]
    fn spacing_per_axis() {
        let mut spacing = Spacing::default();
        spacing.set(Axis::Y, 0.5);
        assert_eq!(spacing, Spacing::new(1.0, 0.5, 1.0));
        assert_eq!(spacing.to_string(), "1 x 0.5 x 1");
    }

    #[test]
    fn overflowing_dimensions() {
        let dimensions = Dimensions::new(usize::MAX, 2, 1);
        assert_eq!(dimensions.checked_number_of_voxels(), None);
        assert_eq!(Dimensions::new(4, 3, 2).checked_number_of_voxels(), Some(24));

        // constructors refuse rather than wrap
        assert!(matches!(
            Volume::zeros(dimensions),
            Err(Error::InvalidDimensions(_))
        ));
        assert!(matches!(
            Volume::from_fn(dimensions, |_, _, _| 0),
            Err(Error::InvalidDimensions(_))
        ));
        assert!(matches!(
            Volume::new(dimensions, vec![0; 2]),
            Err(Error::InvalidDimensions(_))
        ));
    }
}
