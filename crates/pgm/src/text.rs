//! Text outputs for inspecting volumes

// standard library
use std::io::Write;
use std::path::Path;

// crate modules
use crate::error::Result;
use crate::volume::Volume;
use crate::writer::init_writer;

// voltools modules
use voltools_utils::{f, OptionExt};

/// Write [Volume] data to a human readable text file
///
/// This outputs a summary of the volume followed by every z slice, with one
/// block of values per row of x values. Long rows are wrapped at 80 columns.
///
/// ```no_run
/// # use voltools_pgm::{read_pgm, write_ascii_pretty};
/// // Read the example file
/// let volume = read_pgm("./data/volume.pgm").unwrap().unwrap();
///
/// // Write a human readable ascii text file
/// write_ascii_pretty("./volume.txt", &volume).unwrap();
/// ```
pub fn write_ascii_pretty<P: AsRef<Path>>(path: P, volume: &Volume) -> Result<()> {
    let mut writer = init_writer(path)?;
    let dimensions = volume.dimensions();
    let range = volume
        .value_range()
        .map(|(min, max)| f!("{min} - {max}"));

    writeln!(writer, "Total voxels: {}", volume.number_of_voxels())?;
    writeln!(writer, "Voxels in x: {}", dimensions.nx)?;
    writeln!(writer, "Voxels in y: {}", dimensions.ny)?;
    writeln!(writer, "Voxels in z: {}", dimensions.nz)?;
    writeln!(writer, "Voxel spacing: {}", volume.spacing)?;
    writeln!(writer, "Value range: {}", range.display_or("empty"))?;

    // nothing to chunk into rows
    if volume.number_of_voxels() == 0 {
        writer.flush()?;
        return Ok(());
    }

    let options = textwrap::Options::new(80)
        .initial_indent("    ")
        .subsequent_indent("    ");

    let slice_size = dimensions.nx * dimensions.ny;
    for (z, slice) in volume.as_slice().chunks_exact(slice_size).enumerate() {
        writeln!(writer, "\nSlice z[{z}]:")?;

        for (y, row) in slice.chunks_exact(dimensions.nx).enumerate() {
            let s = row
                .iter()
                .map(|value| f!("{value}"))
                .collect::<Vec<String>>()
                .join(" ");

            writeln!(writer, "  y[{y}]:")?;
            writeln!(writer, "{}", textwrap::fill(&s, &options))?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Write [Volume] data to a JSON file
///
/// This is a direct serialisation of the dimensions, the voxel spacing, and
/// every sample in column-major order.
///
/// ```no_run
/// # use voltools_pgm::{read_pgm, write_json};
/// // Read the example file
/// let volume = read_pgm("./data/volume.pgm").unwrap().unwrap();
///
/// // Write the full volume as JSON
/// write_json("./volume.json", &volume).unwrap();
/// ```
pub fn write_json<P: AsRef<Path>>(path: P, volume: &Volume) -> Result<()> {
    let mut writer = init_writer(path)?;
    serde_json::to_writer_pretty(&mut writer, volume)?;
    writer.flush()?;
    Ok(())
}
