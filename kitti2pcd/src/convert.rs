use crate::{
    error::ConversionError,
    io::{create_pcd_file, create_ply_file, read_bin_file},
    types::OutputFormat,
    utils::guess_output_format,
};
use console::style;
use kitti_format::{record_count, trailing_bytes, PointCloud};
use std::path::Path;

/// Options for [convert_with]. The default matches [convert].
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Reject inputs whose length is not a whole number of records instead
    /// of dropping the partial record.
    pub strict: bool,

    /// Output container. Guessed from the output file name when unset.
    pub format: Option<OutputFormat>,
}

/// Converts a KITTI `.bin` scan to a point cloud file.
///
/// The output path is used as is. A `.ply` name selects PLY, everything
/// else is written as PCD.
pub fn convert<PI, PO>(input_path: PI, output_path: PO) -> Result<(), ConversionError>
where
    PI: AsRef<Path>,
    PO: AsRef<Path>,
{
    convert_with(input_path, output_path, &ConvertOptions::default())
}

pub fn convert_with<PI, PO>(
    input_path: PI,
    output_path: PO,
    options: &ConvertOptions,
) -> Result<(), ConversionError>
where
    PI: AsRef<Path>,
    PO: AsRef<Path>,
{
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();

    println!("Loading file...");
    let buffer = read_bin_file(input_path)?;
    check_length(input_path, buffer.len(), options.strict)?;
    println!("# of pts: {}", record_count(buffer.len()));

    print!("Processing ... ");
    let cloud = PointCloud::from_kitti_bytes(&buffer);
    drop(buffer);
    println!("Done");

    let format = options
        .format
        .unwrap_or_else(|| guess_output_format(output_path));

    println!("Save to {}", style(output_path.display()).bold());
    save_point_cloud(&cloud, output_path, format)?;

    Ok(())
}

/// Reads and decodes a KITTI `.bin` scan.
pub fn load_point_cloud<P>(input_path: P, strict: bool) -> Result<PointCloud, ConversionError>
where
    P: AsRef<Path>,
{
    let input_path = input_path.as_ref();
    let buffer = read_bin_file(input_path)?;
    check_length(input_path, buffer.len(), strict)?;
    Ok(PointCloud::from_kitti_bytes(&buffer))
}

fn check_length(path: &Path, byte_len: usize, strict: bool) -> Result<(), ConversionError> {
    let remainder = trailing_bytes(byte_len);
    if strict && remainder != 0 {
        return Err(ConversionError::TrailingBytes {
            path: path.to_owned(),
            records: record_count(byte_len),
            remainder,
        });
    }
    Ok(())
}

pub fn save_point_cloud<P>(
    cloud: &PointCloud,
    output_path: P,
    format: OutputFormat,
) -> Result<(), ConversionError>
where
    P: AsRef<Path>,
{
    match format {
        OutputFormat::Pcd => create_pcd_file(cloud, output_path),
        OutputFormat::Ply => create_ply_file(cloud, output_path),
    }
}
