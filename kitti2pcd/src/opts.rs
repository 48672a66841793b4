use clap::Parser;
use std::path::PathBuf;

/// Convert a KITTI raw point cloud scan (*.bin) to a PCD or PLY file.
///
/// The input must be a KITTI velodyne scan, usually named like
/// 0000000000.bin: a flat sequence of (x, y, z, reflectance) float records.
///
/// The output file name (may include a path) is used as given. No file
/// extension is appended. Names ending with .ply produce a binary PLY file,
/// any other name produces a binary PCD file.
#[derive(Debug, Clone, Parser)]
#[command(version)]
pub struct Opts {
    /// Input KITTI binary point cloud file.
    pub input: Option<PathBuf>,

    /// Output point cloud file.
    pub output: Option<PathBuf>,
}
