//! Converts KITTI velodyne `.bin` scans to PCD or PLY point cloud files.

pub mod convert;
pub mod error;
pub mod io;
pub mod types;
pub mod utils;

pub use convert::{convert, convert_with, load_point_cloud, save_point_cloud, ConvertOptions};
pub use error::ConversionError;
pub use kitti_format;
pub use types::OutputFormat;
