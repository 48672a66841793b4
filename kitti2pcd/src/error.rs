use std::{error::Error as StdError, io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Fail to open KITTI binary point cloud file {}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unable to write point cloud file '{}'", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: Box<dyn StdError + Send + Sync + 'static>,
    },
    #[error(
        "'{}' ends with {remainder} stray bytes after {records} complete records",
        path.display()
    )]
    TrailingBytes {
        path: PathBuf,
        records: usize,
        remainder: usize,
    },
}
