/// Container format of the converted point cloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// PCL point cloud data, binary payload.
    #[default]
    Pcd,
    /// Stanford PLY, `binary_little_endian` payload.
    Ply,
}
