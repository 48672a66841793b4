//! Point types for KITTI velodyne scans and the clouds built from them.
//!
//! A KITTI `.bin` scan is a headerless sequence of 16-byte records, each
//! holding four little-endian `f32` values: x, y, z and reflectance.

use byteorder::{ByteOrder, LittleEndian};
use pcd_rs::PcdSerialize;

/// Size in bytes of one record in a KITTI `.bin` file.
pub const RECORD_SIZE: usize = 16;

/// One raw record of a KITTI `.bin` file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KittiPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub intensity: f32,
}

impl KittiPoint {
    pub fn from_bytes(buf: &[u8; RECORD_SIZE]) -> Self {
        Self::from_chunk(buf)
    }

    // `chunk` must be exactly RECORD_SIZE bytes long.
    fn from_chunk(chunk: &[u8]) -> Self {
        let mut values = [0f32; 4];
        LittleEndian::read_f32_into(chunk, &mut values);
        let [x, y, z, intensity] = values;
        Self { x, y, z, intensity }
    }

    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        let Self { x, y, z, intensity } = *self;
        let mut buf = [0u8; RECORD_SIZE];
        LittleEndian::write_f32_into(&[x, y, z, intensity], &mut buf);
        buf
    }

    pub fn xyz(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

/// The point type that is written to the .pcd file.
#[derive(Debug, Clone, Copy, PartialEq, PcdSerialize)]
pub struct XyzPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<&KittiPoint> for XyzPoint {
    fn from(from: &KittiPoint) -> Self {
        let KittiPoint { x, y, z, .. } = *from;
        Self { x, y, z }
    }
}

impl From<XyzPoint> for [f32; 3] {
    fn from(point: XyzPoint) -> Self {
        [point.x, point.y, point.z]
    }
}

/// Number of complete records in a buffer of `byte_len` bytes.
pub fn record_count(byte_len: usize) -> usize {
    byte_len / RECORD_SIZE
}

/// Number of bytes left over after the last complete record.
pub fn trailing_bytes(byte_len: usize) -> usize {
    byte_len % RECORD_SIZE
}

/// Decodes every complete record in `bytes`. A trailing partial record is
/// skipped.
pub fn decode_records(bytes: &[u8]) -> impl Iterator<Item = KittiPoint> + '_ {
    bytes.chunks_exact(RECORD_SIZE).map(KittiPoint::from_chunk)
}

/// An unorganized point cloud.
///
/// `height` is always 1 and `is_dense` is always false: the points are
/// never checked for NaN or infinite coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    pub points: Vec<XyzPoint>,
    pub width: u64,
    pub height: u64,
    pub is_dense: bool,
}

impl PointCloud {
    pub fn from_kitti_bytes(bytes: &[u8]) -> Self {
        let mut points = Vec::with_capacity(record_count(bytes.len()));
        points.extend(decode_records(bytes).map(|record| XyzPoint::from(&record)));
        Self::from_points(points)
    }

    pub fn from_points(points: Vec<XyzPoint>) -> Self {
        Self {
            width: points.len() as u64,
            height: 1,
            is_dense: false,
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, XyzPoint> {
        self.points.iter()
    }
}

impl FromIterator<KittiPoint> for PointCloud {
    fn from_iter<I: IntoIterator<Item = KittiPoint>>(iter: I) -> Self {
        let points = iter.into_iter().map(|record| XyzPoint::from(&record)).collect();
        Self::from_points(points)
    }
}
