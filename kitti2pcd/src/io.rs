use crate::error::ConversionError;
use byteorder::{LittleEndian, WriteBytesExt};
use kitti_format::{PointCloud, XyzPoint};
use pcd_rs::DataKind;
use std::{
    error::Error as StdError,
    fs::{self, File},
    io::{self, prelude::*, BufWriter},
    path::Path,
};

/// Reads the whole `.bin` file into memory.
pub fn read_bin_file<P>(path: P) -> Result<Vec<u8>, ConversionError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    fs::read(path).map_err(|source| ConversionError::FileOpen {
        path: path.to_owned(),
        source,
    })
}

pub fn create_pcd_file<P>(cloud: &PointCloud, pcd_file: P) -> Result<(), ConversionError>
where
    P: AsRef<Path>,
{
    let pcd_file = pcd_file.as_ref();

    let mut writer: pcd_rs::Writer<XyzPoint, _> = pcd_rs::WriterInit {
        width: cloud.width,
        height: cloud.height,
        viewpoint: Default::default(),
        data_kind: DataKind::Binary,
        schema: None,
    }
    .create(pcd_file)
    .map_err(write_error(pcd_file))?;

    cloud
        .iter()
        .try_for_each(|point| writer.push(point))
        .map_err(write_error(pcd_file))?;
    writer.finish().map_err(write_error(pcd_file))?;

    Ok(())
}

pub fn create_ply_file<P>(cloud: &PointCloud, ply_file: P) -> Result<(), ConversionError>
where
    P: AsRef<Path>,
{
    let ply_file = ply_file.as_ref();

    let mut writer = PlyWriter::from_path(ply_file, cloud).map_err(write_error(ply_file))?;
    cloud
        .iter()
        .try_for_each(|point| writer.push(point))
        .map_err(write_error(ply_file))?;
    writer.finish().map_err(write_error(ply_file))?;

    Ok(())
}

fn write_error<E>(path: &Path) -> impl FnOnce(E) -> ConversionError + '_
where
    E: Into<Box<dyn StdError + Send + Sync + 'static>>,
{
    move |err| ConversionError::FileWrite {
        path: path.to_owned(),
        source: err.into(),
    }
}

/// Writes an unorganized cloud as `binary_little_endian` PLY with float
/// x, y and z vertex properties.
pub struct PlyWriter<W: Write> {
    writer: W,
    remaining: u64,
}

impl PlyWriter<BufWriter<File>> {
    pub fn from_path(path: impl AsRef<Path>, cloud: &PointCloud) -> io::Result<Self> {
        let writer = BufWriter::new(File::create(path)?);
        Self::new(writer, cloud)
    }
}

impl<W: Write> PlyWriter<W> {
    pub fn new(mut writer: W, cloud: &PointCloud) -> io::Result<Self> {
        let num_points = cloud.width * cloud.height;

        writer.write_all(b"ply\n")?;
        writer.write_all(b"format binary_little_endian 1.0\n")?;
        writeln!(writer, "obj_info width {}", cloud.width)?;
        writeln!(writer, "obj_info height {}", cloud.height)?;
        writeln!(writer, "obj_info is_dense {}", cloud.is_dense as u8)?;
        writeln!(writer, "element vertex {num_points}")?;
        writer.write_all(b"property float x\n")?;
        writer.write_all(b"property float y\n")?;
        writer.write_all(b"property float z\n")?;
        writer.write_all(b"end_header\n")?;

        Ok(Self {
            writer,
            remaining: num_points,
        })
    }

    pub fn push(&mut self, point: &XyzPoint) -> io::Result<()> {
        if self.remaining == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "more points pushed than declared in the PLY header",
            ));
        }
        self.remaining -= 1;

        let XyzPoint { x, y, z } = *point;
        self.writer.write_f32::<LittleEndian>(x)?;
        self.writer.write_f32::<LittleEndian>(y)?;
        self.writer.write_f32::<LittleEndian>(z)?;
        Ok(())
    }

    pub fn finish(mut self) -> io::Result<W> {
        if self.remaining != 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("{} points missing from the PLY body", self.remaining),
            ));
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}
