use crate::types::OutputFormat;
use std::path::Path;

/// Picks the container for `file` from its name. Anything that is not a
/// `.ply` file, including names without an extension, is written as PCD.
pub fn guess_output_format<P>(file: P) -> OutputFormat
where
    P: AsRef<Path>,
{
    let is_ply = file
        .as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("ply"))
        .unwrap_or(false);

    if is_ply {
        OutputFormat::Ply
    } else {
        OutputFormat::Pcd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_by_extension() {
        assert_eq!(guess_output_format("out/000000.pcd"), OutputFormat::Pcd);
        assert_eq!(guess_output_format("000000.ply"), OutputFormat::Ply);
        assert_eq!(guess_output_format("000000.PLY"), OutputFormat::Ply);
        assert_eq!(guess_output_format("scan"), OutputFormat::Pcd);
        assert_eq!(guess_output_format("scan.ply.bak"), OutputFormat::Pcd);
        assert_eq!(guess_output_format(".ply"), OutputFormat::Pcd);
    }
}
