//! ZIP assembly of the OOXML package.

use deck_core::{Error, Result};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

fn zip_err(e: zip::result::ZipError) -> Error {
    Error::ZipError(e.to_string())
}

/// One file inside the package.
pub(crate) struct PackagePart {
    pub path: String,
    pub data: Vec<u8>,
}

impl PackagePart {
    pub fn new(path: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            data,
        }
    }
}

/// Serialize the parts into a single in-memory ZIP archive.
pub(crate) fn write_package(parts: &[PackagePart]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for part in parts {
        zip.start_file(&part.path, options).map_err(zip_err)?;
        zip.write_all(&part.data)?;
    }

    let cursor = zip.finish().map_err(zip_err)?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use zip::ZipArchive;

    #[test]
    fn test_package_roundtrip() {
        let parts = vec![
            PackagePart::new("_rels/.rels", b"<Relationships/>".to_vec()),
            PackagePart::new("ppt/presentation.xml", b"<p:presentation/>".to_vec()),
        ];
        let bytes = write_package(&parts).unwrap();

        // ZIP local file header magic
        assert_eq!(&bytes[..4], &[0x50, 0x4B, 0x03, 0x04]);

        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);
        assert!(archive.by_name("ppt/presentation.xml").is_ok());
    }
}
