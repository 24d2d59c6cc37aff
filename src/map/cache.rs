use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use super::WorldMap;

/// Magic number for compiled map bundles ("GMAP" in ASCII)
const MAGIC_NUMBER: [u8; 4] = [b'G', b'M', b'A', b'P'];

/// Current bundle format version
const VERSION: u16 = 1;

/// Error type for bundle operations
#[derive(Debug)]
pub enum BundleError {
    Io(io::Error),
    Encoding(bincode::Error),
    TooShort,
    InvalidMagicNumber,
    InvalidVersion(u16),
    InvalidChecksum,
}

impl From<io::Error> for BundleError {
    fn from(err: io::Error) -> Self {
        BundleError::Io(err)
    }
}

impl From<bincode::Error> for BundleError {
    fn from(err: bincode::Error) -> Self {
        BundleError::Encoding(err)
    }
}

impl std::fmt::Display for BundleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BundleError::Io(e) => write!(f, "IO error: {}", e),
            BundleError::Encoding(e) => write!(f, "Encoding error: {}", e),
            BundleError::TooShort => write!(f, "Bundle file truncated"),
            BundleError::InvalidMagicNumber => write!(f, "Invalid magic number"),
            BundleError::InvalidVersion(v) => write!(f, "Invalid version: {}", v),
            BundleError::InvalidChecksum => write!(f, "Checksum mismatch"),
        }
    }
}

impl std::error::Error for BundleError {}

/// Save a compiled map bundle: magic, version, bincode payload, CRC32 of
/// the payload.
pub fn save_bundle<P: AsRef<Path>>(map: &WorldMap, path: P) -> Result<(), BundleError> {
    // Ensure directory exists
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }

    let payload = bincode::serialize(map)?;
    let checksum = crc32fast::hash(&payload);

    let mut file = File::create(path)?;
    file.write_all(&MAGIC_NUMBER)?;
    file.write_all(&VERSION.to_le_bytes())?;
    file.write_all(&payload)?;
    file.write_all(&checksum.to_le_bytes())?;
    file.sync_all()?;
    Ok(())
}

/// Load a compiled map bundle, verifying magic, version, and checksum.
pub fn load_bundle<P: AsRef<Path>>(path: P) -> Result<WorldMap, BundleError> {
    let bytes = fs::read(path)?;

    // Header (magic + version) plus trailing checksum
    if bytes.len() < MAGIC_NUMBER.len() + 2 + 4 {
        return Err(BundleError::TooShort);
    }

    if bytes[..4] != MAGIC_NUMBER {
        return Err(BundleError::InvalidMagicNumber);
    }

    let version = u16::from_le_bytes([bytes[4], bytes[5]]);
    if version != VERSION {
        return Err(BundleError::InvalidVersion(version));
    }

    let payload = &bytes[6..bytes.len() - 4];
    let checksum_bytes = &bytes[bytes.len() - 4..];
    let expected_checksum = u32::from_le_bytes([
        checksum_bytes[0],
        checksum_bytes[1],
        checksum_bytes[2],
        checksum_bytes[3],
    ]);
    if crc32fast::hash(payload) != expected_checksum {
        return Err(BundleError::InvalidChecksum);
    }

    Ok(bincode::deserialize(payload)?)
}

/// Check if a bundle file exists
pub fn bundle_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}
