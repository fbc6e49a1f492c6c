//! Streaming content digests for snapshot files.

use crate::error::{CompareError, ScanError};
use digest::Digest;
use sha2::Sha256;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Read buffer size fed into the digest accumulator. Tunable for memory,
/// not correctness: the chunked digest equals a whole-file digest.
const CHUNK_SIZE: usize = 8192;

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// 256-bit SHA-2, the default change-detection digest.
    #[default]
    Sha256,
    /// BLAKE3, 256-bit output.
    Blake3,
}

impl Algorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Sha256 => "sha256",
            Algorithm::Blake3 => "blake3",
        }
    }
}

impl FromStr for Algorithm {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" => Ok(Algorithm::Sha256),
            "blake3" => Ok(Algorithm::Blake3),
            other => Err(CompareError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Compute the content digest of a file, rendered as lowercase hex.
///
/// The file is read in fixed-size chunks and streamed into an incremental
/// digest accumulator, so memory use is bounded regardless of file size.
/// Any open or mid-stream read failure propagates; a partial digest is
/// never returned.
pub fn hash_file(path: &Path, algorithm: Algorithm) -> Result<String, ScanError> {
    match algorithm {
        Algorithm::Sha256 => digest_file::<Sha256>(path),
        Algorithm::Blake3 => digest_file::<blake3::Hasher>(path),
    }
}

fn digest_file<D: Digest>(path: &Path) -> Result<String, ScanError> {
    let mut file = File::open(path).map_err(|e| ScanError::Hash {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut hasher = D::new();
    let mut buffer = [0u8; CHUNK_SIZE];
    loop {
        let read = file.read(&mut buffer).map_err(|e| ScanError::Hash {
            path: path.to_path_buf(),
            source: e,
        })?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }

    Ok(hex::encode(hasher.finalize()))
}
