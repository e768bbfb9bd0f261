//! Binary archive format for persisted combat logs.
//!
//! Logs are encoded with bincode 1.x (fixed layout, deterministic for a given
//! value) and fingerprinted with SHA-256 over the encoded bytes. A viewer can
//! compare the digest stored next to an archive with the recomputed one to
//! detect tampering or codec drift.

use sha2::{Digest, Sha256};

use crate::error::{ErrorSeverity, GameError};

use super::CombatLog;

/// SHA-256 digest of an encoded log.
pub type LogDigest = [u8; 32];

/// Errors raised while archiving or restoring a log.
#[derive(Debug, thiserror::Error)]
pub enum LogCodecError {
    #[error("failed to encode combat log: {0}")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode combat log: {0}")]
    Decode(#[source] bincode::Error),

    #[error("combat log digest mismatch")]
    DigestMismatch { expected: LogDigest, actual: LogDigest },
}

impl GameError for LogCodecError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Encode(_) => ErrorSeverity::Internal,
            Self::Decode(_) | Self::DigestMismatch { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Encode(_) => "LOG_ENCODE_FAILED",
            Self::Decode(_) => "LOG_DECODE_FAILED",
            Self::DigestMismatch { .. } => "LOG_DIGEST_MISMATCH",
        }
    }
}

impl CombatLog {
    /// Encodes the log into its archive bytes.
    pub fn encode(&self) -> Result<Vec<u8>, LogCodecError> {
        bincode::serialize(self).map_err(LogCodecError::Encode)
    }

    /// Restores a log from archive bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self, LogCodecError> {
        bincode::deserialize(bytes).map_err(LogCodecError::Decode)
    }

    /// Restores a log and checks it against a previously stored digest.
    pub fn decode_verified(bytes: &[u8], expected: &LogDigest) -> Result<Self, LogCodecError> {
        let actual = digest_bytes(bytes);
        if &actual != expected {
            return Err(LogCodecError::DigestMismatch {
                expected: *expected,
                actual,
            });
        }
        Self::decode(bytes)
    }

    /// SHA-256 over the archive encoding.
    pub fn digest(&self) -> Result<LogDigest, LogCodecError> {
        Ok(digest_bytes(&self.encode()?))
    }
}

/// SHA-256 over raw archive bytes.
pub fn digest_bytes(bytes: &[u8]) -> LogDigest {
    Sha256::digest(bytes).into()
}
