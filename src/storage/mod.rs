//! Storage layer: blob port and snapshot codec.

pub mod blob;
pub mod codec;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use codec::{
    decode_snapshot, encode_snapshot, parse_snapshot, SnapshotEnvelope, SNAPSHOT_VERSION,
};

/// Blob keys as constants.
pub mod keys {
    /// The whole workout list lives under this single key.
    pub const WORKOUTS: &str = "workouts";
}
