//! # Goal
//! Growable random access sequences with explicit size and capacity, whose
//! spare slots are always initialized so that growth never reads stale memory.
//!
//! # Architecture
//! - Packs, through the [`Pack`] trait, are the base sequences. They differ only
//!   in the backing store:
//!     - [`ArrayPack`], a `Vec` filled by a factory of default values.
//!     - [`BufferPack`], a fixed width numeric buffer filled with zeros.
//!     - [`InstancePack`], pooled instances whose lifecycle goes through a [`Duplicator`].
//! - Overlays wrap any pack and reinterpret its slots:
//!     - [`CircularPack`], a ring buffer that evicts, grows or rejects on overflow.
//!     - [`PackHeap`], a binary max heap ordered by a comparator.
//! - Algorithms, like quicksort and bisect, work on anything that is a [`Sequence`].
//!
//! All containers are single threaded and validate arguments before mutating,
//! so a returned [`PackError`] means the container is unchanged.
//!
//! [`Sequence`]: algorithm::Sequence

pub mod algorithm;
#[cfg(feature = "circular")]
pub mod circular;
pub mod duplicator;
pub mod error;
#[cfg(feature = "heap")]
pub mod heap;
pub mod pack;

#[cfg(feature = "circular")]
pub use circular::{CircularPack, Overflow};
pub use duplicator::{CloneDuplicator, Duplicator, PoolDuplicator, Reusable};
pub use error::{PackError, PackResult};
#[cfg(feature = "heap")]
pub use heap::PackHeap;
pub use pack::{ArrayPack, BufferKind, BufferPack, InstancePack, Numeric, Pack};
