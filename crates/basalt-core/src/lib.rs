//! # BASALT Core
//!
//! Shared foundations for the BASALT graphics buffer allocation backends.
//!
//! This crate defines the contract between the generic buffer-allocation
//! dispatcher and the per-hardware backend crates:
//!
//! - The [`BufferDescriptor`] record that travels across the dispatcher ABI
//! - The shared pixel-format table and geometry-alignment rules
//! - The [`KmsCaps`] record backends fill during capability negotiation
//! - The unified [`Error`] type
//! - The [`BackendDriver`] trait every backend implements
//!
//! ## Design Principles
//!
//! 1. **Compile-time polymorphism**: backends are selected once at device
//!    open, then dispatched statically through [`BackendDriver`]
//! 2. **Strong typing at the ABI edge**: raw format codes and global names
//!    are newtypes, never bare integers
//! 3. **No panics**: every fallible operation returns [`Result`]

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

#[cfg(feature = "std")]
extern crate std;

// =============================================================================
// MODULE EXPORTS
// =============================================================================

pub mod descriptor;
pub mod driver;
pub mod error;
pub mod format;
pub mod geometry;
pub mod kms;

// Re-exports for convenience
pub use descriptor::{BufferDescriptor, GlobalName, UsageFlags};
pub use driver::{BackendDriver, BackendKind, MapRegion};
pub use error::{Error, Result};
pub use format::PixelFormat;
pub use kms::{KmsCaps, SwapMode};
