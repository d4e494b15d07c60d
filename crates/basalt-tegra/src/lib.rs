//! # BASALT Tegra Backend
//!
//! Buffer allocation over the NVIDIA Tegra kernel memory-management
//! interface.
//!
//! The hard protocol work lives in the kernel-interface library behind
//! the [`TegraKmd`] trait; this crate is the adapter between the generic
//! [`BufferDescriptor`] contract and that interface: handle translation,
//! format-to-bytes-per-pixel sizing, stride alignment, and lifecycle
//! bookkeeping of a buffer versus its backing kernel object.
//!
//! [`BufferDescriptor`]: basalt_core::BufferDescriptor

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]
#![warn(clippy::all)]

#[cfg(feature = "std")]
extern crate std;

pub mod driver;
pub mod kmd;

pub use driver::{TegraBuffer, TegraDriver};
pub use kmd::{Errno, KmdResult, TegraKmd};
