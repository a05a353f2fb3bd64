// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! # Raspberry Pi Camera Parameter Model
//!
//! This library holds the runtime configuration of the camera capture and
//! encode helper: the [`params::Params`] structure read by the capture
//! pipeline, its one-time population from the startup environment, and the
//! incremental update protocol driven by control buffers delivered at
//! runtime.
//!
//! ## Features
//!
//! - **Startup loading**: every parameter arrives through a required
//!   environment variable ([`args::Args`]); a missing variable fails
//!   startup instead of inventing a default.
//! - **Incremental updates**: [`wire::apply`] folds a space-separated
//!   `Key=value` buffer into the live parameters, touching only the fields
//!   named in the buffer.
//! - **Permissive scalars, strict sub-objects**: malformed numbers read as
//!   zero and unknown keys are skipped, while a malformed region or sensor
//!   mode aborts the update with a descriptive error.
//!
//! ## Example
//!
//! ```
//! use rpicam_params::{params::Params, wire};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut params = Params::default();
//! wire::apply(b"Width=1920 Height=1080 Bitrate=5000000", &mut params)?;
//!
//! assert_eq!(params.width, 1920);
//! assert_eq!(params.capture_buffer_count, 2 * params.buffer_count);
//! # Ok(())
//! # }
//! ```
//!
//! ## Thread Safety
//!
//! The library performs no locking and no I/O. A host sharing one
//! [`params::Params`] between a control channel and the capture loop must
//! serialize access itself.

pub mod args;
pub mod params;
pub mod sensor_mode;
pub mod window;
pub mod wire;
