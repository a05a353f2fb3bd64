// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use crate::{sensor_mode::SensorMode, window::Window};
use core::fmt;

/// H.264 encoding profile programmed into the hardware encoder.
///
/// Unrecognized profile names resolve to [`H264Profile::High`] rather than
/// failing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum H264Profile {
    /// Baseline profile (no B-frames, CAVLC only)
    Baseline,
    /// Main profile
    Main,
    /// High profile
    #[default]
    High,
}

impl From<&str> for H264Profile {
    fn from(value: &str) -> Self {
        match value {
            "baseline" => H264Profile::Baseline,
            "main" => H264Profile::Main,
            _ => H264Profile::High,
        }
    }
}

impl H264Profile {
    /// V4L2 control value (`V4L2_MPEG_VIDEO_H264_PROFILE_*`).
    pub const fn v4l2(self) -> u32 {
        match self {
            H264Profile::Baseline => 0,
            H264Profile::Main => 2,
            H264Profile::High => 4,
        }
    }
}

impl fmt::Display for H264Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            H264Profile::Baseline => write!(f, "baseline"),
            H264Profile::Main => write!(f, "main"),
            H264Profile::High => write!(f, "high"),
        }
    }
}

/// H.264 encoding level programmed into the hardware encoder.
///
/// Unrecognized level names resolve to [`H264Level::L4_2`], mirroring the
/// profile fallback.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum H264Level {
    /// Level 4.0
    L4_0,
    /// Level 4.1
    L4_1,
    /// Level 4.2
    #[default]
    L4_2,
}

impl From<&str> for H264Level {
    fn from(value: &str) -> Self {
        match value {
            "4.0" => H264Level::L4_0,
            "4.1" => H264Level::L4_1,
            _ => H264Level::L4_2,
        }
    }
}

impl H264Level {
    /// V4L2 control value (`V4L2_MPEG_VIDEO_H264_LEVEL_*`).
    pub const fn v4l2(self) -> u32 {
        match self {
            H264Level::L4_0 => 11,
            H264Level::L4_1 => 12,
            H264Level::L4_2 => 13,
        }
    }
}

impl fmt::Display for H264Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            H264Level::L4_0 => write!(f, "4.0"),
            H264Level::L4_1 => write!(f, "4.1"),
            H264Level::L4_2 => write!(f, "4.2"),
        }
    }
}

/// Live configuration of the capture and encode pipeline.
///
/// One instance exists per process. It is either built once from the
/// startup environment ([`crate::args::Args`]) or default-initialized and
/// then updated in place by [`crate::wire::apply`] as control buffers
/// arrive. The capture and encoder stages read the fields directly on
/// their own schedule.
///
/// # Thread Safety
///
/// `Params` has no interior locking. Hosts running the control channel and
/// the capture loop on separate threads must serialize access themselves.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    pub camera_id: u32,
    pub width: u32,
    pub height: u32,
    pub h_flip: bool,
    pub v_flip: bool,
    pub brightness: f32,
    pub contrast: f32,
    pub saturation: f32,
    pub sharpness: f32,
    pub exposure: String,
    pub awb: String,
    pub denoise: String,
    /// Shutter time in microseconds, 0 for auto
    pub shutter: u32,
    pub metering: String,
    pub gain: f32,
    /// Exposure-value compensation
    pub ev: f32,
    /// Region of interest, full frame when absent
    pub roi: Option<Window>,
    pub tuning_file: String,
    /// Sensor mode selection, automatic when absent
    pub mode: Option<SensorMode>,
    pub fps: u32,
    /// Keyframe interval in frames
    pub idr_period: u32,
    pub bitrate: u32,
    pub profile: H264Profile,
    pub level: H264Level,
    pub af_mode: String,
    pub af_range: String,
    pub af_speed: String,
    pub lens_position: f32,
    /// Autofocus window, full frame when absent
    pub af_window: Option<Window>,
    /// Number of output buffers requested from the camera
    pub buffer_count: u32,
    /// Number of capture buffers, always double `buffer_count`
    pub capture_buffer_count: u32,
}
