// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use crate::{
    params::{H264Level, H264Profile, Params},
    window::Window,
};
use clap::{ArgAction, Parser};
use std::convert::Infallible;

/// Numeric conversion with C `atoi`/`atof` leniency: malformed input reads
/// as zero rather than failing.
fn lenient_u32(value: &str) -> Result<u32, Infallible> {
    Ok(value.parse().unwrap_or_default())
}

fn lenient_f32(value: &str) -> Result<f32, Infallible> {
    Ok(value.parse().unwrap_or_default())
}

/// Flip switches are on iff the value is literally `1`.
fn flip_from_str(value: &str) -> Result<bool, Infallible> {
    Ok(value == "1")
}

fn profile_from_str(value: &str) -> Result<H264Profile, Infallible> {
    Ok(H264Profile::from(value))
}

fn level_from_str(value: &str) -> Result<H264Level, Infallible> {
    Ok(H264Level::from(value))
}

/// Startup configuration for the camera helper.
///
/// Every parameter is required and carries no default: the supervising
/// process owns the configuration and must provide the full set, normally
/// through environment variables. A missing variable is a startup failure,
/// never a silently substituted value. Only the H.264 profile and level
/// tolerate unrecognized input, falling back to `high` / `4.2`.
///
/// # Example
///
/// ```bash
/// export CAMERA_ID=0 WIDTH=1920 HEIGHT=1080 H_FLIP=0 V_FLIP=0
/// export BRIGHTNESS=0 CONTRAST=1 SATURATION=1 SHARPNESS=1
/// export EXPOSURE=normal AWB=auto DENOISE=off METERING=centre
/// export SHUTTER=0 GAIN=0 EV=0 ROI=0,0,1,1
/// export TUNING_FILE=/usr/share/libcamera/tuning.json
/// export FPS=30 IDR_PERIOD=60 BITRATE=5000000 PROFILE=high LEVEL=4.2
/// rpicam-params
/// ```
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Camera index on the libcamera bus
    #[arg(long, env = "CAMERA_ID", value_parser = lenient_u32)]
    pub camera_id: u32,

    /// Capture width in pixels
    #[arg(long, env = "WIDTH", value_parser = lenient_u32)]
    pub width: u32,

    /// Capture height in pixels
    #[arg(long, env = "HEIGHT", value_parser = lenient_u32)]
    pub height: u32,

    /// Mirror the image horizontally (1 enables, anything else disables)
    #[arg(long, env = "H_FLIP", value_parser = flip_from_str, action = ArgAction::Set)]
    pub h_flip: bool,

    /// Mirror the image vertically (1 enables, anything else disables)
    #[arg(long, env = "V_FLIP", value_parser = flip_from_str, action = ArgAction::Set)]
    pub v_flip: bool,

    /// Image brightness adjustment
    #[arg(long, env = "BRIGHTNESS", value_parser = lenient_f32, allow_hyphen_values = true)]
    pub brightness: f32,

    /// Image contrast adjustment
    #[arg(long, env = "CONTRAST", value_parser = lenient_f32)]
    pub contrast: f32,

    /// Image saturation adjustment
    #[arg(long, env = "SATURATION", value_parser = lenient_f32)]
    pub saturation: f32,

    /// Image sharpness adjustment
    #[arg(long, env = "SHARPNESS", value_parser = lenient_f32)]
    pub sharpness: f32,

    /// Exposure mode (normal, short, long, custom)
    #[arg(long, env = "EXPOSURE")]
    pub exposure: String,

    /// Auto-white-balance mode (auto, incandescent, daylight, ...)
    #[arg(long, env = "AWB")]
    pub awb: String,

    /// Denoise mode (off, cdn_off, cdn_fast, cdn_hq)
    #[arg(long, env = "DENOISE")]
    pub denoise: String,

    /// Shutter time in microseconds, 0 for auto
    #[arg(long, env = "SHUTTER", value_parser = lenient_u32)]
    pub shutter: u32,

    /// Metering mode (centre, spot, matrix, custom)
    #[arg(long, env = "METERING")]
    pub metering: String,

    /// Analogue gain, 0 for auto
    #[arg(long, env = "GAIN", value_parser = lenient_f32)]
    pub gain: f32,

    /// Exposure-value compensation
    #[arg(long, env = "EV", value_parser = lenient_f32, allow_hyphen_values = true)]
    pub ev: f32,

    /// Region of interest as normalized x,y,width,height
    #[arg(long, env = "ROI")]
    pub roi: Window,

    /// Path to the camera tuning file
    #[arg(long, env = "TUNING_FILE")]
    pub tuning_file: String,

    /// Capture frame rate
    #[arg(long, env = "FPS", value_parser = lenient_u32)]
    pub fps: u32,

    /// Keyframe interval in frames
    #[arg(long, env = "IDR_PERIOD", value_parser = lenient_u32)]
    pub idr_period: u32,

    /// H.264 bitrate in bits per second
    #[arg(long, env = "BITRATE", value_parser = lenient_u32)]
    pub bitrate: u32,

    /// H.264 profile (baseline, main, high)
    #[arg(long, env = "PROFILE", value_parser = profile_from_str)]
    pub profile: H264Profile,

    /// H.264 level (4.0, 4.1, 4.2)
    #[arg(long, env = "LEVEL", value_parser = level_from_str)]
    pub level: H264Level,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<Args> for Params {
    fn from(args: Args) -> Self {
        Params {
            camera_id: args.camera_id,
            width: args.width,
            height: args.height,
            h_flip: args.h_flip,
            v_flip: args.v_flip,
            brightness: args.brightness,
            contrast: args.contrast,
            saturation: args.saturation,
            sharpness: args.sharpness,
            exposure: args.exposure,
            awb: args.awb,
            denoise: args.denoise,
            shutter: args.shutter,
            metering: args.metering,
            gain: args.gain,
            ev: args.ev,
            roi: Some(args.roi),
            tuning_file: args.tuning_file,
            mode: None,
            fps: args.fps,
            idr_period: args.idr_period,
            bitrate: args.bitrate,
            profile: args.profile,
            level: args.level,
            af_mode: String::new(),
            af_range: String::new(),
            af_speed: String::new(),
            lens_position: 0.0,
            af_window: None,
            buffer_count: 3,
            capture_buffer_count: 6,
        }
    }
}
