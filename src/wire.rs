// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! Control buffer parsing for runtime parameter updates.
//!
//! A control buffer is a space-separated list of `Key=value` entries, for
//! example `Brightness=0.2 ROI=0.25,0.25,0.5,0.5 Bitrate=2000000`. Each
//! recognized entry overwrites one field of [`Params`]; fields without an
//! entry keep their previous value, so a sender only transmits what
//! changed. Unrecognized keys are skipped.

use crate::{
    params::{H264Level, H264Profile, Params},
    sensor_mode::ParseSensorModeError,
    window::{ParseWindowError, Window},
};
use std::str::{FromStr, Utf8Error};
use thiserror::Error;
use tracing::debug;

/// Failure applying a control buffer to the live parameters.
///
/// Entries preceding the failing one have already been applied when this
/// is returned; there is no rollback. The caller keeps the partially
/// updated parameters and may retry with a corrected buffer.
#[derive(Debug, Error)]
pub enum ApplyError {
    #[error("control buffer is not valid UTF-8: {0}")]
    Encoding(#[from] Utf8Error),

    #[error("invalid {key}: {source}")]
    Window {
        key: &'static str,
        source: ParseWindowError,
    },

    #[error("invalid Mode: {0}")]
    Mode(#[from] ParseSensorModeError),
}

/// `atoi`/`atof` leniency: malformed numbers read as zero, never an error.
fn num<T: FromStr + Default>(value: &str) -> T {
    value.parse().unwrap_or_default()
}

fn set_window(
    slot: &mut Option<Window>,
    key: &'static str,
    value: &str,
) -> Result<(), ApplyError> {
    if value.is_empty() {
        *slot = None;
        return Ok(());
    }
    let window = value
        .parse()
        .map_err(|source| ApplyError::Window { key, source })?;
    *slot = Some(window);
    Ok(())
}

fn set_mode(params: &mut Params, value: &str) -> Result<(), ApplyError> {
    if value.is_empty() {
        params.mode = None;
        return Ok(());
    }
    params.mode = Some(value.parse()?);
    Ok(())
}

type Setter = fn(&mut Params, &str) -> Result<(), ApplyError>;

/// Wire key table, matched case-sensitively. One entry per updatable
/// field; the key names are the stable protocol vocabulary and do not
/// track internal field renames.
const SETTERS: &[(&str, Setter)] = &[
    ("CameraID", |p, v| {
        p.camera_id = num(v);
        Ok(())
    }),
    ("Width", |p, v| {
        p.width = num(v);
        Ok(())
    }),
    ("Height", |p, v| {
        p.height = num(v);
        Ok(())
    }),
    ("HFlip", |p, v| {
        p.h_flip = v == "1";
        Ok(())
    }),
    ("VFlip", |p, v| {
        p.v_flip = v == "1";
        Ok(())
    }),
    ("Brightness", |p, v| {
        p.brightness = num(v);
        Ok(())
    }),
    ("Contrast", |p, v| {
        p.contrast = num(v);
        Ok(())
    }),
    ("Saturation", |p, v| {
        p.saturation = num(v);
        Ok(())
    }),
    ("Sharpness", |p, v| {
        p.sharpness = num(v);
        Ok(())
    }),
    ("Exposure", |p, v| {
        p.exposure = v.to_string();
        Ok(())
    }),
    ("AWB", |p, v| {
        p.awb = v.to_string();
        Ok(())
    }),
    ("Denoise", |p, v| {
        p.denoise = v.to_string();
        Ok(())
    }),
    ("Shutter", |p, v| {
        p.shutter = num(v);
        Ok(())
    }),
    ("Metering", |p, v| {
        p.metering = v.to_string();
        Ok(())
    }),
    ("Gain", |p, v| {
        p.gain = num(v);
        Ok(())
    }),
    ("EV", |p, v| {
        p.ev = num(v);
        Ok(())
    }),
    ("ROI", |p, v| set_window(&mut p.roi, "ROI", v)),
    ("TuningFile", |p, v| {
        p.tuning_file = v.to_string();
        Ok(())
    }),
    ("Mode", set_mode),
    ("FPS", |p, v| {
        p.fps = num(v);
        Ok(())
    }),
    ("IDRPeriod", |p, v| {
        p.idr_period = num(v);
        Ok(())
    }),
    ("Bitrate", |p, v| {
        p.bitrate = num(v);
        Ok(())
    }),
    ("Profile", |p, v| {
        p.profile = H264Profile::from(v);
        Ok(())
    }),
    ("Level", |p, v| {
        p.level = H264Level::from(v);
        Ok(())
    }),
    ("AfMode", |p, v| {
        p.af_mode = v.to_string();
        Ok(())
    }),
    ("AfRange", |p, v| {
        p.af_range = v.to_string();
        Ok(())
    }),
    ("AfSpeed", |p, v| {
        p.af_speed = v.to_string();
        Ok(())
    }),
    ("LensPosition", |p, v| {
        p.lens_position = num(v);
        Ok(())
    }),
    ("AfWindow", |p, v| set_window(&mut p.af_window, "AfWindow", v)),
];

/// Applies a control buffer to `params` in place.
///
/// Scalar values parse with the same leniency as the startup environment:
/// malformed numbers read as zero, unrecognized profile or level names
/// fall back to their defaults, and flips are on iff the value is `1`.
/// An empty value for `ROI`, `AfWindow`, or `Mode` clears the field; the
/// value previously occupying it is dropped.
///
/// On success the buffer counts are renegotiated for live reconfiguration
/// and `capture_buffer_count` remains double `buffer_count`.
///
/// # Errors
///
/// Returns an error naming the offending key when a `ROI`, `AfWindow`, or
/// `Mode` value fails to decode. Processing stops at the failing entry and
/// earlier entries from the same buffer stay applied.
pub fn apply(buf: &[u8], params: &mut Params) -> Result<(), ApplyError> {
    let text = std::str::from_utf8(buf)?;

    for entry in text.split(' ') {
        let Some((key, value)) = entry.split_once('=') else {
            continue;
        };
        match SETTERS.iter().find(|(name, _)| *name == key) {
            Some((_, setter)) => setter(params, value)?,
            None => debug!("ignoring unrecognized key {key}"),
        }
    }

    params.buffer_count = 6;
    params.capture_buffer_count = params.buffer_count * 2;
    Ok(())
}
