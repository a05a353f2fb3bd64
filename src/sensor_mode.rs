// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use std::str::FromStr;
use thiserror::Error;

/// Sensor readout mode requested from the camera.
///
/// Selects the raw frame geometry and packing the sensor delivers before
/// ISP processing, e.g. `1920:1080:12:P` for a 1080p 12-bit packed mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SensorMode {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u32,
    pub packed: bool,
}

/// Failure decoding a [`SensorMode`] from its textual form.
#[derive(Debug, Error, PartialEq)]
pub enum ParseSensorModeError {
    #[error("expected width:height[:bit-depth[:packing]], got {0:?}")]
    Malformed(String),
    #[error("{0:?} is not a number")]
    NotANumber(String),
    #[error("unknown packing {0:?}, expected P or U")]
    UnknownPacking(String),
}

impl FromStr for SensorMode {
    type Err = ParseSensorModeError;

    /// Decodes `"width:height[:bit_depth[:packing]]"`.
    ///
    /// Bit depth defaults to 12 and packing to packed when omitted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if !(2..=4).contains(&parts.len()) {
            return Err(ParseSensorModeError::Malformed(s.to_string()));
        }

        let number = |raw: &str| {
            raw.parse::<u32>()
                .map_err(|_| ParseSensorModeError::NotANumber(raw.to_string()))
        };

        let width = number(parts[0])?;
        let height = number(parts[1])?;
        let bit_depth = match parts.get(2) {
            Some(raw) => number(raw)?,
            None => 12,
        };
        let packed = match parts.get(3) {
            None => true,
            Some(raw) if raw.eq_ignore_ascii_case("p") => true,
            Some(raw) if raw.eq_ignore_ascii_case("u") => false,
            Some(raw) => return Err(ParseSensorModeError::UnknownPacking(raw.to_string())),
        };

        Ok(SensorMode {
            width,
            height,
            bit_depth,
            packed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full() {
        let mode: SensorMode = "1920:1080:10:U".parse().unwrap();
        assert_eq!(
            mode,
            SensorMode {
                width: 1920,
                height: 1080,
                bit_depth: 10,
                packed: false
            }
        );
    }

    #[test]
    fn test_packing_defaults_to_packed() {
        let mode: SensorMode = "1920:1080:10".parse().unwrap();
        assert!(mode.packed);

        let mode: SensorMode = "1920:1080:10:p".parse().unwrap();
        assert!(mode.packed);
    }

    #[test]
    fn test_bit_depth_defaults_to_12() {
        let mode: SensorMode = "3840:2160".parse().unwrap();
        assert_eq!(mode.bit_depth, 12);
        assert!(mode.packed);
    }

    #[test]
    fn test_too_few_components() {
        assert_eq!(
            "1920".parse::<SensorMode>(),
            Err(ParseSensorModeError::Malformed("1920".to_string()))
        );
        assert!("".parse::<SensorMode>().is_err());
    }

    #[test]
    fn test_bad_number() {
        assert_eq!(
            "1920:tall".parse::<SensorMode>(),
            Err(ParseSensorModeError::NotANumber("tall".to_string()))
        );
    }

    #[test]
    fn test_bad_packing() {
        assert_eq!(
            "1920:1080:12:X".parse::<SensorMode>(),
            Err(ParseSensorModeError::UnknownPacking("X".to_string()))
        );
    }
}
