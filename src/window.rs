// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use std::str::FromStr;
use thiserror::Error;

/// Rectangular region used for ROI and autofocus targeting.
///
/// All coordinates are normalized to the active sensor area, so `x`, `y`,
/// `width`, and `height` each fall within `0.0..=1.0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Window {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Failure decoding a [`Window`] from its textual form.
#[derive(Debug, Error, PartialEq)]
pub enum ParseWindowError {
    #[error("expected 4 comma-separated values, got {0}")]
    Arity(usize),
    #[error("{0:?} is not a number")]
    NotANumber(String),
    #[error("{0} is outside the 0.0..=1.0 range")]
    OutOfRange(f32),
}

impl FromStr for Window {
    type Err = ParseWindowError;

    /// Decodes `"x,y,width,height"` with every value within `0.0..=1.0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split(',').collect();
        if tokens.len() != 4 {
            return Err(ParseWindowError::Arity(tokens.len()));
        }

        let mut vals = [0f32; 4];
        for (val, token) in vals.iter_mut().zip(&tokens) {
            *val = token
                .parse()
                .map_err(|_| ParseWindowError::NotANumber(token.to_string()))?;
            if !(0.0..=1.0).contains(val) {
                return Err(ParseWindowError::OutOfRange(*val));
            }
        }

        Ok(Window {
            x: vals[0],
            y: vals[1],
            width: vals[2],
            height: vals[3],
        })
    }
}
