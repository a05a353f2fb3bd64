// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use clap::Parser;
use rpicam_params::{args::Args, params::Params, wire};
use std::error::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let mut params = Params::from(args);
    info!(
        "camera {} configured {}x{} @ {} fps, {} kbit/s, profile {} level {}",
        params.camera_id,
        params.width,
        params.height,
        params.fps,
        params.bitrate / 1000,
        params.profile,
        params.level,
    );

    // Control buffers arrive newline-delimited on stdin, one buffer per
    // line. A rejected buffer leaves the parameters partially updated and
    // the stream keeps going; the sender may retry with a corrected one.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match wire::apply(line.as_bytes(), &mut params) {
            Ok(()) => debug!(
                "control buffer applied, {} capture buffers",
                params.capture_buffer_count
            ),
            Err(e) => warn!("control buffer rejected: {e}"),
        }
    }

    Ok(())
}
