/*
 * Copyright (c) 2024, United States Government, as represented by the
 * Administrator of the National Aeronautics and Space Administration.
 * All rights reserved.
 *
 * The “quicklook” software is licensed under the Apache License, Version 2.0
 * (the "License"); you may not use this file except in compliance with the
 * License. You may obtain a copy of the License at
 * http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */
#![allow(unused)]

//! download GOES-R ABI L1b radiance files for one UTC hour and spectral band, then
//! render each local data file into a color mapped quicklook image.
//! Retrieval is idempotent - files already present in the output dir are not
//! downloaded again

use lazy_static::lazy_static;
use structopt::StructOpt;
use regex::Regex;

use quicklook_common::fs::{ensure_writable_dir, matching_files_in_dir};
use quicklook_common::s3::create_s3_client;
use quicklook_abi::{fetch_frame_files, load_config, FrameRequest, GoesrSourceConfig, Result};
use quicklook_abi::render::{quicklook_path, render_quicklook, Colormap};

#[derive(StructOpt)]
#[structopt(about="GOES-R ABI L1b quicklook tool")]
struct CliOpts {
    /// spectral band for which to pull imagery (1 thru 16)
    #[structopt(short,long,default_value="13")]
    band: String,

    /// directory into which data files and quicklooks are stored
    #[structopt(short,long,default_value=".")]
    output_dir: String,

    /// start of the frame hour, as YYYY-DDD-HH (year, day-of-year, UTC hour)
    #[structopt(short,long,default_value="2020-146-00")]
    time: String,

    /// render with a grayscale palette instead of the spectral one
    #[structopt(long)]
    gray: bool,

    /// optional pathname of a GoesrSourceConfig RON file (defaults to GOES-16 full disk)
    #[structopt(short,long)]
    config: Option<String>,
}

lazy_static! {
    static ref ARGS: CliOpts = CliOpts::from_args();
    static ref NC_RE: Regex = Regex::new( r".*\.nc$").unwrap();
}

#[tokio::main]
async fn main ()->Result<()> {
    tracing_subscriber::fmt::init();

    let config: GoesrSourceConfig = match &ARGS.config {
        Some(path) => load_config( path)?,
        None => GoesrSourceConfig::default()
    };
    let request = FrameRequest::new( &ARGS.band, &ARGS.time, &ARGS.output_dir)?;
    ensure_writable_dir( &request.output_dir)?;

    let client = create_s3_client( config.s3_region.clone()).await?;

    //--- retrieval
    let files = fetch_frame_files( &client, &config, &request).await?;
    println!("retrieved {} data files for band {} at {}", files.len(), request.band, ARGS.time);

    //--- rendering (all data files present in the output dir, not just this run's)
    let cmap = if ARGS.gray { Colormap::grayscale() } else { Colormap::ncar() };

    let mut nc_files = matching_files_in_dir( &request.output_dir, &NC_RE)?;
    nc_files.sort();

    for file in &nc_files {
        let img_path = quicklook_path( file, "jpg");
        println!("rendering {}", img_path.display());
        render_quicklook( file, &img_path, &cmap)?;
    }
    println!("done ({} quicklooks).", nc_files.len());

    Ok(())
}
