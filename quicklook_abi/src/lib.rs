/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “quicklook” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

//! retrieval of GOES-R ABI L1b radiance files from the public NOAA S3 buckets, plus
//! rendering of retrieved files into color mapped quicklook images.
//!
//! The bucket key layout for full-disk radiances is
//! `«product»/«year»/«day-of-year»/«hour»/OR_«product»-«mode»C«band»_G«sat»_s«dtg»_e«dtg»_c«dtg».nc`
//! with all times in UTC.

use std::path::{Path,PathBuf};
use serde::{Deserialize,Serialize};
use chrono::{DateTime, Datelike, Timelike, Utc};
use regex::Regex;
use lazy_static::lazy_static;
use tracing::{debug,info,warn};

use quicklook_common::datetime::{utc_from_yo_hour, utc_from_yo_hms_tenths, Dated};
use quicklook_common::s3::{S3Client, S3Object, get_s3_objects, download_s3_object};

mod errors;
pub use errors::*;

pub mod reader;
pub mod render;

/* #region configuration *****************************************************************************/

/// infrastructure parameters of the GOES-R data source. Everything that does not
/// change between invocations goes here, not into the per-run [`FrameRequest`]
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct GoesrSourceConfig {
    pub satellite: u8,     // 16 or 18
    pub s3_region: String, // e.g. "us-east-1"
    pub bucket: String,    // e.g. "noaa-goes16"
    pub product: String,   // e.g. "ABI-L1b-RadF"
    pub mode: String,      // ABI scan mode, e.g. "M6"
}

impl Default for GoesrSourceConfig {
    fn default() -> Self {
        Self {
            satellite: 16,
            s3_region: "us-east-1".to_string(),
            bucket: "noaa-goes16".to_string(),
            product: "ABI-L1b-RadF".to_string(),
            mode: "M6".to_string(),
        }
    }
}

/// load a RON config of type C from an explicit pathname
pub fn load_config<C,P> (path: P) -> Result<C> where C: for<'a> Deserialize<'a>, P: AsRef<Path> {
    let data = std::fs::read( path.as_ref())?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}

/// explicit per-invocation request: one spectral band for one UTC hour, stored
/// into one destination directory
#[derive(Debug,Clone)]
pub struct FrameRequest {
    pub band: u8,
    pub start: DateTime<Utc>,
    pub output_dir: PathBuf,
}

impl FrameRequest {
    pub fn new (band_spec: &str, time_spec: &str, output_dir: impl AsRef<Path>) -> Result<Self> {
        let band = parse_band( band_spec)?;
        let start = parse_frame_time( time_spec)?;
        Ok( FrameRequest{ band, start, output_dir: output_dir.as_ref().to_path_buf() } )
    }
}

/// spectral band number from its command line form ("1".."16")
pub fn parse_band (s: &str) -> Result<u8> {
    let band: u8 = s.trim().parse().map_err(|_| config_error( format!("not a band number: {s:?}")))?;
    if (1..=16).contains(&band) {
        Ok(band)
    } else {
        Err( config_error( format!("band {band} outside 1..16")))
    }
}

lazy_static! {
    static ref FRAME_TIME_RE: Regex = Regex::new( r"^(\d{4})-(\d{3})-(\d{2})$").unwrap();
}

/// full UTC hour in "YYYY-DDD-HH" form (year, day-of-year, hour of day)
pub fn parse_frame_time (s: &str) -> Result<DateTime<Utc>> {
    let cap = FRAME_TIME_RE.captures( s.trim()).ok_or( config_error( format!("not a YYYY-DDD-HH timestamp: {s:?}")))?;

    let year: i32 = cap[1].parse().map_err(|_| config_error( format!("bad year in {s:?}")))?;
    let doy: u32 = cap[2].parse().map_err(|_| config_error( format!("bad day-of-year in {s:?}")))?;
    let hour: u32 = cap[3].parse().map_err(|_| config_error( format!("bad hour in {s:?}")))?;

    utc_from_yo_hour( year, doy, hour).ok_or( config_error( format!("no such date/hour: {s:?}")))
}

/* #endregion configuration */

/* #region ABI filename encoding *********************************************************************/

lazy_static! {
    static ref FILENAME_RE: Regex = Regex::new( r"(?:.*/)?([^_]+)_([^-]+)-([^-]+)-([^-]+)-(M\d+)C(\d{2})_G(\d+)_s(\d+)_e(\d+)_c(\d+)\.nc").unwrap();
    static ref DTG_RE: Regex = Regex::new( r"(\d{4})(\d{3})(\d{2})(\d{2})(\d{2})(\d)").unwrap();
}

/// file info as encoded in ABI L1b filenames, e.g.
/// `OR_ABI-L1b-RadF-M6C13_G16_s20201460000157_e20201460009476_c20201460009512.nc`
#[derive(Debug,PartialEq)]
pub struct AbiFileInfo {
    pub sys_env: String,    // e.g. "OR": operational realtime
    pub instrument: String, // "ABI"
    pub level: String,      // e.g. "L1b"
    pub product: String,    // e.g. "RadF"
    pub mode: String,       // scan mode, e.g. "M6"
    pub band: u8,
    pub sat_id: u32,        // e.g. 16
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub create_time: DateTime<Utc>,
}

/// parse AbiFileInfo from a given pathname. Returns None for names that do not
/// follow the ABI L1b encoding
pub fn parse_filename (path: impl AsRef<Path>) -> Option<AbiFileInfo> {
    let path: &Path = path.as_ref();
    let filename = path.file_name()?.to_str()?;
    let cap = FILENAME_RE.captures( filename)?;

    let sys_env = cap[1].to_string();
    let instrument = cap[2].to_string();
    let level = cap[3].to_string();
    let product = cap[4].to_string();
    let mode = cap[5].to_string();
    let band: u8 = cap[6].parse().ok()?;
    let sat_id: u32 = cap[7].parse().ok()?;
    let start_time = parse_abi_dtg( &cap[8])?;
    let end_time = parse_abi_dtg( &cap[9])?;
    let create_time = parse_abi_dtg( &cap[10])?;

    Some( AbiFileInfo{ sys_env, instrument, level, product, mode, band, sat_id, start_time, end_time, create_time } )
}

/// UTC time from an ABI date-time group `yyyydddhhmmsst` (t = tenths of second)
pub fn parse_abi_dtg (s: &str) -> Option<DateTime<Utc>> {
    let cap = DTG_RE.captures(s)?;

    let year: i32 = cap[1].parse().ok()?;
    let doy: u32 = cap[2].parse().ok()?;
    let hour: u32 = cap[3].parse().ok()?;
    let min: u32 = cap[4].parse().ok()?;
    let sec: u32 = cap[5].parse().ok()?;
    let tenths: u32 = cap[6].parse().ok()?;

    utc_from_yo_hms_tenths( year, doy, hour, min, sec, tenths)
}

/* #endregion ABI filename encoding */

/* #region S3 retrieval ******************************************************************************/

/// the S3 object prefix selecting all scenes of one band within one UTC hour
pub fn object_prefix (config: &GoesrSourceConfig, band: u8, dt: &DateTime<Utc>) -> String {
    format!( "{0}/{1}/{2:03}/{3:02}/OR_{0}-{4}C{5:02}",
        config.product, dt.year(), dt.ordinal(), dt.hour(), config.mode, band)
}

/// local target path for an object filename, and whether it still has to be downloaded.
/// Existence of the target file is the only idempotence state we keep - a re-run does
/// not re-download, even if the remote object changed
pub fn download_target (output_dir: &Path, filename: &str) -> (PathBuf, bool) {
    let path = output_dir.join( filename);
    let is_new = !path.is_file();
    (path, is_new)
}

/// retrieve all scene files matching the request, one at a time, skipping files that
/// are already present in the output dir. Returns the local paths of all matching
/// objects (downloaded or pre-existing), in key order
pub async fn fetch_frame_files (client: &S3Client, config: &GoesrSourceConfig, req: &FrameRequest) -> Result<Vec<PathBuf>> {
    let prefix = object_prefix( config, req.band, &req.start);
    info!("retrieving GOES-{} objects for prefix {}", config.satellite, prefix);

    let objs = get_s3_objects( client, &config.bucket, &prefix, None).await?;
    if objs.is_empty() {
        warn!("no objects for prefix {}", prefix);
    }

    let mut files: Vec<PathBuf> = Vec::with_capacity( objs.len());
    for obj in &objs {
        let filename = obj.filename()?.to_string();
        let (path, is_new) = download_target( &req.output_dir, &filename);

        if is_new {
            let path = download_s3_object( client, &config.bucket, obj, &req.output_dir).await?;
            if obj.is_dated() {
                debug!("object {} last modified {}", filename, obj.date());
            }
            match parse_filename( &path) {
                Some(fi) => info!("downloaded scene {} (start {})", filename, fi.start_time),
                None => info!("downloaded {}", filename)
            }
            files.push( path);

        } else {
            info!("file {} already downloaded", filename);
            files.push( path);
        }
    }

    Ok(files)
}

/* #endregion S3 retrieval */
