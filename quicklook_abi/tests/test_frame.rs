/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
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

use chrono::{Datelike,Timelike};
use std::fs::File;
use quicklook_abi::{
    download_target, load_config, object_prefix, parse_abi_dtg, parse_band, parse_filename,
    parse_frame_time, FrameRequest, GoesrSourceConfig,
};

// run with "cargo test --test test_frame -- --nocapture"

#[test]
fn test_object_prefix() {
    let config = GoesrSourceConfig::default();
    let dt = parse_frame_time("2020-146-00").unwrap();

    let prefix = object_prefix( &config, 13, &dt);
    assert_eq!( prefix, "ABI-L1b-RadF/2020/146/00/OR_ABI-L1b-RadF-M6C13");

    // single digit bands are zero padded in the bucket keys
    let prefix = object_prefix( &config, 2, &dt);
    assert_eq!( prefix, "ABI-L1b-RadF/2020/146/00/OR_ABI-L1b-RadF-M6C02");
}

#[test]
fn test_parse_frame_time() {
    let dt = parse_frame_time("2020-146-08").unwrap();
    assert_eq!( dt.year(), 2020);
    assert_eq!( dt.ordinal(), 146);
    assert_eq!( dt.hour(), 8);

    assert!( parse_frame_time("2020-146").is_err());
    assert!( parse_frame_time("2020-146-24").is_err());
    assert!( parse_frame_time("2021-366-00").is_err());
    assert!( parse_frame_time("May 25 2020").is_err());
}

#[test]
fn test_parse_band() {
    assert_eq!( parse_band("13").unwrap(), 13);
    assert_eq!( parse_band("2").unwrap(), 2);

    assert!( parse_band("0").is_err());
    assert!( parse_band("17").is_err());
    assert!( parse_band("C13").is_err());
}

#[test]
fn test_parse_filename() {
    let info = parse_filename( "OR_ABI-L1b-RadF-M6C13_G16_s20201460000157_e20201460009476_c20201460009512.nc").unwrap();

    assert_eq!( info.sys_env, "OR");
    assert_eq!( info.instrument, "ABI");
    assert_eq!( info.level, "L1b");
    assert_eq!( info.product, "RadF");
    assert_eq!( info.mode, "M6");
    assert_eq!( info.band, 13);
    assert_eq!( info.sat_id, 16);
    assert_eq!( info.start_time.ordinal(), 146);
    assert_eq!( (info.start_time.hour(), info.start_time.minute(), info.start_time.second()), (0, 0, 15));
    assert!( info.end_time > info.start_time);
    assert!( info.create_time > info.end_time);

    // leading path elements are ignored
    assert!( parse_filename( "./data/OR_ABI-L1b-RadF-M6C13_G16_s20201460000157_e20201460009476_c20201460009512.nc").is_some());

    assert!( parse_filename( "not_a_goes_file.nc").is_none());
}

#[test]
fn test_parse_abi_dtg() {
    let dt = parse_abi_dtg("20201460001150").unwrap();
    assert_eq!( dt.ordinal(), 146);
    assert_eq!( (dt.hour(), dt.minute(), dt.second()), (0, 1, 15));

    assert!( parse_abi_dtg("garbage").is_none());
}

#[test]
fn test_download_target_idempotence() {
    let tmp = tempfile::tempdir().unwrap();
    let filename = "OR_ABI-L1b-RadF-M6C13_G16_s20201460000157_e20201460009476_c20201460009512.nc";

    let (path, is_new) = download_target( tmp.path(), filename);
    assert!( is_new); // first run downloads

    File::create( &path).unwrap();

    let (path2, is_new) = download_target( tmp.path(), filename);
    assert!( !is_new); // second run performs zero re-downloads
    assert_eq!( path, path2);
}

#[test]
fn test_frame_request() {
    let req = FrameRequest::new( "13", "2020-146-00", "./data").unwrap();
    assert_eq!( req.band, 13);
    assert_eq!( req.start.ordinal(), 146);

    assert!( FrameRequest::new( "99", "2020-146-00", "./data").is_err());
    assert!( FrameRequest::new( "13", "2020-05-25", "./data").is_err());
}

#[test]
fn test_load_config() {
    let config: GoesrSourceConfig = load_config( "configs/goesr_radf.ron").unwrap();
    assert_eq!( config.satellite, 16);
    assert_eq!( config.bucket, "noaa-goes16");
    assert_eq!( config.product, "ABI-L1b-RadF");
}
