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

//! NetCDF variable access for ABI L1b files, through GDAL subdataset paths.
//! The `Rad` variable is stored as scaled integers - we apply the band
//! scale/offset here so that callers only ever see physical radiance values

use std::path::Path;
use gdal::Dataset;
use gdal::raster::Buffer;

use crate::errors::{Result, no_data_error};

/// scaled 2-D radiance values, row major, top row first
#[derive(Debug)]
pub struct RadianceGrid {
    pub width: usize,
    pub height: usize,
    pub values: Vec<f32>,
}

impl RadianceGrid {
    pub fn len (&self)->usize { self.values.len() }
}

/// open the named variable of a NetCDF file as a GDAL dataset
pub fn nc_dataset (nc_path: impl AsRef<Path>, var_name: &str) -> Result<Dataset> {
    let path = format!( "NETCDF:\"{}\":{}", nc_path.as_ref().display(), var_name);
    Ok( Dataset::open( &path)? )
}

/// read the 2-D `Rad` variable of an ABI L1b file, with scale/offset applied.
/// No-data pixels (space view corners of the full disk) are substituted with 0.0,
/// which maps to the minimum of the display range
pub fn read_radiance (nc_path: impl AsRef<Path>) -> Result<RadianceGrid> {
    let ds = nc_dataset( nc_path, "Rad")?;
    read_scaled_band( &ds, 1)
}

pub fn read_scaled_band (ds: &Dataset, band_index: usize) -> Result<RadianceGrid> {
    let band = ds.rasterband( band_index)?;
    let (width, height) = band.size();
    if width == 0 || height == 0 {
        return Err( no_data_error( "empty raster band"))
    }

    let scale = band.scale().unwrap_or( 1.0);
    let offset = band.offset().unwrap_or( 0.0);
    let no_data = band.no_data_value();

    let buf: Buffer<f64> = band.read_as( (0,0), band.size(), band.size(), None)?;
    let data = buf.data();

    let mut values: Vec<f32> = Vec::with_capacity( data.len());
    for v in data {
        if no_data == Some(*v) {
            values.push( 0.0);
        } else {
            values.push( (v * scale + offset) as f32);
        }
    }

    Ok( RadianceGrid{ width, height, values } )
}
