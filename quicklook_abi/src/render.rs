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

//! photometric transform and palette mapping for radiance quicklooks

use std::f32::consts::PI;
use std::path::{Path,PathBuf};
use image::{Rgb,RgbImage};

use crate::errors::Result;
use crate::reader::{read_radiance,RadianceGrid};

/// nominal kappa factor and solar irradiance used to rescale L1b radiances into
/// a displayable reflectance factor. These are display constants, not the per-file
/// calibration attributes - quicklooks are not radiometrically exact
const KAPPA: f32 = 0.3;
const ESUN: f32 = 663.274497;

/// radiance -> gamma corrected reflectance in [0.0, 1.0]
#[inline]
pub fn reflectance_of (rad: f32) -> f32 {
    let r = (rad * PI * KAPPA) / ESUN;
    r.clamp( 0.0, 1.0).sqrt() // sqrt stretches the dark end and preserves [0,1]
}

/* #region color palette *****************************************************************************/

// NCAR-style rainbow, reversed so that low reflectance (space, night side) renders light
const NCAR_R_STOPS: &[&str] = &[
    "ffffff", "ff80ff", "ff00ff", "ff0000", "ff8000", "ffff00", "80ff00",
    "00ff00", "00ff80", "00ffff", "0080ff", "0000ff", "000080", "000000",
];

/// evenly spaced RGB stops, linearly interpolated over the fixed [0,1] value range
#[derive(Debug,Clone)]
pub struct Colormap {
    stops: Vec<[u8;3]>,
}

impl Colormap {
    /// the default spectral palette
    pub fn ncar () -> Colormap {
        Colormap{ stops: NCAR_R_STOPS.iter().map(|s| hex_rgb(s)).collect() }
    }

    pub fn grayscale () -> Colormap {
        Colormap{ stops: vec![ [0,0,0], [255,255,255] ] }
    }

    /// color for a value in [0,1]. Values outside the range (and NaN) are clamped
    pub fn lookup (&self, v: f32) -> Rgb<u8> {
        let v = if v.is_nan() { 0.0 } else { v.clamp( 0.0, 1.0) };
        let n = self.stops.len() - 1;

        let x = v * (n as f32);
        let i = (x.floor() as usize).min( n - 1);
        let f = x - (i as f32);

        let a = self.stops[i];
        let b = self.stops[i+1];
        Rgb([ lerp(a[0],b[0],f), lerp(a[1],b[1],f), lerp(a[2],b[2],f) ])
    }
}

#[inline]
fn lerp (a: u8, b: u8, f: f32) -> u8 {
    ((a as f32) + ((b as f32) - (a as f32)) * f).round() as u8
}

fn hex_rgb (hex_color: &str) -> [u8;3] {
    let v = u32::from_str_radix( hex_color, 16).expect("invalid hex color spec");

    let r = (v >> 16) as u8;
    let g = (v >> 8 & 0xff) as u8;
    let b = (v & 0xff) as u8;

    [r, g, b]
}

/* #endregion color palette */

/* #region rendering *********************************************************************************/

/// image pathname for a data file: same location and basename, with the (last)
/// extension replaced
pub fn quicklook_path (nc_path: impl AsRef<Path>, img_ext: &str) -> PathBuf {
    nc_path.as_ref().with_extension( img_ext)
}

/// map a radiance grid into a color image, pixel by pixel
pub fn render_grid (grid: &RadianceGrid, cmap: &Colormap) -> RgbImage {
    let mut img = RgbImage::new( grid.width as u32, grid.height as u32);

    for (i, p) in img.pixels_mut().enumerate() {
        *p = cmap.lookup( reflectance_of( grid.values[i]));
    }
    img
}

/// render one ABI L1b file into a quicklook image. The image format is derived
/// from the output extension
pub fn render_quicklook (nc_path: impl AsRef<Path>, img_path: impl AsRef<Path>, cmap: &Colormap) -> Result<()> {
    let grid = read_radiance( nc_path.as_ref())?;
    let img = render_grid( &grid, cmap);
    img.save( img_path.as_ref())?;
    Ok(())
}

/* #endregion rendering */
