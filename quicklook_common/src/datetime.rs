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

//! date/time support functions for satellite data sets, which are commonly keyed
//! by year, day-of-year and UTC hour

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// something that has a single associated DateTime<Utc>
pub trait Dated {
    fn date (&self)->DateTime<Utc>;
}

/// DateTime<Utc> for a given year, day-of-year (001-366) and full UTC hour of day (00-23).
/// Returns None for day or hour values the year does not have
pub fn utc_from_yo_hour (year: i32, day_of_year: u32, hour: u32)->Option<DateTime<Utc>> {
    let nd = NaiveDate::from_yo_opt( year, day_of_year)?;
    let nt = NaiveTime::from_hms_opt( hour, 0, 0)?;
    Some( NaiveDateTime::new( nd, nt).and_utc() )
}

/// DateTime<Utc> for a year, day-of-year and hour/min/sec/tenths group, as it is
/// encoded in satellite data filenames
pub fn utc_from_yo_hms_tenths (year: i32, day_of_year: u32, hour: u32, min: u32, sec: u32, tenths: u32)->Option<DateTime<Utc>> {
    let nd = NaiveDate::from_yo_opt( year, day_of_year)?;
    let nt = NaiveTime::from_hms_milli_opt( hour, min, sec, tenths * 100)?;
    Some( NaiveDateTime::new( nd, nt).and_utc() )
}
