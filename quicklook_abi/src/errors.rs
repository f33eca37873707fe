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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuicklookAbiError>;

#[derive(Error,Debug)]
pub enum QuicklookAbiError {
    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    /// bad user input (band, timestamp) - nothing was retrieved or rendered
    #[error("config error {0}")]
    ConfigError( String ),

    #[error("config parse error {0}")]
    RonError( #[from] ron::error::SpannedError),

    /// object store list/download failures
    #[error("S3 error {0}")]
    S3Error( #[from] quicklook_common::s3::QuicklookS3Error),

    /// unreadable data file or missing variable
    #[error("gdal error {0}")]
    GdalError( #[from] gdal::errors::GdalError),

    #[error("image error {0}")]
    ImageError( #[from] image::ImageError),

    #[error("no data error {0}")]
    NoDataError( String ),

    #[error("operation failed {0}")]
    OpFailed( String ),
}

pub fn config_error (msg: impl ToString)->QuicklookAbiError {
    QuicklookAbiError::ConfigError(msg.to_string())
}

pub fn no_data_error (msg: impl ToString)->QuicklookAbiError {
    QuicklookAbiError::NoDataError(msg.to_string())
}

pub fn op_failed (msg: impl ToString)->QuicklookAbiError {
    QuicklookAbiError::OpFailed(msg.to_string())
}
