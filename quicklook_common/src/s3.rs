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

//! support functions for public (anonymous read) AWS S3 buckets

use std::{fs::File, io::Write, ops::Deref, path::{Path,PathBuf}};
use thiserror::Error;
use aws_sdk_s3::{Client, types::Object};
use aws_config::{Region, meta::region::RegionProviderChain};
use aws_smithy_types_convert::date_time::DateTimeExt;
use chrono::{DateTime,Utc};

use crate::datetime::Dated;

pub type S3Client = Client;

pub type Result<T> = std::result::Result<T, QuicklookS3Error>;

#[derive(Error,Debug)]
pub enum QuicklookS3Error {
    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("AWS S3 get object error {0}")]
    AWSS3ObjectError( #[from] aws_smithy_runtime_api::client::result::SdkError<aws_sdk_s3::operation::get_object::GetObjectError, aws_smithy_runtime_api::http::Response>),

    #[error("AWS S3 list object error {0}")]
    AWSS3ListObjectError( #[from] aws_smithy_runtime_api::client::result::SdkError<aws_sdk_s3::operation::list_objects::ListObjectsError, aws_smithy_runtime_api::http::Response>),

    #[error("AWS byte stream download error {0}")]
    AWSByteStreamError( #[from] aws_smithy_types::byte_stream::error::Error),

    #[error("No object key error")]
    NoObjectKeyError(),
}

/// newtype to allow extending the S3 Object interface
#[derive(Clone,Debug)]
pub struct S3Object(Object);

impl S3Object {
    /// the last path element of the object key, i.e. the name under which we store it locally
    pub fn filename (&self)->Result<&str> {
        let key = self.key().ok_or( QuicklookS3Error::NoObjectKeyError())?;
        Ok( key.rsplit('/').next().unwrap_or(key) )
    }

    pub fn is_dated (&self)->bool {
        self.last_modified.is_some()
    }
}

impl Deref for S3Object {
    type Target = Object;
    fn deref (&self) -> &Self::Target { &self.0 }
}

impl Dated for S3Object {
    /// note this panics if object.last_modified() == None
    /// it should only be used after verifying the object has a proper date set
    fn date (&self)->DateTime<Utc> {
        self.last_modified().unwrap().to_chrono_utc().unwrap()
    }
}

/// create an anonymous S3 client for the given region - all we ever read are public buckets
pub async fn create_s3_client (region: String) -> Result<Client> {
    let region_provider = RegionProviderChain::first_try( Region::new( region));
    let aws_config = aws_config::from_env().no_credentials().region(region_provider).load().await;
    Ok( Client::new(&aws_config) )
}

/// retrieve all objects (from optional marker) for given bucket/prefix. If there is no error this always
/// returns a `Vec<S3Object>` but it might be empty (if there were no matching objects)
pub async fn get_s3_objects (client: &Client, bucket: &str, prefix: &str, prev_key: Option<&str>) -> Result<Vec<S3Object>> {
    let mut builder = client.list_objects().bucket(bucket).prefix(prefix);
    if let Some(key) = prev_key {
        builder = builder.marker(key);
    }
    let result = builder.send().await?;

    Ok( result.contents().to_vec().into_iter().map(|o| S3Object(o)).collect() )
}

/// download a given `S3Object` and store it under its key filename within the given directory.
/// Returns a `NoObjectKeyError` if the object has no key
pub async fn download_s3_object (client: &Client, bucket: &str, object: &S3Object, dir: &Path) -> Result<PathBuf> {
    let key = object.key().ok_or( QuicklookS3Error::NoObjectKeyError())?;
    let file_name = key.rsplit('/').next().unwrap_or(key);
    let file_path = dir.join(file_name);
    let mut file = File::create(&file_path)?;

    let mut response = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await?;

    while let Some(bytes) = response.body.try_next().await? {
        file.write_all(&bytes)?;
    }
    Ok(file_path)
}
