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

use std::fs;
use std::io::{self, Error as IOError, ErrorKind};
use std::path::{Path, PathBuf};
use regex::Regex;

type Result<T> = std::result::Result<T, std::io::Error>;

pub fn filename<'a, T: AsRef<Path>> (path: &'a T)->Option<&'a str> {
    path.as_ref().file_name().and_then(|ostr| ostr.to_str())
}

/// check if dir pathname exists and is writable, try to create dir otherwise
pub fn ensure_writable_dir (path: impl AsRef<Path>) -> io::Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        let md = fs::metadata(path)?;
        if md.permissions().readonly() {
            Err( IOError::new( ErrorKind::PermissionDenied, format!("output dir {:?} not writable", path)) )
        } else {
            Ok(())
        }

    } else {
        fs::create_dir_all(path)
    }
}

/// all files in 'dir' whose names match 'fname_regex', in no particular order.
/// A non-existing dir yields an empty list, not an error
pub fn matching_files_in_dir<P: AsRef<Path>> (dir: &P, fname_regex: &Regex) -> Result<Vec<PathBuf>> {
    let dir: &Path = dir.as_ref();
    let mut list: Vec<PathBuf> = Vec::new();

    if dir.is_dir() {
        for entry in fs::read_dir(dir)? {
            if let Ok(entry) = entry {
                if let Some(fname) = entry.file_name().to_str() {
                    if fname_regex.is_match( fname) {
                        list.push( entry.path())
                    }
                }
            }
        }
    }

    Ok(list)
}
