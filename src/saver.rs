/*
saver.rs

Copyright 2025 Hervé Quatremain

This file is part of Diskshift.

Diskshift is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Diskshift is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Diskshift. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Persistence of the game in progress and of the high scores.
//!
//! Both files are JSON documents stored in the user data directory (see
//! [`crate::config::user_data_dir`]). [`JsonFile`] does the file handling for the two savers.

pub mod game;
pub mod highscores;

use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// JSON document that stores a `T` object.
pub struct JsonFile<T> {
    /// Absolute path to the file.
    path: PathBuf,

    stored: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> JsonFile<T> {
    /// Create a [`JsonFile`] object for the `file_name` file in the `data_dir` directory.
    pub fn new(data_dir: PathBuf, file_name: &str) -> Self {
        let path: PathBuf = data_dir.join(file_name);
        debug!("Data file: {path:?}");
        Self {
            path,
            stored: PhantomData,
        }
    }

    /// Path to the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the object from the file.
    ///
    /// Return None if the file does not exist.
    pub fn load(&self) -> Result<Option<T>, Box<dyn Error>> {
        let file: File = match File::open(&self.path) {
            Ok(f) => f,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(Box::new(error)),
        };
        let value: T = serde_json::from_reader(BufReader::new(file))?;
        Ok(Some(value))
    }

    /// Write the object to the file, creating the directory if needed.
    ///
    /// The document is written to a temporary file first and then renamed, so an interrupted
    /// write leaves the previous file in place.
    pub fn save(&self, value: &T) -> Result<(), Box<dyn Error>> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let tmp: PathBuf = self.path.with_extension("json.tmp");
        let mut writer: BufWriter<File> = BufWriter::new(File::create(&tmp)?);
        serde_json::to_writer(&mut writer, value)?;
        writer.flush()?;
        drop(writer);
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Delete the file. A missing file is not an error.
    pub fn delete(&self) {
        if let Err(error) = fs::remove_file(&self.path)
            && error.kind() != ErrorKind::NotFound
        {
            debug!("Cannot delete {:?}: {error}", self.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    type Counters = BTreeMap<String, u32>;

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let file: JsonFile<Counters> = JsonFile::new(dir.path().to_path_buf(), "counters.json");
        assert!(file.load().unwrap().is_none());
        file.delete();
    }

    #[test]
    fn save_creates_the_directory_and_replaces_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let file: JsonFile<Counters> =
            JsonFile::new(dir.path().join("a").join("b"), "counters.json");

        let mut counters = Counters::new();
        counters.insert("moves".to_string(), 3);
        file.save(&counters).unwrap();
        counters.insert("moves".to_string(), 4);
        file.save(&counters).unwrap();

        assert_eq!(file.load().unwrap(), Some(counters));
        assert!(!file.path().with_extension("json.tmp").exists());

        file.delete();
        assert!(!file.path().exists());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let file: JsonFile<Counters> = JsonFile::new(dir.path().to_path_buf(), "counters.json");
        fs::write(file.path(), "[1, 2").unwrap();
        assert!(file.load().is_err());
    }
}
