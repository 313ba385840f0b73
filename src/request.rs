// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};

/// Default output width in pixels.
pub const DEFAULT_WIDTH: u32 = 512;

/// Default output height in pixels.
pub const DEFAULT_HEIGHT: u32 = 512;

/// Source used when no paths were provided.
pub const DEFAULT_SOURCE: &str = "studio-shell/resources/clang-logo.svg";

/// Destination used when no paths were provided.
pub const DEFAULT_DESTINATION: &str = "studio-shell/resources/clang-logo.png";

/// A single SVG to PNG conversion.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ConversionRequest {
    /// Path to the SVG file.
    pub source: PathBuf,
    /// Path to the PNG file that will be written.
    pub destination: PathBuf,
    /// Output width in pixels.
    ///
    /// Not validated. Zero will fail during surface allocation.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
}

impl ConversionRequest {
    /// Creates a new request using the default 512x512 size.
    pub fn new<S: Into<PathBuf>, D: Into<PathBuf>>(source: S, destination: D) -> Self {
        ConversionRequest {
            source: source.into(),
            destination: destination.into(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    /// Overrides the output size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Returns the source file name used in reports.
    pub fn source_name(&self) -> String {
        file_name(&self.source)
    }

    /// Returns the destination file name used in reports.
    pub fn destination_name(&self) -> String {
        file_name(&self.destination)
    }
}

impl Default for ConversionRequest {
    fn default() -> Self {
        ConversionRequest::new(DEFAULT_SOURCE, DEFAULT_DESTINATION)
    }
}

fn file_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}
