// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

/// Conversion options.
#[derive(Clone, Debug)]
pub struct Options {
    /// Directory that will be used during relative paths resolving.
    ///
    /// `None` means the directory of the source file.
    ///
    /// Default: `None`
    pub resources_dir: Option<PathBuf>,

    /// A surface background color.
    ///
    /// `None` equals to transparent.
    ///
    /// Default: `None`
    pub background: Option<tiny_skia::Color>,

    /// A default font family.
    ///
    /// Default: Times New Roman
    pub font_family: String,

    /// A default font size.
    ///
    /// Default: 12
    pub font_size: f32,

    /// Font files to load in addition to the system ones.
    pub font_files: Vec<PathBuf>,

    /// Directories to load fonts from.
    pub font_dirs: Vec<PathBuf>,

    /// Disables system fonts loading.
    ///
    /// Default: false
    pub skip_system_fonts: bool,

    /// The `serif` font family.
    pub serif_family: String,
    /// The `sans-serif` font family.
    pub sans_serif_family: String,
    /// The `cursive` font family.
    pub cursive_family: String,
    /// The `fantasy` font family.
    pub fantasy_family: String,
    /// The `monospace` font family.
    pub monospace_family: String,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            resources_dir: None,
            background: None,
            font_family: "Times New Roman".to_string(),
            font_size: 12.0,
            font_files: Vec::new(),
            font_dirs: Vec::new(),
            skip_system_fonts: false,
            serif_family: "Times New Roman".to_string(),
            sans_serif_family: "Arial".to_string(),
            cursive_family: "Comic Sans MS".to_string(),
            fantasy_family: "Impact".to_string(),
            monospace_family: "Courier New".to_string(),
        }
    }
}
