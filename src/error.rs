// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

/// A conversion failure category.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    /// The source file is missing or unreadable.
    SourceRead,
    /// The source data cannot be turned into a drawable image.
    Decode,
    /// The raster surface cannot be allocated.
    Surface,
    /// The destination cannot be written.
    Write,
}

/// List of all errors.
#[derive(Debug)]
pub enum Error {
    /// Failed to read the source file.
    SourceRead {
        /// The source path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Only UTF-8 content are supported.
    NotAnUtf8Str,

    /// A data URI is malformed or has an unexpected MIME type.
    InvalidDataUri(String),

    /// The SVG was rejected by the parser.
    Svg(usvg::Error),

    /// Failed to allocate a raster surface.
    ///
    /// Occurs when width and/or height are zero or the surface is too big.
    SurfaceAllocation {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// PNG encoding failed.
    Encoding(png::EncodingError),

    /// Failed to write the destination file.
    Write {
        /// The destination path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

impl Error {
    /// Returns the failure category.
    pub fn kind(&self) -> ErrorKind {
        match *self {
            Error::SourceRead { .. } => ErrorKind::SourceRead,
            Error::NotAnUtf8Str | Error::InvalidDataUri(_) | Error::Svg(_) => ErrorKind::Decode,
            Error::SurfaceAllocation { .. } => ErrorKind::Surface,
            Error::Encoding(_) | Error::Write { .. } => ErrorKind::Write,
        }
    }
}

impl From<usvg::Error> for Error {
    fn from(e: usvg::Error) -> Self {
        Error::Svg(e)
    }
}

impl From<png::EncodingError> for Error {
    fn from(e: png::EncodingError) -> Self {
        Error::Encoding(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::SourceRead {
                ref path,
                ref source,
            } => {
                write!(f, "failed to read '{}' cause {}", path.display(), source)
            }
            Error::NotAnUtf8Str => {
                write!(f, "provided data has not an UTF-8 encoding")
            }
            Error::InvalidDataUri(ref msg) => {
                write!(f, "invalid data URI: {}", msg)
            }
            Error::Svg(ref e) => {
                write!(f, "{}", e)
            }
            Error::SurfaceAllocation { width, height } => {
                write!(f, "failed to allocate a {}x{} surface", width, height)
            }
            Error::Encoding(ref e) => {
                write!(f, "PNG encoding failed cause {}", e)
            }
            Error::Write {
                ref path,
                ref source,
            } => {
                write!(f, "failed to write '{}' cause {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::SourceRead { ref source, .. } | Error::Write { ref source, .. } => Some(source),
            Error::Svg(ref e) => Some(e),
            Error::Encoding(ref e) => Some(e),
            _ => None,
        }
    }
}
