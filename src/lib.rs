// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`svg2png` converts an SVG file into a PNG of a fixed size.

The SVG is stretched to fill the requested rectangle, its aspect ratio is not preserved.

```no_run
let req = svg2png::ConversionRequest::new("logo.svg", "logo.png").with_size(256, 256);
svg2png::Converter::new().convert(&req)?;
# Ok::<(), svg2png::Error>(())
```
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::field_reassign_with_default)]
#![allow(clippy::uninlined_format_args)]

pub use tiny_skia;
pub use usvg;

mod backend;
pub mod data_uri;
mod encoder;
mod error;
mod options;
mod output;
mod request;
mod surface;

pub use backend::{Rasterizer, ResvgRasterizer};
pub use encoder::{Encoder, PngEncoder};
pub use error::{Error, ErrorKind};
pub use options::Options;
pub use output::write_atomically;
pub use request::{
    ConversionRequest, DEFAULT_DESTINATION, DEFAULT_HEIGHT, DEFAULT_SOURCE, DEFAULT_WIDTH,
};
pub use surface::Surface;

/// Converts SVG files to PNG.
pub struct Converter<R = ResvgRasterizer, E = PngEncoder> {
    rasterizer: R,
    encoder: E,
    background: Option<tiny_skia::Color>,
}

impl Converter {
    /// Creates a `resvg` and PNG based converter with default options.
    pub fn new() -> Self {
        Converter::with_options(Options::default())
    }

    /// Creates a `resvg` and PNG based converter.
    pub fn with_options(options: Options) -> Self {
        let background = options.background;
        Converter {
            rasterizer: ResvgRasterizer::new(options),
            encoder: PngEncoder,
            background,
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Converter::new()
    }
}

impl<R: Rasterizer, E: Encoder> Converter<R, E> {
    /// Creates a converter from custom parts.
    pub fn with_parts(rasterizer: R, encoder: E) -> Self {
        Converter {
            rasterizer,
            encoder,
            background: None,
        }
    }

    /// Sets a background color painted before the image.
    pub fn set_background(&mut self, color: Option<tiny_skia::Color>) {
        self.background = color;
    }

    /// Returns the rasterizer.
    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    /// Performs a conversion.
    pub fn convert(&self, req: &ConversionRequest) -> Result<(), Error> {
        let surface = self.render(req)?;
        write_atomically(&req.destination, |w| self.encoder.encode(&surface, w))
    }

    /// Performs a conversion and reports the result to the log.
    ///
    /// Never fails. Use [`Converter::convert`] when the outcome matters.
    pub fn convert_and_report(&self, req: &ConversionRequest) {
        let res = self.convert(req);
        report(req, &res);
    }

    /// Renders the request source into a new surface without saving it.
    pub fn render(&self, req: &ConversionRequest) -> Result<Surface, Error> {
        let svg_data = std::fs::read(&req.source).map_err(|source| Error::SourceRead {
            path: req.source.clone(),
            source,
        })?;

        // Invalid sequences are replaced with U+FFFD.
        let svg_string = String::from_utf8_lossy(&svg_data);
        let uri = data_uri::encode_svg(&svg_string);
        let svg_data = data_uri::decode_svg(&uri)?;

        let resources_dir = std::fs::canonicalize(&req.source)
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()));
        let image = self.rasterizer.decode(&svg_data, resources_dir.as_deref())?;

        let mut surface = Surface::new(req.width, req.height)?;
        if let Some(color) = self.background {
            surface.fill(color);
        }

        self.rasterizer.draw(&image, &mut surface);
        Ok(surface)
    }
}

/// Converts an SVG file into a PNG file of the specified size.
pub fn convert<S, D>(source: S, destination: D, width: u32, height: u32) -> Result<(), Error>
where
    S: Into<std::path::PathBuf>,
    D: Into<std::path::PathBuf>,
{
    let req = ConversionRequest::new(source, destination).with_size(width, height);
    Converter::new().convert(&req)
}

/// Converts an SVG file into a PNG file and reports the result to the log.
pub fn convert_and_report<S, D>(source: S, destination: D, width: u32, height: u32)
where
    S: Into<std::path::PathBuf>,
    D: Into<std::path::PathBuf>,
{
    let req = ConversionRequest::new(source, destination).with_size(width, height);
    Converter::new().convert_and_report(&req)
}

/// Logs the outcome of a conversion.
///
/// Success is logged at the info level as `✓ Converted: <in> -> <out>`,
/// failure at the error level as `✗ Error: <message>`.
pub fn report(req: &ConversionRequest, res: &Result<(), Error>) {
    match res {
        Ok(()) => log::info!("{}", success_line(req)),
        Err(e) => log::error!("{}", failure_line(e)),
    }
}

fn success_line(req: &ConversionRequest) -> String {
    format!(
        "✓ Converted: {} -> {}",
        req.source_name(),
        req.destination_name()
    )
}

fn failure_line(e: &Error) -> String {
    format!("✗ Error: {}", e)
}
