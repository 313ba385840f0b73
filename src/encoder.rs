// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::Write;

use crate::{Error, Surface};

/// A raster image encoder.
pub trait Encoder {
    /// Encodes the surface content into the writer.
    fn encode<W: Write>(&self, surface: &Surface, writer: W) -> Result<(), Error>;
}

/// An 8-bit RGBA PNG encoder.
#[derive(Clone, Copy, Default, Debug)]
pub struct PngEncoder;

impl Encoder for PngEncoder {
    fn encode<W: Write>(&self, surface: &Surface, writer: W) -> Result<(), Error> {
        let mut encoder = png::Encoder::new(writer, surface.width(), surface.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&surface.to_rgba8())?;
        writer.finish()?;
        Ok(())
    }
}

impl PngEncoder {
    /// Encodes the surface into an in-memory PNG.
    pub fn encode_to_vec(&self, surface: &Surface) -> Result<Vec<u8>, Error> {
        let mut data = Vec::new();
        self.encode(surface, &mut data)?;
        Ok(data)
    }
}
