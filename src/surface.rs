// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::Error;

/// An in-memory RGBA drawing target.
///
/// Pixels are stored premultiplied, as `tiny-skia` expects.
#[derive(Clone)]
pub struct Surface {
    pixmap: tiny_skia::Pixmap,
}

impl Surface {
    /// Allocates a transparent surface.
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        let pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or(Error::SurfaceAllocation { width, height })?;
        Ok(Surface { pixmap })
    }

    /// Returns the surface width.
    ///
    /// Never zero.
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Returns the surface height.
    ///
    /// Never zero.
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Fills the whole surface with a color.
    pub fn fill(&mut self, color: tiny_skia::Color) {
        self.pixmap.fill(color);
    }

    /// Returns the underlying pixmap.
    pub fn pixmap(&self) -> &tiny_skia::Pixmap {
        &self.pixmap
    }

    /// Returns the underlying pixmap for drawing.
    pub fn pixmap_mut(&mut self) -> tiny_skia::PixmapMut<'_> {
        self.pixmap.as_mut()
    }

    /// Returns demultiplied RGBA8 data, row by row.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.pixmap.data().len());
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }

        data
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
