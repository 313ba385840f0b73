// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::Path;

use once_cell::sync::OnceCell;
use usvg::fontdb;

use crate::{Error, Options, Surface};

/// An SVG decoding and drawing engine.
pub trait Rasterizer {
    /// A decoded, drawable image.
    type Image;

    /// Decodes SVG data.
    ///
    /// `resources_dir` is used to resolve relative references.
    fn decode(&self, svg: &[u8], resources_dir: Option<&Path>) -> Result<Self::Image, Error>;

    /// Returns the image size in pixels before any scaling.
    fn intrinsic_size(&self, image: &Self::Image) -> (f32, f32);

    /// Draws an image at the origin, stretched to fill the whole surface.
    ///
    /// The aspect ratio is not preserved.
    fn draw(&self, image: &Self::Image, surface: &mut Surface);
}

/// A `resvg` based rasterizer.
pub struct ResvgRasterizer {
    options: Options,
    // fontdb initialization is pretty expensive, so perform it only when needed.
    fontdb: OnceCell<fontdb::Database>,
    empty_fontdb: fontdb::Database,
}

impl ResvgRasterizer {
    /// Creates a new rasterizer.
    pub fn new(options: Options) -> Self {
        ResvgRasterizer {
            options,
            fontdb: OnceCell::new(),
            empty_fontdb: fontdb::Database::new(),
        }
    }

    /// Returns the rasterizer options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    fn fonts(&self) -> &fontdb::Database {
        self.fontdb.get_or_init(|| load_fonts(&self.options))
    }
}

impl Default for ResvgRasterizer {
    fn default() -> Self {
        ResvgRasterizer::new(Options::default())
    }
}

impl Rasterizer for ResvgRasterizer {
    type Image = usvg::Tree;

    fn decode(&self, svg: &[u8], resources_dir: Option<&Path>) -> Result<usvg::Tree, Error> {
        let svg_string = std::str::from_utf8(svg).map_err(|_| Error::NotAnUtf8Str)?;

        let xml_opt = usvg::roxmltree::ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        };
        let xml_tree = usvg::roxmltree::Document::parse_with_options(svg_string, xml_opt)
            .map_err(usvg::Error::ParsingFailed)?;

        let has_text_nodes = xml_tree
            .descendants()
            .any(|n| n.has_tag_name(("http://www.w3.org/2000/svg", "text")));

        let fontdb = if has_text_nodes {
            self.fonts()
        } else {
            &self.empty_fontdb
        };

        let mut opt = usvg::Options::default();
        opt.resources_dir = self
            .options
            .resources_dir
            .clone()
            .or_else(|| resources_dir.map(|p| p.to_path_buf()));
        opt.font_family = self.options.font_family.clone();
        opt.font_size = self.options.font_size;

        let tree = usvg::Tree::from_xmltree(&xml_tree, &opt, fontdb)?;
        log::debug!(
            "Decoded a {}x{} SVG.",
            tree.size().width(),
            tree.size().height()
        );

        Ok(tree)
    }

    fn intrinsic_size(&self, tree: &usvg::Tree) -> (f32, f32) {
        (tree.size().width(), tree.size().height())
    }

    fn draw(&self, tree: &usvg::Tree, surface: &mut Surface) {
        let (width, height) = self.intrinsic_size(tree);
        let ts = tiny_skia::Transform::from_scale(
            surface.width() as f32 / width,
            surface.height() as f32 / height,
        );

        resvg::render(tree, ts, &mut surface.pixmap_mut());
    }
}

fn load_fonts(options: &Options) -> fontdb::Database {
    let mut fontdb = fontdb::Database::new();
    if !options.skip_system_fonts {
        fontdb.load_system_fonts();
    }

    for path in &options.font_files {
        if let Err(e) = fontdb.load_font_file(path) {
            log::warn!("Failed to load '{}' cause {}.", path.display(), e);
        }
    }

    for path in &options.font_dirs {
        fontdb.load_fonts_dir(path);
    }

    fontdb.set_serif_family(options.serif_family.as_str());
    fontdb.set_sans_serif_family(options.sans_serif_family.as_str());
    fontdb.set_cursive_family(options.cursive_family.as_str());
    fontdb.set_fantasy_family(options.fantasy_family.as_str());
    fontdb.set_monospace_family(options.monospace_family.as_str());

    log::debug!("Loaded {} font faces.", fontdb.len());
    fontdb
}
