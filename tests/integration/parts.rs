use std::cell::{Cell, RefCell};
use std::io::Write;
use std::rc::Rc;

use svg2png::tiny_skia::{Color, PremultipliedColorU8};
use svg2png::{ConversionRequest, Converter, Encoder, Options, ResvgRasterizer, Surface};

use crate::svg;

/// Writes the surface size as text and remembers the top-left pixel.
#[derive(Default)]
struct SizeEncoder {
    calls: Rc<Cell<usize>>,
    first_pixel: Rc<RefCell<Option<PremultipliedColorU8>>>,
}

impl Encoder for SizeEncoder {
    fn encode<W: Write>(&self, surface: &Surface, mut writer: W) -> Result<(), svg2png::Error> {
        self.calls.set(self.calls.get() + 1);
        *self.first_pixel.borrow_mut() = surface.pixmap().pixel(0, 0);
        write!(writer, "{}x{}", surface.width(), surface.height()).unwrap();
        Ok(())
    }
}

#[test]
fn custom_encoder() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("square.txt");

    let encoder = SizeEncoder::default();
    let calls = encoder.calls.clone();
    let converter = Converter::with_parts(ResvgRasterizer::default(), encoder);

    let req = ConversionRequest::new(svg("square"), &out).with_size(30, 20);
    converter.convert(&req).unwrap();

    assert_eq!(calls.get(), 1);
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "30x20");
}

#[test]
fn custom_encoder_not_called_on_failure() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.txt");

    let encoder = SizeEncoder::default();
    let calls = encoder.calls.clone();
    let converter = Converter::with_parts(ResvgRasterizer::default(), encoder);

    let req = ConversionRequest::new(svg("not-an-svg"), &out);
    assert!(converter.convert(&req).is_err());
    assert_eq!(calls.get(), 0);
    assert!(!out.exists());
}

#[test]
fn background_with_custom_parts() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("empty.txt");

    let encoder = SizeEncoder::default();
    let first_pixel = encoder.first_pixel.clone();
    let mut converter = Converter::with_parts(ResvgRasterizer::default(), encoder);
    converter.set_background(Some(Color::from_rgba8(0, 255, 0, 255)));

    let req = ConversionRequest::new(svg("empty"), &out).with_size(2, 2);
    converter.convert(&req).unwrap();

    let pixel = (*first_pixel.borrow()).unwrap();
    assert_eq!(
        (pixel.red(), pixel.green(), pixel.blue(), pixel.alpha()),
        (0, 255, 0, 255)
    );
}

#[test]
fn rasterizer_keeps_options() {
    let mut opt = Options::default();
    opt.font_family = "Noto Sans".to_string();
    opt.skip_system_fonts = true;

    let converter = Converter::with_options(opt);
    assert_eq!(converter.rasterizer().options().font_family, "Noto Sans");
    assert!(converter.rasterizer().options().skip_system_fonts);
}
