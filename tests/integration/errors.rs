use svg2png::{ConversionRequest, Converter, ErrorKind};

use crate::svg;

#[test]
fn missing_source() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.png");

    let req = ConversionRequest::new(svg("does-not-exist"), &out);
    let e = Converter::new().convert(&req).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::SourceRead);
    assert!(!out.exists());
}

#[test]
fn missing_destination_dir() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("missing").join("out.png");

    let req = ConversionRequest::new(svg("square"), &out);
    let e = Converter::new().convert(&req).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Write);
    assert!(!out.exists());
}

#[test]
fn malformed_svg_keeps_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.png");
    std::fs::write(&out, b"previous").unwrap();

    let req = ConversionRequest::new(svg("not-an-svg"), &out);
    let e = Converter::new().convert(&req).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Decode);
    assert_eq!(std::fs::read(&out).unwrap(), b"previous");
}

#[test]
fn invalid_svg_size() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.png");

    let req = ConversionRequest::new(svg("zero-size"), &out);
    let e = Converter::new().convert(&req).unwrap_err();
    assert!(matches!(e, svg2png::Error::Svg(svg2png::usvg::Error::InvalidSize)));
    assert!(!out.exists());
}

#[test]
fn stray_latin1_byte_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("latin1.svg");
    let mut data = b"<svg xmlns='http://www.w3.org/2000/svg' width='10' height='10'>\n<!-- caf".to_vec();
    data.push(0xe9);
    data.extend_from_slice(b" -->\n<rect width='10' height='10'/>\n</svg>\n");
    std::fs::write(&source, data).unwrap();
    let out = dir.path().join("out.png");

    let req = ConversionRequest::new(&source, &out).with_size(4, 4);
    Converter::new().convert(&req).unwrap();

    let img = crate::load_png(&out);
    assert_eq!((img.width, img.height), (4, 4));
    assert_eq!(img.data[..4], [0, 0, 0, 255]);
}

#[test]
fn zero_width() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.png");

    let req = ConversionRequest::new(svg("square"), &out).with_size(0, 512);
    let e = Converter::new().convert(&req).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Surface);
    assert!(!out.exists());
}

#[test]
fn report_never_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.png");

    svg2png::convert_and_report(svg("does-not-exist"), &out, 512, 512);
    assert!(!out.exists());

    svg2png::convert_and_report(svg("square"), &out, 16, 16);
    assert!(out.exists());
}
