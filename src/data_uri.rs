// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! `data:` URI helpers.

use base64::Engine;

use crate::Error;

/// The MIME type of SVG documents.
pub const SVG_MIME: &str = "image/svg+xml";

/// A decoded data URI.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DataUri {
    /// MIME essence, like `image/svg+xml`.
    pub mime: String,
    /// Decoded body.
    pub data: Vec<u8>,
}

/// Embeds an SVG document into a base64 `data:` URI.
pub fn encode_svg(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text);
    format!("data:{};base64,{}", SVG_MIME, encoded)
}

/// Parses a `data:` URI.
pub fn decode(uri: &str) -> Result<DataUri, Error> {
    let url = data_url::DataUrl::process(uri)
        .map_err(|e| Error::InvalidDataUri(format!("{:?}", e)))?;

    let mime = url.mime_type();
    let mime = format!("{}/{}", mime.type_, mime.subtype);

    let (data, _) = url
        .decode_to_vec()
        .map_err(|_| Error::InvalidDataUri("malformed base64 body".to_string()))?;

    Ok(DataUri { mime, data })
}

/// Parses a `data:` URI that must contain an SVG document.
pub fn decode_svg(uri: &str) -> Result<Vec<u8>, Error> {
    let decoded = decode(uri)?;
    if decoded.mime != SVG_MIME {
        return Err(Error::InvalidDataUri(format!(
            "expected '{}', got '{}'",
            SVG_MIME, decoded.mime
        )));
    }

    Ok(decoded.data)
}
