//! Shader body decoding
//!
//! The body following the header may be stored compressed, as declared by
//! `options.encoding`. After decoding, the tag is cleared: a document's
//! canonical form always carries a plaintext body.

use crate::error::{Error, Result};
use crate::model::{Encoding, Header, ParserConfig};
use crate::validator::lines::key_line;

/// Plaintext body bytes as text; invalid UTF-8 is rejected, not replaced
fn body_text(bytes: &[u8]) -> Result<&str> {
    Ok(std::str::from_utf8(bytes)?)
}

/// Decode the body according to the header's encoding tag
///
/// Clears `options.encoding` on success.
pub(crate) fn decode_body(
    header: &mut Header,
    body: &[u8],
    header_text: &str,
    config: &ParserConfig,
) -> Result<String> {
    let Some(options) = header.options.as_mut() else {
        return body_text(body).map(str::to_owned);
    };

    let encoding = match options.body_encoding() {
        Ok(None) => {
            options.encoding = None;
            return body_text(body).map(str::to_owned);
        }
        Ok(Some(encoding)) => encoding,
        Err(tag) => {
            return Err(Error::UnsupportedEncoding {
                encoding: tag.to_string(),
                line: key_line(header_text, "encoding"),
            });
        }
    };

    if !config.body_decoding() {
        return Err(Error::body_decode(encoding, "body decoding is disabled"));
    }

    let text = decode(encoding, body)?;
    tracing::debug!(%encoding, encoded = body.len(), decoded = text.len(), "decoded shader body");
    options.encoding = None;
    Ok(text)
}

/// Decode an encoded body to text
#[cfg(feature = "encoding")]
pub fn decode(encoding: Encoding, body: &[u8]) -> Result<String> {
    use base64::Engine;
    use base64::alphabet;
    use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

    // Accept base64 with or without padding
    const BASE64: GeneralPurpose = GeneralPurpose::new(
        &alphabet::STANDARD,
        GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
    );

    match encoding {
        Encoding::Gzip => gunzip(encoding, body),
        Encoding::GzipBase64 => {
            // Base64 bodies are often wrapped; drop all whitespace first
            let compact: Vec<u8> = body
                .iter()
                .copied()
                .filter(|b| !b.is_ascii_whitespace())
                .collect();
            let data = BASE64
                .decode(&compact)
                .map_err(|e| Error::body_decode(encoding, e))?;
            gunzip(encoding, &data)
        }
    }
}

#[cfg(feature = "encoding")]
fn gunzip(encoding: Encoding, data: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(data);
    let mut bytes = Vec::new();
    decoder
        .read_to_end(&mut bytes)
        .map_err(|e| Error::body_decode(encoding, e))?;
    String::from_utf8(bytes).map_err(|e| Error::from(e.utf8_error()))
}

/// Decode an encoded body to text
#[cfg(not(feature = "encoding"))]
pub fn decode(encoding: Encoding, _body: &[u8]) -> Result<String> {
    Err(Error::body_decode(
        encoding,
        "built without the `encoding` feature",
    ))
}
