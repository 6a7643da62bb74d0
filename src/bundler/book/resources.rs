//! Embedded binary resources.

use base64::Engine;

/// Cover image shown for the bundle, PNG encoded.
const COVER_IMAGE: &str = "iVBORw0KGgoAAAANSUhEUgAAACAAAAAgCAIAAAD8GO2jAAAAKUlEQVR42u3NQQkAAAgEsAtnPDtrCh/CYP+la05FIBAIBAKBQCAQfAkWkgQ8airIxygAAAAASUVORK5CYII=";

/// Decodes the cover image.
pub fn cover_image() -> Result<Vec<u8>, base64::DecodeError> {
    base64::engine::general_purpose::STANDARD.decode(COVER_IMAGE)
}
