//! Image container detection from magic bytes

use std::fmt;

/// Containers recognized by header sniffing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageContainer {
    Jpeg,
    Png,
    Gif,
    WebP,
    Tiff,
    Bmp,
}

impl fmt::Display for ImageContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
            Self::Gif => "GIF",
            Self::WebP => "WebP",
            Self::Tiff => "TIFF",
            Self::Bmp => "BMP",
        };
        f.write_str(name)
    }
}

/// Detect the image container from file header bytes
///
/// Returns `None` when the header is too short or matches no known
/// signature; decoding is still attempted in that case, the sniff is
/// diagnostic only.
pub fn detect_from_header(data: &[u8]) -> Option<ImageContainer> {
    if data.len() < 12 {
        return None;
    }

    // JPEG: FF D8 FF
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some(ImageContainer::Jpeg);
    }

    // PNG: 89 50 4E 47 0D 0A 1A 0A
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some(ImageContainer::Png);
    }

    // GIF: GIF87a or GIF89a
    if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        return Some(ImageContainer::Gif);
    }

    // WebP: RIFF....WEBP
    if data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
        return Some(ImageContainer::WebP);
    }

    // TIFF: II*. (little-endian) or MM.* (big-endian)
    if data.starts_with(&[0x49, 0x49, 0x2A, 0x00]) || data.starts_with(&[0x4D, 0x4D, 0x00, 0x2A]) {
        return Some(ImageContainer::Tiff);
    }

    // BMP: BM
    if data.starts_with(b"BM") {
        return Some(ImageContainer::Bmp);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_from_header() {
        let jpeg_header = [
            0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01,
        ];
        assert_eq!(detect_from_header(&jpeg_header), Some(ImageContainer::Jpeg));

        let png_header = [
            0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D,
        ];
        assert_eq!(detect_from_header(&png_header), Some(ImageContainer::Png));

        let webp_header = b"RIFF\x00\x00\x00\x00WEBP";
        assert_eq!(detect_from_header(webp_header), Some(ImageContainer::WebP));
    }

    #[test]
    fn test_unknown_and_short_headers() {
        assert_eq!(detect_from_header(b"not an image at all"), None);
        assert_eq!(detect_from_header(&[0xFF, 0xD8]), None);
    }

    #[test]
    fn test_container_display() {
        assert_eq!(ImageContainer::Png.to_string(), "PNG");
        assert_eq!(ImageContainer::WebP.to_string(), "WebP");
    }
}
