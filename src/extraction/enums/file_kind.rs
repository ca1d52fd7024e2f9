use mime::Mime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Image,
}

impl FileKind {
    /// Resolves the kind from the declared content type, sniffing the bytes
    /// when the client sent none or `application/octet-stream`.
    pub fn detect(declared: &Mime, data: &[u8]) -> Option<Self> {
        let mime_type = match *declared == mime::APPLICATION_OCTET_STREAM {
            true => sniff_mime(data)?,
            false => declared.clone(),
        };

        if mime_type.essence_str() == mime::APPLICATION_PDF.essence_str() {
            return Some(Self::Pdf);
        }
        if mime_type.type_() == mime::IMAGE {
            return Some(Self::Image);
        }

        None
    }

    pub fn extension(&self) -> &'static str {
        match *self {
            Self::Pdf => "pdf",
            Self::Image => "img",
        }
    }
}

pub fn sniff_mime(data: &[u8]) -> Option<Mime> {
    let essence = if data.starts_with(b"%PDF-") {
        "application/pdf"
    } else if data.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        "image/png"
    } else if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        "image/gif"
    } else if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
        "image/webp"
    } else if data.starts_with(b"II*\0") || data.starts_with(b"MM\0*") {
        "image/tiff"
    } else if data.starts_with(b"BM") {
        "image/bmp"
    } else {
        return None;
    };

    essence.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trusts_declared_content_type() {
        assert_eq!(
            FileKind::detect(&mime::APPLICATION_PDF, b"anything"),
            Some(FileKind::Pdf)
        );
        assert_eq!(
            FileKind::detect(&mime::IMAGE_JPEG, b"anything"),
            Some(FileKind::Image)
        );
        assert_eq!(FileKind::detect(&mime::TEXT_PLAIN, b"%PDF-1.7"), None);
    }

    #[test]
    fn sniffs_octet_stream() {
        let octet = mime::APPLICATION_OCTET_STREAM;

        assert_eq!(FileKind::detect(&octet, b"%PDF-1.4\n..."), Some(FileKind::Pdf));
        assert_eq!(
            FileKind::detect(&octet, &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0]),
            Some(FileKind::Image)
        );
        assert_eq!(FileKind::detect(&octet, b"RIFF\0\0\0\0WEBPVP8 "), Some(FileKind::Image));
        assert_eq!(FileKind::detect(&octet, b"hello world"), None);
        assert_eq!(FileKind::detect(&octet, b""), None);
    }

    #[test]
    fn sniffed_mime_types() {
        assert_eq!(sniff_mime(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(mime::IMAGE_JPEG));
        assert_eq!(sniff_mime(b"GIF89a"), Some(mime::IMAGE_GIF));
        assert_eq!(
            sniff_mime(b"II*\0").map(|m| m.to_string()),
            Some("image/tiff".to_string())
        );
    }
}
