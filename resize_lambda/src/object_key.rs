use std::str::Utf8Error;

use percent_encoding::percent_decode_str;

/// Decodes an object key as it appears in an S3 notification: `+` stands for a
/// space and everything else is percent-encoded.
pub(crate) fn decode_key(raw: &str) -> Result<String, Utf8Error> {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
}

/// Output key for a source key: the destination prefix followed by the
/// source's file name. Intermediate directories are dropped.
pub(crate) fn destination_key(source_key: &str, destination_prefix: &str) -> String {
    let file_name = source_key
        .rsplit_once('/')
        .map_or(source_key, |(_, name)| name);
    format!("{destination_prefix}{file_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_plus_as_space() {
        assert_eq!(
            decode_key("original-images/vacation+photo.jpg").unwrap(),
            "original-images/vacation photo.jpg"
        );
    }

    #[test]
    fn test_decode_percent_sequences() {
        assert_eq!(
            decode_key("original-images/summer%20trip%2B2024.png").unwrap(),
            "original-images/summer trip+2024.png"
        );
        assert_eq!(
            decode_key("original-images/caf%C3%A9.jpg").unwrap(),
            "original-images/café.jpg"
        );
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        assert!(decode_key("original-images/%FF.jpg").is_err());
    }

    #[test]
    fn test_destination_key_keeps_file_name_only() {
        assert_eq!(
            destination_key("original-images/vacation photo.jpg", "resized-images/"),
            "resized-images/vacation photo.jpg"
        );
        assert_eq!(
            destination_key("original-images/2024/06/beach.png", "resized-images/"),
            "resized-images/beach.png"
        );
        assert_eq!(destination_key("cat.gif", "resized-images/"), "resized-images/cat.gif");
    }
}
