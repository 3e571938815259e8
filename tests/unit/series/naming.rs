//! Tests for file name parsing and the image glob

#[cfg(test)]
mod tests {
    use quilter::series::naming::{ParsedName, matches_image_glob, parse_name};

    // Tests prefix, number and extension are split apart
    // Verified by including the digits in the prefix
    #[test]
    fn test_parse_prefixed_name() {
        assert_eq!(
            parse_name("a1.png"),
            Some(ParsedName {
                prefix: "a",
                sequence: 1,
                extension: "png",
            })
        );
    }

    // Tests names that start with digits have an empty prefix
    // Verified by requiring a non-empty prefix
    #[test]
    fn test_parse_unprefixed_name() {
        let parsed = parse_name("0042.jpg").unwrap();
        assert_eq!(parsed.prefix, "");
        assert_eq!(parsed.sequence, 42);
        assert_eq!(parsed.extension, "jpg");
    }

    // Tests text between the digits and the extension is ignored
    // Verified by taking the extension after the first dot
    #[test]
    fn test_parse_ignores_suffix_after_digits() {
        let parsed = parse_name("frame12_v2.final.png").unwrap();
        assert_eq!(parsed.prefix, "frame");
        assert_eq!(parsed.sequence, 12);
        assert_eq!(parsed.extension, "png");
    }

    // Tests only the first digit run is the sequence number
    // Verified by parsing the last digit run
    #[test]
    fn test_parse_uses_first_digit_run() {
        let parsed = parse_name("shot7-3.jpeg").unwrap();
        assert_eq!(parsed.sequence, 7);
        assert_eq!(parsed.extension, "jpeg");
    }

    // Tests names without digits or extension are rejected
    // Verified by defaulting the sequence number to zero
    #[test]
    fn test_parse_rejects_non_matching_names() {
        assert_eq!(parse_name("readme.txt"), None);
        assert_eq!(parse_name("a12"), None);
        assert_eq!(parse_name("a12."), None);
        assert_eq!(parse_name(".png"), None);
        assert_eq!(parse_name(""), None);
    }

    // Tests a trailing dot keeps the previous dot as separator
    // Verified by splitting at the very last dot
    #[test]
    fn test_parse_trailing_dot_extension() {
        let parsed = parse_name("a3.png.").unwrap();
        assert_eq!(parsed.extension, "png.");
    }

    // Tests digit runs beyond u64 are rejected instead of wrapping
    // Verified by saturating the parsed value
    #[test]
    fn test_parse_rejects_overflowing_number() {
        assert_eq!(parse_name("a99999999999999999999999.png"), None);
    }

    // Tests only ASCII digits count as the sequence while any digit breaks the prefix
    // Verified by treating non-ASCII digits as prefix text
    #[test]
    fn test_parse_rejects_non_ascii_digits() {
        assert_eq!(parse_name("a\u{0663}1.png"), None);
        assert_eq!(parse_name("\u{0661}2.png"), None);
        assert_eq!(parse_name("x\u{0663}y4.png"), None);
    }

    // Tests the name must match whole and on one line
    // Verified by letting the suffix run across a newline
    #[test]
    fn test_parse_rejects_newline_before_extension() {
        assert_eq!(parse_name("a1\n.png"), None);
        assert_eq!(parse_name("a1.png\n"), None);
    }

    // Tests the glob accepts common image extensions
    // Verified by requiring a png extension
    #[test]
    fn test_glob_matches_images() {
        for name in ["a1.png", "b.jpg", "c.jpeg", "d.svg", "x.g"] {
            assert!(matches_image_glob(name), "{name}");
        }
    }

    // Tests the glob rejects other files
    // Verified by ignoring the dot requirement
    #[test]
    fn test_glob_rejects_non_images() {
        for name in ["notes.txt", "png", "a1.PNG", "a1.gif", "a1.webp"] {
            assert!(!matches_image_glob(name), "{name}");
        }
    }
}
