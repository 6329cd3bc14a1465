/// Extensions a release page image must carry to be kept as poster or screenshot.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Returns everything after the last `.` of the input, lowercased.
///
/// When the input has no `.` the whole input is returned, lowercased.
pub fn file_extension(input: &str) -> String {
    input
        .rsplit('.')
        .next()
        .unwrap_or(input)
        .to_lowercase()
}

pub fn is_image(src: &str) -> bool {
    let ext = file_extension(src);
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_extract_extension() {
        assert_eq!(file_extension("poster.jpg"), "jpg");
        assert_eq!(file_extension("https://img.host/a.b/shot.PNG"), "png");
        assert_eq!(file_extension("archive.tar.gz"), "gz");
        assert_eq!(file_extension("no-extension"), "no-extension");
        assert_eq!(file_extension("trailing."), "");
    }

    #[test]
    fn should_accept_images() {
        assert!(is_image("poster.jpg"));
        assert!(is_image("poster.JPG"));
        assert!(is_image("poster.jpeg"));
        assert!(is_image("https://x/shot1.png"));
        assert!(!is_image("animated.gif"));
        assert!(!is_image("emoji.webp"));
        assert!(!is_image("https://x/shot.png?width=300"));
        assert!(!is_image(""));
    }
}
