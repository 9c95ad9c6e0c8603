use regex::Regex;

/// A storable file name is a single path component: it starts with an
/// alphanumeric character or underscore, never contains a separator, and is
/// at most 255 characters long. Everything else is rejected before the name
/// is joined to the storage root.
pub fn is_valid_file_name(name: &str) -> bool {
    let re = Regex::new(r"^[a-zA-Z0-9_][a-zA-Z0-9._-]{0,254}$").unwrap();
    re.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_file_names() {
        assert!(is_valid_file_name("cat.png"));
        assert!(is_valid_file_name("2024-01-01_cat.jpeg"));
        assert!(is_valid_file_name("IMG_0042.JPG"));
        assert!(is_valid_file_name(&format!("a{}", "b".repeat(254))));
    }

    #[test]
    fn rejects_path_traversal() {
        assert!(!is_valid_file_name(".."));
        assert!(!is_valid_file_name("../cat.png"));
        assert!(!is_valid_file_name("a/b.png"));
        assert!(!is_valid_file_name("a\\b.png"));
        assert!(!is_valid_file_name("/etc/passwd"));
    }

    #[test]
    fn rejects_degenerate_names() {
        assert!(!is_valid_file_name(""));
        assert!(!is_valid_file_name("."));
        assert!(!is_valid_file_name(".hidden"));
        assert!(!is_valid_file_name("cat png.png"));
        assert!(!is_valid_file_name(&format!("a{}", "b".repeat(255))));
    }
}
