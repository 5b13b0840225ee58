//! Name normalization for stored media files.

/// Lowercase `input` and collapse anything that is not alphanumeric into
/// single hyphens, trimming hyphens from both ends.
///
/// Used to build stable, filesystem-safe media filenames from entity names.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut last_was_hyphen = true;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.is_empty() {
        slug.push_str("unnamed");
    }

    slug
}
