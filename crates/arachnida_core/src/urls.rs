use url::Url;

/// Path suffixes accepted as downloadable images (compared lowercase).
pub const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".bmp"];

/// Resolve an `src`/`href` attribute value against the page it was found on.
///
/// Absolute references (`http://…`, `https://…`, other schemes) replace the
/// base entirely; everything else follows standard relative resolution.
pub fn resolve_reference(page: &Url, reference: &str) -> Option<Url> {
    let trimmed = reference.trim();
    if trimmed.is_empty() {
        return None;
    }
    page.join(trimmed).ok()
}

/// True when the URL path ends with a recognized image extension.
pub fn is_image_url(url: &Url) -> bool {
    let path = url.path().to_ascii_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Canonical form used for visited-set membership: the serialized URL
/// without its fragment.
pub fn canonicalize(url: &Url) -> String {
    let mut url = url.clone();
    url.set_fragment(None);
    url.into()
}
