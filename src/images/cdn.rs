//! URL rewriting for Cloudinary-hosted images.
//!
//! All user-visible imagery (building photos, amenity shots, profile
//! pictures) is served from Cloudinary, which applies on-the-fly transforms
//! encoded as a path segment after its `/upload/` marker. Rewriting the url
//! to request an appropriately sized, auto-format variant cuts transfer
//! size without touching the stored asset.

const UPLOAD_MARKER: &str = "/upload/";

/// Smallest width worth requesting from the CDN.
const MIN_TRANSFORM_WIDTH: f64 = 80.0;
/// Largest width the CDN is asked to produce.
const MAX_TRANSFORM_WIDTH: f64 = 1800.0;

/// Rewrites a Cloudinary url to request an optimized variant at roughly
/// `target_width` css pixels.
///
/// Inserts `f_auto,q_auto,c_limit,w_{width}` after the upload marker, with
/// the width rounded and clamped to `[80, 1800]`. Anything that is not a
/// Cloudinary url, lacks the marker, or has nothing after the marker comes
/// back unchanged, as does a non-finite target width.
pub fn optimize_image_url(url: &str, target_width: f64) -> String {
    if !has_cloudinary_host(url) || !target_width.is_finite() {
        return url.to_owned();
    }

    let Some(marker_index) = url.find(UPLOAD_MARKER) else {
        return url.to_owned();
    };

    let insert_at = marker_index + UPLOAD_MARKER.len();
    let remainder = &url[insert_at..];
    if remainder.is_empty() {
        return url.to_owned();
    }

    let width = target_width
        .round()
        .clamp(MIN_TRANSFORM_WIDTH, MAX_TRANSFORM_WIDTH) as u32;
    format!(
        "{}f_auto,q_auto,c_limit,w_{}/{}",
        &url[..insert_at],
        width,
        remainder
    )
}

fn has_cloudinary_host(url: &str) -> bool {
    const HOSTS: [&str; 2] = [
        "https://res.cloudinary.com/",
        "http://res.cloudinary.com/",
    ];
    HOSTS.iter().any(|prefix| {
        url.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}
