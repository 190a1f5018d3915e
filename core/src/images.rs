use once_cell::sync::Lazy;
use regex::Regex;

/// CDN serving clan images referenced from article contents.
pub const CLAN_IMAGE_BASE: &str = "https://clan.fastly.steamstatic.com/images";

/// Shown when an article embeds no recognizable image.
pub const DEFAULT_IMAGE_URL: &str =
    "https://www.lffl.org/wp-content/uploads/2022/02/valve-proton.jpg";

// Placeholder token, numeric folder id, alphanumeric filename with a
// recognized image extension.
static CLAN_IMAGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{STEAM_CLAN_IMAGE\}/(\d+)/([A-Za-z0-9]+\.(?:png|jpg|jpeg|webp))")
        .expect("clan image pattern is valid")
});

/// Derives the image URL for an article from its free-text contents.
///
/// Articles embed clan images as `{STEAM_CLAN_IMAGE}/<folder>/<file>`; the
/// first such reference is resolved against the CDN. Without one, a fixed
/// fallback picture is returned.
pub fn extract_image_url(contents: &str) -> String {
    match CLAN_IMAGE_RE.captures(contents) {
        Some(caps) => format!("{CLAN_IMAGE_BASE}/{}/{}", &caps[1], &caps[2]),
        None => DEFAULT_IMAGE_URL.to_string(),
    }
}
