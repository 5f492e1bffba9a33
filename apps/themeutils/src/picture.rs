//! Profile picture resolution with a Gravatar fallback.

use sha2::{Digest, Sha256};
use tracing::trace;
use url::form_urlencoded;

use crate::config::GravatarConfig;
use crate::models::Resume;

pub const GRAVATAR_BASE_URL: &str = "https://www.gravatar.com/avatar/";

/// Returns the resume's picture (`picture`, else `image`) verbatim when it is
/// non-empty, else a Gravatar URL for `basics.email`. A whitespace-only
/// picture counts as set. `None` when the resume has neither.
pub fn url_for_picture(resume: &Resume, gravatar: &GravatarConfig) -> Option<String> {
    let basics = &resume.basics;
    let picture = basics.picture();
    if !picture.is_empty() {
        return Some(picture.to_string());
    }
    if basics.email.trim().is_empty() {
        trace!("resume has neither picture nor email");
        return None;
    }
    trace!("no picture set, falling back to gravatar");
    Some(gravatar_url(&basics.email, gravatar))
}

/// Builds a Gravatar avatar URL. The address is trimmed and lowercased before
/// hashing; query parameters with an empty value are left out.
pub fn gravatar_url(email: &str, params: &GravatarConfig) -> String {
    let hash = hex::encode(Sha256::digest(email.trim().to_lowercase().as_bytes()));

    let mut query = form_urlencoded::Serializer::new(String::new());
    for (key, value) in [("s", &params.s), ("r", &params.r), ("d", &params.d)] {
        if !value.is_empty() {
            query.append_pair(key, value);
        }
    }
    let query = query.finish();

    if query.is_empty() {
        format!("{GRAVATAR_BASE_URL}{hash}")
    } else {
        format!("{GRAVATAR_BASE_URL}{hash}?{query}")
    }
}
