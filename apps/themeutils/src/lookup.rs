//! First-match lookups over resume sections.

use tracing::debug;

use crate::models::{Language, Profile, Resume};

/// Fluency value that marks a language as the candidate's native one.
pub const NATIVE_FLUENCY: &str = "Native speaker";

/// First profile whose `network` equals `network` exactly (case-sensitive).
pub fn get_profile<'a>(resume: &'a Resume, network: &str) -> Option<&'a Profile> {
    let profile = resume
        .basics
        .profiles
        .iter()
        .find(|p| p.network == network);
    if profile.is_none() {
        debug!(network, "no profile for network");
    }
    profile
}

/// URL of the first profile on `network`, as stored (possibly empty).
/// `None` only when there is no such profile.
pub fn get_url_for_profile<'a>(resume: &'a Resume, network: &str) -> Option<&'a str> {
    get_profile(resume, network).map(|p| p.url.as_str())
}

/// First language whose fluency is exactly `NATIVE_FLUENCY`.
pub fn get_native_language(resume: &Resume) -> Option<&Language> {
    resume
        .languages
        .as_deref()?
        .iter()
        .find(|l| l.fluency == NATIVE_FLUENCY)
}
