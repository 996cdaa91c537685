use crate::error::BumpResult;
use crate::types::version::Version;
use crate::utils::fs::append_text;
use std::path::Path;

/// Renders the release stub appended after every bump.
pub fn release_note(version: Version, release_url_base: &str) -> String {
    format!(
        "\n\n## [Release {v}]\nRead on [GitHub]({base}{v})",
        v = version,
        base = release_url_base
    )
}

/// Appends the release stub for `version` to the end of the changelog.
pub fn append_release_note(
    path: &Path,
    version: Version,
    release_url_base: &str,
) -> BumpResult<()> {
    append_text(path, &release_note(version, release_url_base))
}
