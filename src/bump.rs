use semver::Version;

/// Tag emitted when there is no usable prior release tag.
pub const BOOTSTRAP_TAG: &str = "v1.0.0";

/// Computes the next release tag from the latest existing one.
///
/// ### Parameters
/// - `current`: the latest release tag, if any. `None`, the empty string and
///   the literal placeholders `"null"` / `"None"` all mean "no prior release".
///
/// Returns `v{major}.{minor}.{patch + 1}` for a parseable tag. Pre-release
/// and build metadata are dropped in the result. Anything unparseable yields
/// the bootstrap tag `v1.0.0`; malformed input is never an error.
pub fn next_tag(current: Option<&str>) -> String {
    let raw = match current {
        Some(tag) if !tag.is_empty() && tag != "null" && tag != "None" => tag,
        _ => return BOOTSTRAP_TAG.to_string(),
    };

    // Only a single leading lowercase 'v' is recognized as a tag prefix.
    let clean = raw.strip_prefix('v').unwrap_or(raw);

    match Version::parse(clean) {
        Ok(ver) => format!("v{}", bump_patch(&ver)),
        Err(_) => BOOTSTRAP_TAG.to_string(),
    }
}

/// Patch-bumps a parsed version: patch + 1, pre-release and build removed.
fn bump_patch(ver: &Version) -> Version {
    Version::new(ver.major, ver.minor, ver.patch.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_prior_tag_bootstraps() {
        assert_eq!(next_tag(None), "v1.0.0");
    }

    #[test]
    fn placeholder_strings_bootstrap() {
        assert_eq!(next_tag(Some("")), "v1.0.0");
        assert_eq!(next_tag(Some("null")), "v1.0.0");
        assert_eq!(next_tag(Some("None")), "v1.0.0");
    }

    #[test]
    fn bumps_patch_of_a_prefixed_tag() {
        assert_eq!(next_tag(Some("v2.3.4")), "v2.3.5");
        assert_eq!(next_tag(Some("v0.0.0")), "v0.0.1");
    }

    #[test]
    fn accepts_tags_without_the_prefix() {
        assert_eq!(next_tag(Some("2.3.4")), "v2.3.5");
    }

    #[test]
    fn strips_at_most_one_leading_v() {
        assert_eq!(next_tag(Some("vv1.2.3")), "v1.0.0");
    }

    #[test]
    fn uppercase_prefix_is_not_a_tag() {
        assert_eq!(next_tag(Some("V1.2.3")), "v1.0.0");
    }

    #[test]
    fn prerelease_and_build_metadata_are_dropped() {
        assert_eq!(next_tag(Some("v1.0.0-beta")), "v1.0.1");
        assert_eq!(next_tag(Some("1.2.3-rc.1+build.5")), "v1.2.4");
        assert_eq!(next_tag(Some("v1.2.3+20130313144700")), "v1.2.4");
    }

    #[test]
    fn malformed_tags_fall_back() {
        for bad in [
            "abc",
            "1.2",
            "v1.2.3.4",
            "version-one",
            "not-a-version",
            "1.2.3 ",
            " ",
            "01.2.3",
        ] {
            assert_eq!(next_tag(Some(bad)), "v1.0.0", "input: {bad:?}");
        }
    }

    #[test]
    fn bumping_the_bootstrap_tag_moves_forward() {
        assert_eq!(next_tag(Some("v1.0.0")), "v1.0.1");
    }

    #[test]
    fn large_components_survive() {
        assert_eq!(next_tag(Some("v10.20.30")), "v10.20.31");
        assert_eq!(
            next_tag(Some("v1.2.18446744073709551615")),
            "v1.2.18446744073709551615"
        );
    }
}
