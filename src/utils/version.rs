use std::path::PathBuf;

/// Version file dropped next to packaged binaries by the release pipeline.
const VERSION_FILE: &str = "project-version.json";

/// Returns the CLI version with a runtime-first strategy:
/// 1. NEXTTAG_CLI_VERSION env var
/// 2. project-version.json located next to the running binary
/// 3. compile-time env!("CARGO_PKG_VERSION") as a last resort
pub fn get_version() -> String {
    // 1) env override
    if let Ok(v) = std::env::var("NEXTTAG_CLI_VERSION") {
        if !v.trim().is_empty() {
            return v;
        }
    }

    // 2) version file next to the binary
    if let Some(v) = version_file_next_to_binary().and_then(read_version_file) {
        return v;
    }

    // 3) compile-time fallback
    option_env!("CARGO_PKG_VERSION").unwrap_or("0.0.0").to_string()
}

fn version_file_next_to_binary() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let candidate = exe.parent()?.join(VERSION_FILE);
    candidate.exists().then_some(candidate)
}

fn read_version_file(path: PathBuf) -> Option<String> {
    let contents = std::fs::read_to_string(path).ok()?;
    let parsed: serde_json::Value = serde_json::from_str(&contents).ok()?;
    parsed
        .get("version")
        .and_then(|v| v.as_str())
        .map(|v| v.to_string())
}
