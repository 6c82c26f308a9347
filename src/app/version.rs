//! Version banner and default User-Agent strings.

/// Crate version baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Placeholder commit when the build did not set `UNFURL_COMMIT`.
pub const BUILD_COMMIT_UNSET: &str = "0000000";

/// Commit hash baked in by the release build, if any.
pub const BUILD_COMMIT: &str = match option_env!("UNFURL_COMMIT") {
    Some(commit) => commit,
    None => BUILD_COMMIT_UNSET,
};

/// Build date baked in by the release build, if any.
pub const BUILD_DATE: &str = match option_env!("UNFURL_BUILD_DATE") {
    Some(date) => date,
    None => "0001-01-01T00:00:00Z",
};

const LICENSE_YEAR: &str = "2025";
const LICENSE_OWNER: &str = "AJ ONeal";
const LICENSE_TYPE: &str = "MPL-2.0";

/// Default User-Agent for a binary, e.g. `unfurl/0.1.0 (1a2b3c4)`.
pub fn default_user_agent(product: &str) -> String {
    user_agent_for(product, VERSION, BUILD_COMMIT)
}

fn user_agent_for(product: &str, version: &str, commit: &str) -> String {
    let mut ua = format!("{product}/{version}");
    if commit != BUILD_COMMIT_UNSET {
        ua.push_str(&format!(" ({commit})"));
    }
    ua
}

/// The banner printed by `--version` and above usage text.
pub fn banner(name: &str) -> String {
    let short_commit: String = BUILD_COMMIT.chars().take(7).collect();
    format!(
        "{name} v{VERSION} {short_commit} ({BUILD_DATE})\n\
         Copyright (C) {LICENSE_YEAR} {LICENSE_OWNER}\n\
         Licensed under the {LICENSE_TYPE} license"
    )
}

/// Prints the banner to stderr.
pub fn print_version(name: &str) {
    eprintln!("{}", banner(name));
}
