//! Rendering of a traced chain for the command line.
//!
//! The chain keeps its latest-first order in every format: text output lists
//! the discovered targets from the most recent hop back, then the URL the
//! user typed.

use crate::chain::RedirectChain;

/// What the command prints, and whether it fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Text for stdout, newline-terminated
    pub stdout: String,
    /// Error line for stderr; the process exits with 1 when present
    pub stderr: Option<String>,
}

impl Report {
    /// Process exit code for this report.
    pub fn exit_code(&self) -> i32 {
        if self.stderr.is_some() {
            1
        } else {
            0
        }
    }
}

/// How many redirects the chain actually followed.
///
/// Every hop counts except a terminal latest hop, which only confirms the end.
pub fn actual_depth(chain: &RedirectChain) -> usize {
    match chain.latest() {
        Some(latest) if latest.is_terminal() => chain.len() - 1,
        _ => chain.len(),
    }
}

/// Renders a successful trace.
///
/// - `depth > 0`: only the latest hop (its target, or the whole hop as JSON),
///   failing when the chain is shallower than asked
/// - `json`: the whole chain as a JSON array
/// - otherwise: every discovered target, then `start_url`, failing when the
///   chain was cut short at `max_redirects`
///
/// # Errors
///
/// Returns a `serde_json::Error` if JSON encoding fails.
pub fn render_report(
    chain: &RedirectChain,
    start_url: &str,
    depth: usize,
    max_redirects: usize,
    json: bool,
) -> Result<Report, serde_json::Error> {
    if depth > 0 {
        let stdout = match chain.latest() {
            Some(latest) if json => format!("{}\n", serde_json::to_string(latest)?),
            Some(latest) => format!("{}\n", latest.target_url),
            None => String::new(),
        };
        let actual = actual_depth(chain);
        let stderr = (depth > actual)
            .then(|| format!("Error: --depth is {depth}, but redirect count is {actual}"));
        return Ok(Report { stdout, stderr });
    }

    if json {
        return Ok(Report {
            stdout: format!("{}\n", serde_json::to_string(chain)?),
            stderr: None,
        });
    }

    let mut stdout = String::new();
    for hop in chain.iter().filter(|hop| !hop.is_terminal()) {
        stdout.push_str(&hop.target_url);
        stdout.push('\n');
    }
    stdout.push_str(start_url);
    stdout.push('\n');

    let stderr = (chain.len() == max_redirects && chain.is_cut_short())
        .then(|| format!("Error: too many redirects (limit {max_redirects})"));
    Ok(Report { stdout, stderr })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::Hop;
    use std::collections::BTreeMap;

    fn chain_of(hops: &[(&str, &str)]) -> RedirectChain {
        let hops: Vec<Hop> = hops
            .iter()
            .map(|(url, target)| Hop {
                url: url.to_string(),
                target_url: target.to_string(),
                headers: BTreeMap::new(),
                body: String::new(),
            })
            .collect();
        serde_json::from_value(serde_json::to_value(hops).expect("hops serialize"))
            .expect("chain deserializes")
    }

    fn terminal_chain() -> RedirectChain {
        // Latest first: A -> B -> C, C terminal
        chain_of(&[
            ("https://c.example/", ""),
            ("https://b.example/", "https://c.example/"),
            ("https://a.example/", "https://b.example/"),
        ])
    }

    #[test]
    fn test_text_output_lists_targets_latest_first_then_input() {
        let report = render_report(&terminal_chain(), "https://a.example/", 0, 10, false)
            .expect("renders");
        assert_eq!(
            report.stdout,
            "https://c.example/\nhttps://b.example/\nhttps://a.example/\n"
        );
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_text_output_reports_too_many_redirects() {
        let chain = chain_of(&[
            ("https://b.example/", "https://c.example/"),
            ("https://a.example/", "https://b.example/"),
        ]);
        let report = render_report(&chain, "https://a.example/", 0, 2, false).expect("renders");
        assert_eq!(
            report.stderr.as_deref(),
            Some("Error: too many redirects (limit 2)")
        );
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_depth_prints_latest_target() {
        let chain = chain_of(&[("https://a.example/", "https://b.example/")]);
        let report = render_report(&chain, "https://a.example/", 1, 10, false).expect("renders");
        assert_eq!(report.stdout, "https://b.example/\n");
        assert_eq!(report.stderr, None);
    }

    #[test]
    fn test_depth_deeper_than_chain_fails() {
        let report = render_report(&terminal_chain(), "https://a.example/", 5, 10, false)
            .expect("renders");
        assert_eq!(report.stdout, "\n");
        assert_eq!(
            report.stderr.as_deref(),
            Some("Error: --depth is 5, but redirect count is 2")
        );
    }

    #[test]
    fn test_depth_json_prints_single_hop() {
        let chain = chain_of(&[("https://a.example/", "https://b.example/")]);
        let report = render_report(&chain, "https://a.example/", 1, 10, true).expect("renders");
        let value: serde_json::Value =
            serde_json::from_str(report.stdout.trim()).expect("valid JSON");
        assert_eq!(value["url"], "https://a.example/");
        assert_eq!(value["target_url"], "https://b.example/");
    }

    #[test]
    fn test_json_prints_whole_chain() {
        let report = render_report(&terminal_chain(), "https://a.example/", 0, 10, true)
            .expect("renders");
        let value: serde_json::Value =
            serde_json::from_str(report.stdout.trim()).expect("valid JSON");
        assert_eq!(value.as_array().map(Vec::len), Some(3));
        assert_eq!(value[0]["url"], "https://c.example/");
    }

    #[test]
    fn test_actual_depth() {
        assert_eq!(actual_depth(&terminal_chain()), 2);
        let cut = chain_of(&[("https://a.example/", "https://b.example/")]);
        assert_eq!(actual_depth(&cut), 1);
        assert_eq!(actual_depth(&RedirectChain::default()), 0);
    }
}
