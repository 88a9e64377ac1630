//! Parent-array text format
//!
//! ```text
//! # two trees
//! [None, 2, None, 4, 2, 4]
//! ```
//! Tokens are separated by whitespace and/or commas, one surrounding pair of
//! brackets is optional and `#` starts a comment running to the end of line.

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};

/// Parse parent-array text. `root_markers` are the tokens meaning "no parent".
#[instrument(level = "debug", skip(text))]
pub fn parse_parents(
    text: &str,
    root_markers: &[String],
) -> ApplicationResult<Vec<Option<usize>>> {
    let body = strip_comments(text);
    let body = strip_brackets(body.trim());

    let parents = body
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| parse_token(token, position, root_markers))
        .collect::<ApplicationResult<Vec<_>>>()?;

    debug!("parsed {} nodes", parents.len());
    Ok(parents)
}

fn parse_token(
    token: &str,
    position: usize,
    root_markers: &[String],
) -> ApplicationResult<Option<usize>> {
    if root_markers.iter().any(|marker| marker == token) {
        return Ok(None);
    }
    token
        .parse::<usize>()
        .map(Some)
        .map_err(|_| ApplicationError::Parse {
            token: token.to_string(),
            position,
        })
}

fn strip_comments(text: &str) -> String {
    text.lines()
        .map(|line| line.split_once('#').map_or(line, |(content, _)| content))
        .collect::<Vec<_>>()
        .join("\n")
}

fn strip_brackets(text: &str) -> &str {
    text.strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .unwrap_or(text)
}

/// Render a parent array in the format accepted by [`parse_parents`].
pub fn format_parents(parents: &[Option<usize>], root_marker: &str) -> String {
    let tokens: Vec<String> = parents
        .iter()
        .map(|parent| parent.map_or_else(|| root_marker.to_string(), |p| p.to_string()))
        .collect();
    format!("[{}]", tokens.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn markers() -> Vec<String> {
        vec!["None".into(), "-".into()]
    }

    #[rstest]
    #[case("[None,2,None,4,2,4]", vec![None, Some(2), None, Some(4), Some(2), Some(4)])]
    #[case("- 0 0\n1", vec![None, Some(0), Some(0), Some(1)])]
    #[case("None, 0 # root and child\n", vec![None, Some(0)])]
    #[case("", vec![])]
    #[case("[]", vec![])]
    fn given_text_when_parsing_then_returns_parents(
        #[case] text: &str,
        #[case] expected: Vec<Option<usize>>,
    ) {
        assert_eq!(parse_parents(text, &markers()).unwrap(), expected);
    }

    #[test]
    fn given_unknown_token_when_parsing_then_reports_position() {
        let err = parse_parents("None 0 x", &markers()).unwrap_err();

        match err {
            ApplicationError::Parse { token, position } => {
                assert_eq!(token, "x");
                assert_eq!(position, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn given_negative_index_when_parsing_then_fails() {
        assert!(parse_parents("None -1", &markers()).is_err());
    }

    #[test]
    fn given_parents_when_formatting_then_renders_bracketed_list() {
        let parents = vec![None, Some(0), Some(1)];

        let text = format_parents(&parents, "None");

        assert_eq!(text, "[None, 0, 1]");
    }
}
