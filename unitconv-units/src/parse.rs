//! Request parsing - split lines like "10 km to miles" into value and unit names
//!
//! The destination boundary is found with a fixed three-step heuristic:
//! 1. the second-to-last token, if it contains "to" (covers "into")
//! 2. otherwise, when no token is exactly "to", the last token "in"
//! 3. otherwise the last token "to"
//!
//! A unit name that starts with "degree" or "degrees" takes the next token
//! with it, so "degrees celsius" is one name.

use unitconv_core::ParseError;

/// A request line split into its parts. Unit names are lowercase.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRequest {
    pub value: f64,
    pub from: String,
    pub to: String,
}

/// Split a raw line into lowercase tokens
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace()
        .map(|t| t.to_lowercase())
        .collect()
}

/// Parse a request line
///
/// Supported formats:
/// - "10 km to miles"
/// - "10 miles into km"
/// - "10 c in f"
/// - "0 degrees celsius in degrees fahrenheit"
pub fn parse_request(line: &str) -> Result<ParsedRequest, ParseError> {
    let tokens = tokenize(line);

    let first = tokens.first().ok_or(ParseError::Empty)?;
    let value = parse_number(first)?;

    let from = unit_phrase(&tokens, 1)?;
    let connector = find_connector(&tokens).ok_or(ParseError::UnresolvedConnector)?;
    let to = unit_phrase(&tokens, connector + 1)?;

    tracing::debug!(value, %from, %to, connector, "parsed request");
    Ok(ParsedRequest { value, from, to })
}

/// Parse the leading number. Overflow such as "1e400" still yields an
/// infinity, but the words "nan", "inf" and "infinity" are not numbers.
fn parse_number(token: &str) -> Result<f64, ParseError> {
    let malformed = || ParseError::MalformedNumber(token.to_string());
    let value: f64 = token.parse().map_err(|_| malformed())?;

    if !value.is_finite() && !token.bytes().any(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    Ok(value)
}

/// Locate the token separating source and destination unit names
pub fn find_connector(tokens: &[String]) -> Option<usize> {
    let len = tokens.len();

    if len >= 2 && tokens[len - 2].contains("to") {
        return Some(len - 2);
    }

    if !tokens.iter().any(|t| t == "to") {
        return tokens.iter().rposition(|t| t == "in");
    }

    tokens.iter().rposition(|t| t == "to")
}

/// Read the unit name starting at `position`
fn unit_phrase(tokens: &[String], position: usize) -> Result<String, ParseError> {
    let head = tokens.get(position)
        .ok_or(ParseError::MissingUnit { position })?;

    if head == "degree" || head == "degrees" {
        let tail = tokens.get(position + 1)
            .ok_or(ParseError::MissingUnit { position: position + 1 })?;
        return Ok(format!("{} {}", head, tail));
    }

    Ok(head.clone())
}
