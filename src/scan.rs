//! Numeric token scanner for SVG-style value lists.
//!
//! SVG point lists and transform arguments separate numbers with whatever
//! the author felt like: commas, whitespace, nothing at all (`"1-2"` is two
//! numbers). The scanner walks the `value_list` grammar rule and parses
//! each token it yields; any token that fails float parsing fails the whole
//! scan.

use miette::NamedSource;
use pest::Parser;

use crate::errors::TransformError;
use crate::{Rule, ValueParser};

/// Extract the ordered sequence of floating-point numbers embedded in
/// `input`.
///
/// Non-numeric characters act as separators. A `-` that is not part of an
/// exponent starts a new token, so `"1-2"` scans as `[1.0, -2.0]`.
pub fn scan_values(input: &str) -> Result<Vec<f32>, TransformError> {
    scan_values_at(input, 0, input, "<values>")
}

/// Scan `slice`, which sits at byte `offset` inside `source`, so that
/// error spans land in the surrounding text (the transform-list parser
/// passes the full command string here).
pub(crate) fn scan_values_at(
    slice: &str,
    offset: usize,
    source: &str,
    source_name: &str,
) -> Result<Vec<f32>, TransformError> {
    // `value_list` accepts any input; an Err here can only mean the
    // grammar changed. Surface the whole slice as one bad token.
    let Ok(pairs) = ValueParser::parse(Rule::value_list, slice) else {
        return Err(TransformError::MalformedNumber {
            token: slice.to_string(),
            src: NamedSource::new(source_name, source.to_string()),
            span: (offset, slice.len()).into(),
        });
    };

    let mut values = Vec::new();
    for pair in pairs.flatten() {
        if pair.as_rule() != Rule::value {
            continue;
        }
        let token = pair.as_str();
        match token.parse::<f32>() {
            Ok(v) => values.push(v),
            Err(_) => {
                return Err(TransformError::MalformedNumber {
                    token: token.to_string(),
                    src: NamedSource::new(source_name, source.to_string()),
                    span: (offset + pair.as_span().start(), token.len()).into(),
                });
            }
        }
    }
    Ok(values)
}

/// Fail with [`TransformError::ArgumentCountMismatch`] unless `values` has
/// exactly `expected` entries. Used by every fixed-arity transform command.
pub fn check_count(
    values: &[f32],
    expected: usize,
    command: &'static str,
) -> Result<(), TransformError> {
    if values.len() != expected {
        return Err(TransformError::ArgumentCountMismatch {
            command,
            expected: arity_name(expected),
            actual: values.len(),
        });
    }
    Ok(())
}

fn arity_name(n: usize) -> &'static str {
    match n {
        1 => "1",
        2 => "2",
        3 => "3",
        6 => "6",
        _ => "another number of",
    }
}
