//! Angle parsing and degree/radian conversion.

use miette::NamedSource;
use pest::Parser;
use std::f32::consts::PI;

use crate::errors::TransformError;
use crate::{Rule, ValueParser};

/// Degrees to radians.
pub fn radians(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

/// Radians to degrees.
pub fn degrees(radians: f32) -> f32 {
    radians * 180.0 / PI
}

/// Parse an angle string into radians.
///
/// The grammar is `<float><unit>?` with unit one of `deg`, `grad`, `rad`
/// (case-insensitive); a bare number is degrees. `grad` divides the full
/// turn into 400 parts, so `200grad` is a half turn.
pub fn parse_angle(input: &str) -> Result<f32, TransformError> {
    let trimmed = input.trim();
    let Ok(pairs) = ValueParser::parse(Rule::angle, trimmed) else {
        return Err(TransformError::MalformedAngle {
            input: input.to_string(),
        });
    };

    let mut value = 0.0_f32;
    let mut to_radians = PI / 180.0;
    for pair in pairs.flatten() {
        match pair.as_rule() {
            Rule::value => {
                let token = pair.as_str();
                value = token.parse::<f32>().map_err(|_| TransformError::MalformedNumber {
                    token: token.to_string(),
                    src: NamedSource::new("<angle>", trimmed.to_string()),
                    span: (pair.as_span().start(), token.len()).into(),
                })?;
            }
            Rule::angle_unit => {
                to_radians = match pair.as_str().to_ascii_lowercase().as_str() {
                    "grad" => PI / 200.0,
                    "rad" => 1.0,
                    _ => PI / 180.0,
                };
            }
            _ => {}
        }
    }
    Ok(value * to_radians)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    const EPS: f32 = 1e-6;

    #[test]
    fn bare_number_is_degrees() {
        assert!((parse_angle("45").unwrap() - FRAC_PI_4).abs() < EPS);
        assert!((parse_angle("-90").unwrap() + FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn unit_suffixes() {
        assert!((parse_angle("45deg").unwrap() - FRAC_PI_4).abs() < EPS);
        assert!((parse_angle("1rad").unwrap() - 1.0).abs() < EPS);
        assert!((parse_angle("200grad").unwrap() - PI).abs() < EPS);
    }

    #[test]
    fn unit_is_case_insensitive() {
        assert!((parse_angle("45DEG").unwrap() - FRAC_PI_4).abs() < EPS);
        assert!((parse_angle("200Grad").unwrap() - PI).abs() < EPS);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert!((parse_angle("  45deg ").unwrap() - FRAC_PI_4).abs() < EPS);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(
            parse_angle("abc"),
            Err(TransformError::MalformedAngle { .. })
        ));
        // a space between number and unit is not part of the grammar
        assert!(matches!(
            parse_angle("45 deg"),
            Err(TransformError::MalformedAngle { .. })
        ));
        // lexes fine, fails float parsing
        assert!(matches!(
            parse_angle("1.2.3deg"),
            Err(TransformError::MalformedNumber { .. })
        ));
    }

    #[test]
    fn conversion_helpers() {
        assert!((radians(180.0) - PI).abs() < EPS);
        assert!((degrees(PI) - 180.0).abs() < 1e-4);
    }
}
