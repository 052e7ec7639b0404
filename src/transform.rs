//! SVG-style transform-list parsing.
//!
//! A transform list is a sequence of `name(args)` commands, optionally
//! separated by `;` or whitespace, composed left-to-right so that the
//! rightmost listed command is applied to a point first:
//!
//! ```
//! use affine2d::parse_transform;
//! use glam::vec2;
//!
//! let m = parse_transform("translate(10,20) rotate(90)").lenient();
//! // rotate happens first, then the translation
//! assert!((m.transform_point(vec2(1.0, 0.0)) - vec2(10.0, 21.0)).length() < 1e-5);
//! ```
//!
//! The parser is permissive: unknown command names are skipped, and a
//! malformed command loses only itself while everything else composes.
//! [`ParseOutcome`] carries the best-effort matrix together with whatever
//! errors were recorded; callers pick [`strict`](ParseOutcome::strict) or
//! [`lenient`](ParseOutcome::lenient) handling explicitly.

use glam::{Vec2, vec2};
use miette::NamedSource;

use crate::angle::radians;
use crate::errors::TransformError;
use crate::matrix::Matrix2D;
use crate::scan::{check_count, scan_values_at};

const SOURCE_NAME: &str = "<transform>";

/// A single validated transform command. Single-axis spellings
/// (`translatex`, `scaley`, ...) normalize into the two-axis variants at
/// parse time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Explicit six-value matrix in `(xx, yx, xy, yy, x0, y0)` order.
    Matrix([f32; 6]),
    Translate(Vec2),
    Scale(Vec2),
    Rotate {
        radians: f32,
        /// For the three-argument `rotate(angle, cx, cy)` form.
        pivot: Option<Vec2>,
    },
    /// Tangent-based skew.
    Skew(Vec2),
}

impl Command {
    /// The elementary matrix for this command.
    pub fn to_matrix(self) -> Matrix2D {
        match self {
            Command::Matrix(m) => Matrix2D::from_array(m),
            Command::Translate(v) => Matrix2D::from_translation(v),
            Command::Scale(v) => Matrix2D::from_scale(v),
            Command::Rotate { radians, pivot: None } => Matrix2D::from_rotation(radians),
            // translate to the pivot, rotate, translate back
            Command::Rotate { radians, pivot: Some(p) } => Matrix2D::from_translation(-p)
                .then(Matrix2D::from_rotation(radians))
                .then(Matrix2D::from_translation(p)),
            Command::Skew(v) => Matrix2D::from_skew(v),
        }
    }
}

/// The closed set of recognized command names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Matrix,
    Translate,
    TranslateX,
    TranslateY,
    Scale,
    ScaleX,
    ScaleY,
    Rotate,
    Skew,
    SkewX,
    SkewY,
}

impl CommandKind {
    fn lookup(name: &str) -> Option<CommandKind> {
        Some(match name {
            "matrix" => CommandKind::Matrix,
            "translate" => CommandKind::Translate,
            "translatex" => CommandKind::TranslateX,
            "translatey" => CommandKind::TranslateY,
            "scale" => CommandKind::Scale,
            "scalex" => CommandKind::ScaleX,
            "scaley" => CommandKind::ScaleY,
            "rotate" => CommandKind::Rotate,
            "skew" => CommandKind::Skew,
            "skewx" => CommandKind::SkewX,
            "skewy" => CommandKind::SkewY,
            _ => return None,
        })
    }

    fn name(self) -> &'static str {
        match self {
            CommandKind::Matrix => "matrix",
            CommandKind::Translate => "translate",
            CommandKind::TranslateX => "translatex",
            CommandKind::TranslateY => "translatey",
            CommandKind::Scale => "scale",
            CommandKind::ScaleX => "scalex",
            CommandKind::ScaleY => "scaley",
            CommandKind::Rotate => "rotate",
            CommandKind::Skew => "skew",
            CommandKind::SkewX => "skewx",
            CommandKind::SkewY => "skewy",
        }
    }

    /// Validate the argument list and build the command.
    ///
    /// `rotate`'s angle is always degrees in a transform list; `skew`
    /// arguments go into the tangent untouched.
    fn build(self, v: &[f32]) -> Result<Command, TransformError> {
        Ok(match self {
            CommandKind::Matrix => {
                check_count(v, 6, self.name())?;
                Command::Matrix([v[0], v[1], v[2], v[3], v[4], v[5]])
            }
            CommandKind::Translate => {
                check_count(v, 2, self.name())?;
                Command::Translate(vec2(v[0], v[1]))
            }
            CommandKind::TranslateX => {
                check_count(v, 1, self.name())?;
                Command::Translate(vec2(v[0], 0.0))
            }
            CommandKind::TranslateY => {
                check_count(v, 1, self.name())?;
                Command::Translate(vec2(0.0, v[0]))
            }
            CommandKind::Scale => match v {
                [s] => Command::Scale(Vec2::splat(*s)),
                [x, y] => Command::Scale(vec2(*x, *y)),
                _ => {
                    return Err(TransformError::ArgumentCountMismatch {
                        command: self.name(),
                        expected: "1 or 2",
                        actual: v.len(),
                    });
                }
            },
            CommandKind::ScaleX => {
                check_count(v, 1, self.name())?;
                Command::Scale(vec2(v[0], 1.0))
            }
            CommandKind::ScaleY => {
                check_count(v, 1, self.name())?;
                Command::Scale(vec2(1.0, v[0]))
            }
            CommandKind::Rotate => match v {
                [deg] => Command::Rotate {
                    radians: radians(*deg),
                    pivot: None,
                },
                [deg, cx, cy] => Command::Rotate {
                    radians: radians(*deg),
                    pivot: Some(vec2(*cx, *cy)),
                },
                _ => {
                    return Err(TransformError::ArgumentCountMismatch {
                        command: self.name(),
                        expected: "1 or 3",
                        actual: v.len(),
                    });
                }
            },
            CommandKind::Skew => {
                check_count(v, 2, self.name())?;
                Command::Skew(vec2(v[0], v[1]))
            }
            CommandKind::SkewX => {
                check_count(v, 1, self.name())?;
                Command::Skew(vec2(v[0], 0.0))
            }
            CommandKind::SkewY => {
                check_count(v, 1, self.name())?;
                Command::Skew(vec2(0.0, v[0]))
            }
        })
    }
}

/// Parser strictness knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Record unknown command names as
    /// [`TransformError::UnrecognizedCommand`] instead of skipping them
    /// silently. Never fatal either way.
    pub report_unknown: bool,
}

/// Result of parsing a transform list: the best-effort composed matrix,
/// the commands that parsed, and whatever errors were recorded along the
/// way.
#[derive(Debug)]
pub struct ParseOutcome {
    /// Everything that composed successfully. Identity if nothing did.
    pub matrix: Matrix2D,
    /// The commands behind `matrix`, in source order.
    pub commands: Vec<Command>,
    /// Per-command errors; empty on a clean parse.
    pub errors: Vec<TransformError>,
}

impl ParseOutcome {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// The matrix, rejecting the parse if any command failed.
    pub fn strict(mut self) -> Result<Matrix2D, TransformError> {
        if self.errors.is_empty() {
            Ok(self.matrix)
        } else {
            Err(self.errors.remove(0))
        }
    }

    /// The best-effort matrix, errors ignored.
    pub fn lenient(self) -> Matrix2D {
        self.matrix
    }
}

/// Parse a transform-list string with default options.
pub fn parse_transform(input: &str) -> ParseOutcome {
    parse_transform_with(input, ParseOptions::default())
}

/// Parse a transform-list string.
///
/// The walk is a fold from the identity: each command's elementary matrix
/// is prepended onto the accumulator, which is what makes the rightmost
/// listed command act on points first. `"none"` short-circuits to
/// identity. A command with a bad argument list loses only itself; a
/// recognized command with no argument list, or an unclosed `(`, ends the
/// walk (there is no safe place to resume), with everything composed so
/// far still in the outcome.
pub fn parse_transform_with(input: &str, options: ParseOptions) -> ParseOutcome {
    // ASCII lowering keeps byte offsets valid for error spans.
    let src = input.to_ascii_lowercase();
    let mut outcome = ParseOutcome {
        matrix: Matrix2D::IDENTITY,
        commands: Vec::new(),
        errors: Vec::new(),
    };

    if src.trim() == "none" {
        return outcome;
    }

    let mut cursor = 0;
    while cursor < src.len() {
        let rest = &src[cursor..];
        let Some(open) = rest.find('(') else {
            // No argument list left. A recognized command name here means
            // the input was cut short; separators and stray words are not
            // worth reporting.
            let tail = rest.trim_matches(separator);
            if CommandKind::lookup(tail).is_some() {
                let start = cursor + lead(rest);
                outcome
                    .errors
                    .push(unterminated(&src, start, tail.len()));
            }
            break;
        };

        let name_raw = &rest[..open];
        let name = name_raw.trim_matches(separator);
        let name_start = cursor + lead(name_raw);
        let args_start = cursor + open + 1;

        let Some(close_rel) = rest[open + 1..].find(')') else {
            // Unclosed argument list: fatal, parsing cannot resynchronize.
            let start = if name.is_empty() { cursor + open } else { name_start };
            outcome
                .errors
                .push(unterminated(&src, start, src.len() - start));
            break;
        };
        let close = args_start + close_rel;

        match CommandKind::lookup(name) {
            None => {
                if name.is_empty() {
                    // bare parens, nothing to report
                } else if options.report_unknown {
                    outcome.errors.push(TransformError::UnrecognizedCommand {
                        name: name.to_string(),
                        src: named(&src),
                        span: (name_start, name.len()).into(),
                    });
                } else {
                    crate::log::warn!("skipping unrecognized transform command: {name}");
                }
            }
            Some(kind) => {
                match scan_values_at(&src[args_start..close], args_start, &src, SOURCE_NAME)
                    .and_then(|values| kind.build(&values))
                {
                    Ok(command) => {
                        crate::log::debug!("composing transform command: {command:?}");
                        outcome.matrix = command.to_matrix().then(outcome.matrix);
                        outcome.commands.push(command);
                    }
                    // the offending command drops out, the rest still parses
                    Err(err) => outcome.errors.push(err),
                }
            }
        }

        cursor = close + 1;
    }

    outcome
}

fn separator(c: char) -> bool {
    c.is_whitespace() || c == ';'
}

/// Byte length of the separator run at the start of `s`.
fn lead(s: &str) -> usize {
    s.len() - s.trim_start_matches(separator).len()
}

fn named(src: &str) -> NamedSource<String> {
    NamedSource::new(SOURCE_NAME, src.to_string())
}

fn unterminated(src: &str, start: usize, len: usize) -> TransformError {
    TransformError::UnterminatedCommand {
        src: named(src),
        span: (start, len).into(),
    }
}
