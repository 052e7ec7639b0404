//! Error types with rich diagnostics using miette
//!
//! Errors that point at a location in the parsed text carry source spans;
//! the rest are plain diagnostics.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Errors produced by the scanners and the transform-list parser.
///
/// All of these are values, never fatal: the caller decides whether a
/// malformed transform degrades to identity, a partial matrix, or a
/// user-visible error.
#[derive(Error, Diagnostic, Debug)]
pub enum TransformError {
    /// A delimited substring looked like a number but did not parse as one
    /// (e.g. `1.2.3`, a lone `-`).
    #[error("malformed number: {token}")]
    #[diagnostic(code(affine2d::parse::malformed_number))]
    MalformedNumber {
        token: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a valid floating-point value")]
        span: SourceSpan,
    },

    /// A recognized command was given the wrong number of arguments,
    /// e.g. `scale(1,2,3)`.
    #[error("{command}: expected {expected} argument(s), got {actual}")]
    #[diagnostic(code(affine2d::parse::argument_count))]
    ArgumentCountMismatch {
        command: &'static str,
        /// Rendered arity, e.g. `"6"` or `"1 or 2"`.
        expected: &'static str,
        actual: usize,
    },

    /// A recognized command had no parenthesized argument list, or its
    /// opening `(` was never closed. Parsing cannot resynchronize past
    /// this point, so the rest of the input is abandoned.
    #[error("unterminated transform command")]
    #[diagnostic(
        code(affine2d::parse::unterminated_command),
        help("every command needs a parenthesized argument list, like `rotate(45)`")
    )]
    UnterminatedCommand {
        #[source_code]
        src: NamedSource<String>,
        #[label("command starts here")]
        span: SourceSpan,
    },

    /// An unknown command name. Only recorded when
    /// [`ParseOptions::report_unknown`](crate::ParseOptions) is set;
    /// by default unknown commands are skipped.
    #[error("unrecognized transform command: {name}")]
    #[diagnostic(code(affine2d::parse::unrecognized_command))]
    UnrecognizedCommand {
        name: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a transform command")]
        span: SourceSpan,
    },

    /// An angle string whose numeric part (after stripping any unit
    /// suffix) did not parse.
    #[error("malformed angle: {input}")]
    #[diagnostic(
        code(affine2d::parse::malformed_angle),
        help("angles are a number with an optional deg/grad/rad suffix")
    )]
    MalformedAngle { input: String },
}
