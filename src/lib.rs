#![warn(clippy::nursery, clippy::pedantic)]
#![allow(
    clippy::match_same_arms,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::similar_names
)]

pub mod ast;
pub mod ast_to_text;
pub mod error;
pub mod position;
pub mod string_to_tokens;
pub mod tokens_to_ast;

use crate::error::TranspileError;

/// Rewrites an expression with trailing-lambda syntax (`f { x -> x }`) into
/// the compact target syntax (`f((x){x;})`).
///
/// All-or-nothing: any lexical or syntactic failure yields the empty string.
/// Use [`try_transpile`] to observe which failure it was.
#[must_use]
pub fn transpile(expression: &str) -> String {
    try_transpile(expression).unwrap_or_default()
}

/// Like [`transpile`], but keeps the failure instead of collapsing it into
/// the empty-string sentinel.
pub fn try_transpile(expression: &str) -> Result<String, TranspileError> {
    let tokens = string_to_tokens::string_to_tokens(expression)?;
    let ast = tokens_to_ast::tokens_to_ast(&tokens)?;
    Ok(ast_to_text::ast_to_text(&ast))
}
