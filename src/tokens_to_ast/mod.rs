use crate::{
    ast::Expression,
    error::{ParseError, TranspileError},
    position::Offset,
    string_to_tokens::Token,
};
use parser::Parser;
use tracing::instrument;

mod expression;
mod lambda;
mod parser;

/// Parses the whole token sequence into a single expression. The expression
/// must consume every token, and `()` can't be the program root.
#[instrument(level = "trace")]
pub fn tokens_to_ast(tokens: &[Token]) -> Result<Expression, TranspileError> {
    let parser = Parser::new(tokens);
    if parser.is_at_end() {
        return Err(parser.error(ParseError::EmptyInput));
    }

    let (parser, expression) = expression::expression(parser)?;
    if !parser.is_at_end() {
        return Err(parser.error(ParseError::UnparsedRest));
    }
    if matches!(expression, Expression::EmptyParentheses) {
        let span = tokens.first().zip(tokens.last()).map_or_else(
            || Offset(0)..Offset(0),
            |(first, last)| first.span.start..last.span.end,
        );
        return Err(TranspileError::new(
            span,
            ParseError::EmptyParenthesesAsProgram,
        ));
    }
    Ok(expression)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        error::TranspileErrorPayload,
        string_to_tokens::string_to_tokens,
    };

    fn parse_error(source: &str) -> TranspileErrorPayload {
        tokens_to_ast(&string_to_tokens(source).unwrap())
            .unwrap_err()
            .payload
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            parse_error(""),
            TranspileErrorPayload::Parse(ParseError::EmptyInput),
        );
        assert_eq!(
            parse_error("  \n "),
            TranspileErrorPayload::Parse(ParseError::EmptyInput),
        );
    }

    #[test]
    fn test_unparsed_rest() {
        assert_eq!(
            parse_error("f g"),
            TranspileErrorPayload::Parse(ParseError::UnparsedRest),
        );
        assert_eq!(
            parse_error("()x"),
            TranspileErrorPayload::Parse(ParseError::UnparsedRest),
        );
        assert_eq!(
            parse_error("f(a))"),
            TranspileErrorPayload::Parse(ParseError::UnparsedRest),
        );
    }

    #[test]
    fn test_empty_parentheses_cant_be_the_program() {
        assert_eq!(
            parse_error("()"),
            TranspileErrorPayload::Parse(ParseError::EmptyParenthesesAsProgram),
        );
        // Parentheses around an expression yield the inner node directly, so
        // this root is still the `()` atom.
        assert_eq!(
            parse_error("(())"),
            TranspileErrorPayload::Parse(ParseError::EmptyParenthesesAsProgram),
        );
    }

    #[test]
    fn test_nesting_is_bounded() {
        let source = format!("{}x{}", "(".repeat(1_000), ")".repeat(1_000));
        assert_eq!(
            parse_error(&source),
            TranspileErrorPayload::Parse(ParseError::TooMuchNesting),
        );
    }
}
