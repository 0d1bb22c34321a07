use crate::ast::{Call, Expression, Lambda};
use itertools::Itertools;

/// Serializes the AST into the compact target syntax. A single top-down
/// traversal; assumes the tree is well-formed and doesn't re-validate it.
#[must_use]
pub fn ast_to_text(expression: &Expression) -> String {
    let mut context = Context::default();
    context.lower_expression(expression);
    context.text
}

#[derive(Debug, Default)]
struct Context {
    text: String,
}
impl Context {
    fn lower_expression(&mut self, expression: &Expression) {
        match expression {
            Expression::Identifier(text) | Expression::Int(text) => self.push(text),
            Expression::EmptyParentheses => self.push("()"),
            Expression::Call(call) => self.lower_call(call),
            Expression::Lambda(lambda) => self.lower_lambda(lambda),
        }
    }
    fn lower_call(&mut self, call: &Call) {
        self.lower_expression(&call.receiver);
        self.push("(");
        for (index, argument) in call.arguments.iter().enumerate() {
            if index != 0 {
                self.push(",");
            }
            self.lower_expression(argument);
        }
        self.push(")");
    }
    fn lower_lambda(&mut self, lambda: &Lambda) {
        self.push("(");
        self.push(lambda.parameters.iter().join(","));
        self.push("){");
        for expression in &lambda.body {
            self.lower_expression(expression);
            self.push(";");
        }
        self.push("}");
    }

    fn push(&mut self, text: impl AsRef<str>) {
        self.text.push_str(text.as_ref());
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ast::{Call, Lambda};

    #[test]
    fn test_atoms() {
        assert_eq!(ast_to_text(&Expression::Identifier("f".into())), "f");
        assert_eq!(ast_to_text(&Expression::Int("42".into())), "42");
        assert_eq!(ast_to_text(&Expression::EmptyParentheses), "()");
    }

    #[test]
    fn test_call() {
        let call = Call {
            receiver: Box::new(Expression::Identifier("f".into())),
            arguments: vec![
                Expression::Identifier("a".into()),
                Expression::Int("2".into()),
            ],
        };
        assert_eq!(ast_to_text(&call.into()), "f(a,2)");
    }

    #[test]
    fn test_lambda() {
        let lambda = Lambda {
            parameters: vec!["x".into(), "y".into()],
            body: vec![
                Expression::Identifier("x".into()),
                Expression::Identifier("y".into()),
            ],
        };
        assert_eq!(ast_to_text(&lambda.into()), "(x,y){x;y;}");

        let empty = Lambda {
            parameters: vec![],
            body: vec![],
        };
        assert_eq!(ast_to_text(&empty.into()), "(){}");
    }
}
