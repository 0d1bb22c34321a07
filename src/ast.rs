#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Expression {
    Identifier(Box<str>),
    Int(Box<str>),
    /// The literal `()` atom. Not a zero-argument call: `f()` is a `Call`
    /// with an empty argument list, while `()` on its own is this.
    EmptyParentheses,
    Call(Call),
    Lambda(Lambda),
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Call {
    pub receiver: Box<Expression>,
    pub arguments: Vec<Expression>,
}
impl From<Call> for Expression {
    fn from(call: Call) -> Self {
        Self::Call(call)
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Lambda {
    /// Identifier/int token texts, kept verbatim in source order.
    pub parameters: Vec<Box<str>>,
    pub body: Vec<Expression>,
}
impl From<Lambda> for Expression {
    fn from(lambda: Lambda) -> Self {
        Self::Lambda(lambda)
    }
}
