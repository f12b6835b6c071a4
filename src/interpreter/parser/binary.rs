use crate::{
    ast::{BinaryOperator, Node},
    interpreter::{
        lexer::{Lexer, Token},
        parser::{core::ParseResult, unary::parse_factor},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `expr := term (("+" | "-") term)*`
pub fn parse_expr(lexer: &mut Lexer<'_>) -> ParseResult<Node> {
    let mut left = parse_term(lexer)?;
    loop {
        let Some(op) = token_to_binary_operator(&lexer.peek()?.token).filter(|op| op.is_additive())
        else {
            break;
        };
        let position = lexer.next_token()?.position;
        let right = parse_term(lexer)?;
        left = Node::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                position };
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/`, `DIV` and the six
/// comparisons, which all share this one tier. `1 + 2 > 2` therefore parses as
/// `1 + (2 > 2)`.
///
/// The rule is: `term := factor (("*" | "/" | "DIV" | "==" | "!=" | ">" | ">="
/// | "<" | "<=") factor)*`
pub fn parse_term(lexer: &mut Lexer<'_>) -> ParseResult<Node> {
    let mut left = parse_factor(lexer)?;
    loop {
        let Some(op) =
            token_to_binary_operator(&lexer.peek()?.token).filter(|op| !op.is_additive())
        else {
            break;
        };
        let position = lexer.next_token()?.position;
        let right = parse_factor(lexer)?;
        left = Node::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                position };
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for all tokens that are not binary operators.
///
/// # Example
/// ```
/// use pascalite::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Div), Some(BinaryOperator::IntDiv));
/// assert_eq!(token_to_binary_operator(&Token::Slash), Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(&Token::Assign), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    let op = match token {
        Token::Plus => BinaryOperator::Add,
        Token::Minus => BinaryOperator::Sub,
        Token::Star => BinaryOperator::Mul,
        Token::Slash => BinaryOperator::Div,
        Token::Div => BinaryOperator::IntDiv,
        Token::EqualEqual => BinaryOperator::Equal,
        Token::BangEqual => BinaryOperator::NotEqual,
        Token::Greater => BinaryOperator::Greater,
        Token::GreaterEqual => BinaryOperator::GreaterEqual,
        Token::Less => BinaryOperator::Less,
        Token::LessEqual => BinaryOperator::LessEqual,
        _ => return None,
    };
    Some(op)
}

impl BinaryOperator {
    /// `+` and `-`, the operators of the `expr` tier.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }
}
