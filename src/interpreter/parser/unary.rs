use crate::{
    ast::{Node, UnaryOperator},
    interpreter::{
        lexer::{Lexer, Position, Spanned, Token},
        parser::{
            binary::parse_expr,
            core::ParseResult,
            utils::{expect, unexpected},
        },
    },
    util::stack::ensure_sufficient_stack,
};

/// Parses a factor, the highest-precedence expression form.
///
/// Signs are right-associative, so `- - 3` is `-(-(3))`.
///
/// Grammar:
/// ```text
///     factor := INTEGER_LITERAL
///             | REAL_LITERAL
///             | ("+" | "-") factor
///             | "(" expr ")"
///             | ID
/// ```
/// # Errors
/// Returns `UnexpectedToken` if the next token cannot start an expression, or
/// a parenthesized expression is not closed.
pub fn parse_factor(lexer: &mut Lexer<'_>) -> ParseResult<Node> {
    ensure_sufficient_stack(|| parse_factor_inner(lexer))
}

fn parse_factor_inner(lexer: &mut Lexer<'_>) -> ParseResult<Node> {
    let Spanned { token, position } = lexer.next_token()?;

    match token {
        Token::Integer(n) => Ok(Node::Number { value: n.into(),
                                               position }),
        Token::Real(r) => Ok(Node::Number { value: r.into(),
                                            position }),
        Token::Plus => parse_signed(lexer, UnaryOperator::Plus, position),
        Token::Minus => parse_signed(lexer, UnaryOperator::Minus, position),
        Token::LParen => {
            let expr = parse_expr(lexer)?;
            expect(lexer, &Token::RParen)?;
            Ok(expr)
        },
        Token::Identifier(name) => Ok(Node::Variable { name, position }),
        token => Err(unexpected("expression", &Spanned { token, position })),
    }
}

/// Parses the operand of a sign that has already been consumed.
fn parse_signed(lexer: &mut Lexer<'_>,
                op: UnaryOperator,
                position: Position)
                -> ParseResult<Node> {
    let expr = parse_factor(lexer)?;
    Ok(Node::UnaryOp { op,
                       expr: Box::new(expr),
                       position })
}
