use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::{
            binary::{parse_expr, parse_term},
            block::parse_compound_statement,
            core::ParseResult,
            utils::{expect, next_is, parse_identifier},
        },
    },
    util::stack::ensure_sufficient_stack,
};

/// Parses a `;`-separated list of statements.
///
/// Grammar: `statement_list := statement (";" statement)*`
///
/// A trailing `;` before `END` is allowed because the statement after it is
/// the empty statement.
///
/// # Errors
/// Returns `UnexpectedStatement` if an identifier follows a statement without
/// a separating `;`, e.g. `BEGIN a := 1 b := 2 END`.
pub fn parse_statement_list(lexer: &mut Lexer<'_>) -> ParseResult<Vec<Node>> {
    let mut statements = vec![parse_statement(lexer)?];
    while next_is(lexer, &Token::Semicolon)? {
        lexer.next_token()?;
        statements.push(parse_statement(lexer)?);
    }

    let next = lexer.peek()?;
    if let Token::Identifier(_) = next.token {
        return Err(ParseError::UnexpectedStatement { found:    next.token.to_string(),
                                                     position: next.position, });
    }

    Ok(statements)
}

/// Parses a single statement.
///
/// A statement may be one of:
/// - a compound statement (`BEGIN`),
/// - an assignment (identifier),
/// - an `IF`, `WHILE` or `FOR` statement,
/// - the empty statement, when none of the above starts here.
///
/// The empty statement consumes nothing.
pub fn parse_statement(lexer: &mut Lexer<'_>) -> ParseResult<Node> {
    ensure_sufficient_stack(|| {
        let next = lexer.peek()?.token.clone();
        match next {
            Token::Begin => parse_compound_statement(lexer),
            Token::Identifier(_) => parse_assignment(lexer),
            Token::If => parse_if_else(lexer),
            Token::While => parse_while(lexer),
            Token::For => parse_for(lexer),
            _ => Ok(Node::NoOp),
        }
    })
}

/// Parses an assignment.
///
/// Grammar: `assignment := ID ":=" expr`
pub fn parse_assignment(lexer: &mut Lexer<'_>) -> ParseResult<Node> {
    let (name, position) = parse_identifier(lexer)?;
    expect(lexer, &Token::Assign)?;
    let value = parse_expr(lexer)?;

    Ok(Node::Assignment { name,
                          value: Box::new(value),
                          position })
}

/// Parses a conditional.
///
/// Grammar: `if_else := IF term compound_statement (ELSE compound_statement)?`
///
/// The condition is parsed at the `term` level, so an additive condition
/// must be parenthesized: `IF (a + 1) > 3 BEGIN ... END`.
pub fn parse_if_else(lexer: &mut Lexer<'_>) -> ParseResult<Node> {
    let position = expect(lexer, &Token::If)?.position;
    let condition = parse_term(lexer)?;
    let then_branch = parse_compound_statement(lexer)?;

    let else_branch = if next_is(lexer, &Token::Else)? {
        lexer.next_token()?;
        Some(Box::new(parse_compound_statement(lexer)?))
    } else {
        None
    };

    Ok(Node::IfElse { condition: Box::new(condition),
                      then_branch: Box::new(then_branch),
                      else_branch,
                      position })
}

/// Parses a pre-test loop.
///
/// Grammar: `while := WHILE term compound_statement`
pub fn parse_while(lexer: &mut Lexer<'_>) -> ParseResult<Node> {
    let position = expect(lexer, &Token::While)?.position;
    let condition = parse_term(lexer)?;
    let body = parse_compound_statement(lexer)?;

    Ok(Node::While { condition: Box::new(condition),
                     body: Box::new(body),
                     position })
}

/// Parses a counted loop.
///
/// Grammar: `for := FOR assignment ";" term ";" assignment compound_statement`
pub fn parse_for(lexer: &mut Lexer<'_>) -> ParseResult<Node> {
    let position = expect(lexer, &Token::For)?.position;
    let init = parse_assignment(lexer)?;
    expect(lexer, &Token::Semicolon)?;
    let condition = parse_term(lexer)?;
    expect(lexer, &Token::Semicolon)?;
    let update = parse_assignment(lexer)?;
    let body = parse_compound_statement(lexer)?;

    Ok(Node::For { init: Box::new(init),
                   condition: Box::new(condition),
                   update: Box::new(update),
                   body: Box::new(body),
                   position })
}
