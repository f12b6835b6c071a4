use crate::{
    ast::{Node, TypeTag},
    interpreter::{
        lexer::{Lexer, Token},
        parser::{
            core::ParseResult,
            statement::parse_statement_list,
            utils::{expect, next_is, parse_identifier, unexpected},
        },
    },
};

/// Parses a block: declarations followed by the compound statement body.
///
/// Grammar: `block := declarations compound_statement`
pub fn parse_block(lexer: &mut Lexer<'_>) -> ParseResult<Node> {
    let declarations = parse_declarations(lexer)?;
    let body = parse_compound_statement(lexer)?;

    Ok(Node::Block { declarations,
                     body: Box::new(body) })
}

/// Parses the optional `VAR` section.
///
/// Grammar: `declarations := (VAR (variable_declaration ";")+)?`
///
/// Each name of a multi-name declaration such as `a, b : INTEGER` becomes its
/// own [`Node::VarDeclaration`], so the returned list has one entry per
/// declared variable.
///
/// # Errors
/// Returns `UnexpectedToken` if `VAR` is not followed by at least one
/// declaration, or a declaration is not closed with `;`.
pub fn parse_declarations(lexer: &mut Lexer<'_>) -> ParseResult<Vec<Node>> {
    let mut declarations = Vec::new();
    if !next_is(lexer, &Token::Var)? {
        return Ok(declarations);
    }
    lexer.next_token()?;

    loop {
        declarations.extend(parse_variable_declaration(lexer)?);
        expect(lexer, &Token::Semicolon)?;
        if !matches!(lexer.peek()?.token, Token::Identifier(_)) {
            break;
        }
    }

    Ok(declarations)
}

/// Parses one declaration line without its closing `;`.
///
/// Grammar: `variable_declaration := ID ("," ID)* ":" type_spec`
pub fn parse_variable_declaration(lexer: &mut Lexer<'_>) -> ParseResult<Vec<Node>> {
    let mut names = vec![parse_identifier(lexer)?.0];
    while next_is(lexer, &Token::Comma)? {
        lexer.next_token()?;
        names.push(parse_identifier(lexer)?.0);
    }
    expect(lexer, &Token::Colon)?;
    let type_spec = parse_type_spec(lexer)?;

    Ok(names.into_iter()
            .map(|name| Node::VarDeclaration { name,
                                               type_spec: Box::new(type_spec.clone()) })
            .collect())
}

/// Parses a type name.
///
/// Grammar: `type_spec := INTEGER | REAL`
pub fn parse_type_spec(lexer: &mut Lexer<'_>) -> ParseResult<Node> {
    let spanned = lexer.next_token()?;
    let tag = match spanned.token {
        Token::IntegerType => TypeTag::Integer,
        Token::RealType => TypeTag::Real,
        _ => return Err(unexpected("type INTEGER or REAL", &spanned)),
    };
    Ok(Node::TypeSpec { tag })
}

/// Parses a `BEGIN ... END` block.
///
/// Grammar: `compound_statement := BEGIN statement_list END`
pub fn parse_compound_statement(lexer: &mut Lexer<'_>) -> ParseResult<Node> {
    expect(lexer, &Token::Begin)?;
    let statements = parse_statement_list(lexer)?;
    expect(lexer, &Token::End)?;

    Ok(Node::Compound { statements })
}
