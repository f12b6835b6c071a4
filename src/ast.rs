use crate::interpreter::lexer::Position;

/// Represents a numeric literal written in the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// The declared type of a variable.
///
/// Declarations are purely syntactic: the evaluator never checks a value
/// against its declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    /// `INTEGER`
    Integer,
    /// `REAL`
    Real,
}

/// A node of the abstract syntax tree.
///
/// Every child is exclusively owned by its parent, so a parsed program is a
/// strict tree. The tree is built once by the parser and only read afterwards.
/// Nodes that can fail at runtime carry the [`Position`] of the construct for
/// error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An integer or real constant.
    Number {
        /// The constant value.
        value:    LiteralValue,
        /// Where the literal appears.
        position: Position,
    },
    /// An arithmetic or comparison expression.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator token.
        position: Position,
    },
    /// A unary sign applied to an operand.
    UnaryOp {
        /// The sign.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Position of the sign token.
        position: Position,
    },
    /// A read of a variable by name.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Where the reference appears.
        position: Position,
    },
    /// `name := value`
    Assignment {
        /// The variable being written.
        name:     String,
        /// The right-hand side expression.
        value:    Box<Self>,
        /// Position of the target identifier.
        position: Position,
    },
    /// A `BEGIN ... END` block of statements, evaluated in order.
    Compound {
        /// The statements of the block.
        statements: Vec<Self>,
    },
    /// The empty statement.
    NoOp,
    /// The whole translation unit.
    Program {
        /// The name following `PROGRAM`.
        name:  String,
        /// The program block.
        block: Box<Self>,
    },
    /// Declarations followed by the compound statement body.
    Block {
        /// One [`Node::VarDeclaration`] per declared name.
        declarations: Vec<Self>,
        /// The [`Node::Compound`] body.
        body:         Box<Self>,
    },
    /// A declared variable.
    VarDeclaration {
        /// Name of the variable.
        name:      String,
        /// The [`Node::TypeSpec`] of the declaration.
        type_spec: Box<Self>,
    },
    /// `INTEGER` or `REAL`.
    TypeSpec {
        /// The declared type.
        tag: TypeTag,
    },
    /// `IF condition BEGIN ... END [ELSE BEGIN ... END]`
    IfElse {
        /// The condition; must evaluate to a boolean.
        condition:   Box<Self>,
        /// Evaluated when the condition holds.
        then_branch: Box<Self>,
        /// Evaluated when the condition does not hold, if present.
        else_branch: Option<Box<Self>>,
        /// Position of the `IF` keyword.
        position:    Position,
    },
    /// `WHILE condition BEGIN ... END`
    While {
        /// The loop condition, tested before every iteration.
        condition: Box<Self>,
        /// The loop body.
        body:      Box<Self>,
        /// Position of the `WHILE` keyword.
        position:  Position,
    },
    /// `FOR init; condition; update BEGIN ... END`
    ///
    /// Runs `init` once, then behaves like a `WHILE` loop that evaluates
    /// `update` after every body execution.
    For {
        /// The initial assignment.
        init:      Box<Self>,
        /// The loop condition, tested before every iteration.
        condition: Box<Self>,
        /// The assignment run after each iteration.
        update:    Box<Self>,
        /// The loop body.
        body:      Box<Self>,
        /// Position of the `FOR` keyword.
        position:  Position,
    },
}

impl Node {
    /// Gets the source position of `self`, if the node carries one.
    ///
    /// ## Example
    /// ```
    /// use pascalite::{ast::Node, interpreter::lexer::Position};
    ///
    /// let node = Node::Variable { name:     "x".to_string(),
    ///                             position: Position::new(5, 3), };
    ///
    /// assert_eq!(node.position(), Some(Position::new(5, 3)));
    /// assert_eq!(Node::NoOp.position(), None);
    /// ```
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::Number { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::Variable { position, .. }
            | Self::Assignment { position, .. }
            | Self::IfElse { position, .. }
            | Self::While { position, .. }
            | Self::For { position, .. } => Some(*position),
            Self::Compound { .. }
            | Self::NoOp
            | Self::Program { .. }
            | Self::Block { .. }
            | Self::VarDeclaration { .. }
            | Self::TypeSpec { .. } => None,
        }
    }
}

impl Node {
    /// Moves every child of `self` into `out`, leaving `NoOp` placeholders.
    fn detach_children(&mut self, out: &mut Vec<Self>) {
        match self {
            Self::BinaryOp { left, right, .. } => {
                out.push(std::mem::replace(left.as_mut(), Self::NoOp));
                out.push(std::mem::replace(right.as_mut(), Self::NoOp));
            },
            Self::UnaryOp { expr: child, .. }
            | Self::Assignment { value: child, .. }
            | Self::Program { block: child, .. }
            | Self::VarDeclaration { type_spec: child, .. } => {
                out.push(std::mem::replace(child.as_mut(), Self::NoOp));
            },
            Self::Compound { statements } => out.append(statements),
            Self::Block { declarations, body } => {
                out.append(declarations);
                out.push(std::mem::replace(body.as_mut(), Self::NoOp));
            },
            Self::IfElse { condition,
                           then_branch,
                           else_branch,
                           .. } => {
                out.push(std::mem::replace(condition.as_mut(), Self::NoOp));
                out.push(std::mem::replace(then_branch.as_mut(), Self::NoOp));
                if let Some(else_branch) = else_branch.take() {
                    out.push(*else_branch);
                }
            },
            Self::While { condition, body, .. } => {
                out.push(std::mem::replace(condition.as_mut(), Self::NoOp));
                out.push(std::mem::replace(body.as_mut(), Self::NoOp));
            },
            Self::For { init,
                        condition,
                        update,
                        body,
                        .. } => {
                for child in [init, condition, update, body] {
                    out.push(std::mem::replace(child.as_mut(), Self::NoOp));
                }
            },
            Self::Number { .. } | Self::Variable { .. } | Self::TypeSpec { .. } | Self::NoOp => {},
        }
    }
}

/// Tears the tree down with an explicit worklist, so dropping a deeply nested
/// or very long expression does not recurse once per level.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons. The grammar puts the
/// comparisons on the same precedence tier as `*`, `/` and `DIV`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Real division (`/`)
    Div,
    /// Floor division (`DIV`)
    IntDiv,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
}

/// Represents a unary sign.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Sign identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Minus,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, IntDiv, Less, LessEqual, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            IntDiv => "DIV",
            Equal => "==",
            NotEqual => "!=",
            Greater => ">",
            GreaterEqual => ">=",
            Less => "<",
            LessEqual => "<=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
        }
    }
}
