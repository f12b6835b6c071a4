use tracing::trace;

use crate::{
    ast::Node,
    config::Config,
    error::RuntimeError,
    interpreter::{lexer::Position, memory::Memory, value::Value},
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The context owns the [`Memory`] of one interpretation run together with the
/// run's [`Config`]. Every evaluation method takes `&mut self`, so the store is
/// threaded explicitly through the whole tree walk and two contexts never see
/// each other's variables.
///
/// ## Usage
///
/// Create a context, evaluate the `Program` root, then take the store back
/// with [`Context::into_memory`].
///
/// ```
/// use pascalite::{
///     config::Config,
///     interpreter::{evaluator::core::Context, lexer::Lexer, parser::Parser, value::Value},
/// };
///
/// let tree = Parser::new(Lexer::new("PROGRAM p; BEGIN a := 2 * 3 END.")).parse().unwrap();
///
/// let mut context = Context::new(Config::default());
/// context.eval(&tree).unwrap();
///
/// assert_eq!(context.memory().lookup("a"), Some(Value::Integer(6)));
/// ```
#[derive(Debug, Default)]
pub struct Context {
    memory: Memory,
    config: Config,
}

impl Context {
    /// Creates a new evaluation context with an empty store.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { memory: Memory::new(),
               config }
    }

    /// The variable store as it stands.
    #[must_use]
    pub const fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Ends the run and hands back the variable store.
    #[must_use]
    pub fn into_memory(self) -> Memory {
        self.memory
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Evaluates a node and returns the resulting value.
    ///
    /// Expressions yield `Some(Value)`. Statements, declarations and type
    /// specs run for their side effects only and yield `None`. Children are
    /// always evaluated left to right, and the first error aborts the walk.
    pub fn eval(&mut self, node: &Node) -> EvalResult<Option<Value>> {
        ensure_sufficient_stack(|| self.eval_node(node))
    }

    fn eval_node(&mut self, node: &Node) -> EvalResult<Option<Value>> {
        match node {
            Node::Number { value, .. } => Ok(Some(Value::from(*value))),
            Node::BinaryOp { left,
                             op,
                             right,
                             position, } => {
                self.eval_binary_op(left, *op, right, *position).map(Some)
            },
            Node::UnaryOp { op, expr, position } => {
                self.eval_unary_op(*op, expr, *position).map(Some)
            },
            Node::Variable { name, position } => self.memory.get(name, *position).map(Some),
            Node::Assignment { name,
                               value,
                               position, } => {
                self.eval_assignment(name, value, *position)?;
                Ok(None)
            },
            Node::Compound { statements } => {
                self.eval_sequence(statements)?;
                Ok(None)
            },
            Node::NoOp | Node::VarDeclaration { .. } | Node::TypeSpec { .. } => Ok(None),
            Node::Program { block, .. } => {
                self.eval(block)?;
                Ok(None)
            },
            Node::Block { declarations, body } => {
                self.eval_sequence(declarations)?;
                self.eval(body)?;
                Ok(None)
            },
            Node::IfElse { condition,
                           then_branch,
                           else_branch,
                           position, } => {
                self.eval_if_else(condition, then_branch, else_branch.as_deref(), *position)?;
                Ok(None)
            },
            Node::While { condition,
                          body,
                          position, } => {
                self.eval_while(condition, body, *position)?;
                Ok(None)
            },
            Node::For { init,
                        condition,
                        update,
                        body,
                        position, } => {
                self.eval_for(init, condition, update, body, *position)?;
                Ok(None)
            },
        }
    }

    /// Evaluates a subexpression and ensures that it produces a value.
    ///
    /// # Errors
    /// Returns `MissingValue` if `node` is a statement rather than an
    /// expression.
    pub fn eval_child(&mut self, node: &Node, position: Position) -> EvalResult<Value> {
        self.eval(node)?
            .ok_or(RuntimeError::MissingValue { position })
    }

    /// Evaluates the right-hand side, then writes it under `name`.
    ///
    /// The variable does not need to be declared or previously assigned, and
    /// the value is not checked against any declared type.
    pub fn eval_assignment(&mut self,
                           name: &str,
                           value: &Node,
                           position: Position)
                           -> EvalResult<()> {
        let value = self.eval_child(value, position)?;
        trace!(%name, %value, "assign");
        self.memory.set(name, value);
        Ok(())
    }

    /// Evaluates nodes strictly in order, discarding their results.
    pub fn eval_sequence(&mut self, nodes: &[Node]) -> EvalResult<()> {
        for node in nodes {
            self.eval(node)?;
        }
        Ok(())
    }
}
