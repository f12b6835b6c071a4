use tracing::trace;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::Position,
    },
};

impl Context {
    /// Evaluates an `IF` statement.
    ///
    /// Exactly one branch runs, or none when the condition is false and there
    /// is no `ELSE`.
    pub fn eval_if_else(&mut self,
                        condition: &Node,
                        then_branch: &Node,
                        else_branch: Option<&Node>,
                        position: Position)
                        -> EvalResult<()> {
        if self.eval_condition(condition, position)? {
            self.eval(then_branch)?;
        } else if let Some(else_branch) = else_branch {
            self.eval(else_branch)?;
        }
        Ok(())
    }

    /// Evaluates a `WHILE` loop.
    ///
    /// The condition is tested before every iteration, so the body may run
    /// zero times.
    pub fn eval_while(&mut self,
                      condition: &Node,
                      body: &Node,
                      position: Position)
                      -> EvalResult<()> {
        let mut iterations = 0;
        while self.eval_condition(condition, position)? {
            self.tick(&mut iterations, position)?;
            self.eval(body)?;
        }
        Ok(())
    }

    /// Evaluates a `FOR` loop.
    ///
    /// `init` runs once. Afterwards the loop behaves like `WHILE condition`
    /// whose body is followed by `update`.
    ///
    /// # Example
    /// ```
    /// use pascalite::{interpreter::value::Value, Config};
    ///
    /// let source = "PROGRAM p; BEGIN b := 0; FOR a := 0; a < 3; a := a + 1 BEGIN b := b + a END END.";
    /// let memory = pascalite::interpret(source, Config::default()).unwrap();
    ///
    /// assert_eq!(memory.lookup("a"), Some(Value::Integer(3)));
    /// assert_eq!(memory.lookup("b"), Some(Value::Integer(3)));
    /// ```
    pub fn eval_for(&mut self,
                    init: &Node,
                    condition: &Node,
                    update: &Node,
                    body: &Node,
                    position: Position)
                    -> EvalResult<()> {
        self.eval(init)?;
        let mut iterations = 0;
        while self.eval_condition(condition, position)? {
            self.tick(&mut iterations, position)?;
            self.eval(body)?;
            self.eval(update)?;
        }
        Ok(())
    }

    /// Evaluates a condition, which must produce a boolean.
    fn eval_condition(&mut self, condition: &Node, position: Position) -> EvalResult<bool> {
        let position = condition.position().unwrap_or(position);
        self.eval_child(condition, position)?
            .as_bool(position)
    }

    /// Counts one loop iteration against the configured guard.
    fn tick(&self, iterations: &mut u64, position: Position) -> EvalResult<()> {
        *iterations += 1;
        trace!(iteration = *iterations, %position, "loop");
        match self.config().max_loop_iterations {
            Some(limit) if *iterations > limit => {
                Err(RuntimeError::IterationLimitExceeded { limit, position })
            },
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::Config,
        error::RuntimeError,
        interpreter::{
            evaluator::core::Context, lexer::Lexer, memory::Memory, parser::Parser, value::Value,
        },
    };

    fn run(body: &str, config: Config) -> Result<Memory, RuntimeError> {
        let source = format!("PROGRAM p; BEGIN {body} END.");
        let tree = Parser::new(Lexer::new(&source)).parse()
                                                   .expect("source should parse");
        let mut context = Context::new(config);
        context.eval(&tree)?;
        Ok(context.into_memory())
    }

    #[test]
    fn if_takes_exactly_one_branch() {
        let memory = run("IF 1 < 2 BEGIN a := 1 END ELSE BEGIN a := 2 END", Config::default()).unwrap();
        assert_eq!(memory.lookup("a"), Some(Value::Integer(1)));

        let memory = run("IF 1 > 2 BEGIN a := 1 END ELSE BEGIN a := 2 END", Config::default()).unwrap();
        assert_eq!(memory.lookup("a"), Some(Value::Integer(2)));
    }

    #[test]
    fn if_without_else_may_do_nothing() {
        let memory = run("IF 1 > 2 BEGIN a := 1 END", Config::default()).unwrap();
        assert!(memory.is_empty());
    }

    #[test]
    fn while_checks_condition_first() {
        let memory = run("a := 5; WHILE a < 3 BEGIN a := a + 1 END", Config::default()).unwrap();
        assert_eq!(memory.lookup("a"), Some(Value::Integer(5)));
    }

    #[test]
    fn for_runs_update_after_each_body() {
        let memory = run("b := 0; FOR a := 0; a < 4; a := a + 1 BEGIN b := b + 2 END",
                         Config::default()).unwrap();
        assert_eq!(memory.lookup("a"), Some(Value::Integer(4)));
        assert_eq!(memory.lookup("b"), Some(Value::Integer(8)));
    }

    #[test]
    fn numeric_condition_is_a_type_error() {
        let result = run("IF 1 BEGIN a := 1 END", Config::default());
        assert!(matches!(result, Err(RuntimeError::TypeError { .. })));
    }

    #[test]
    fn loop_guard_stops_runaway_loops() {
        let config = Config::default().with_max_loop_iterations(10);
        let result = run("a := 0; WHILE a < 1 BEGIN b := 1 END", config);
        assert!(matches!(result, Err(RuntimeError::IterationLimitExceeded { limit: 10, .. })));
    }

    #[test]
    fn loop_guard_allows_loops_within_the_limit() {
        let config = Config::default().with_max_loop_iterations(3);
        let memory = run("a := 0; WHILE a < 3 BEGIN a := a + 1 END", config).unwrap();
        assert_eq!(memory.lookup("a"), Some(Value::Integer(3)));
    }
}
