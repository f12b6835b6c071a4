/// Runtime settings for one interpretation run.
///
/// The default imposes no limits: the language itself has no iteration bound,
/// so a loop whose condition never turns false runs forever unless
/// `max_loop_iterations` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of body executions allowed for a single `WHILE` or
    /// `FOR` loop. Exceeding it fails with `IterationLimitExceeded`.
    pub max_loop_iterations: Option<u64>,
}

impl Config {
    /// Returns a copy of `self` with the loop guard set to `limit`.
    ///
    /// # Example
    /// ```
    /// use pascalite::config::Config;
    ///
    /// let config = Config::default().with_max_loop_iterations(1_000);
    /// assert_eq!(config.max_loop_iterations, Some(1_000));
    /// ```
    #[must_use]
    pub const fn with_max_loop_iterations(mut self, limit: u64) -> Self {
        self.max_loop_iterations = Some(limit);
        self
    }
}
