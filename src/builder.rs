use crate::utils::DEFAULT_PARALLEL_THRESHOLD;
use crate::{IntervalEngine, IntervalProblem};

pub struct IntervalEngineBuilder<P: IntervalProblem> {
    problem: P,
    parallel_threshold: Option<usize>,
}

impl<P: IntervalProblem> IntervalEngineBuilder<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            parallel_threshold: None,
        }
    }
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = Some(threshold);
        self
    }
    /// Force every diagonal through the parallel path (when enabled).
    pub fn always_parallel(self) -> Self {
        self.with_parallel_threshold(1)
    }
    pub fn build(self) -> IntervalEngine<P> {
        let threshold = self
            .parallel_threshold
            .unwrap_or(DEFAULT_PARALLEL_THRESHOLD);
        IntervalEngine::with_parallel_threshold(self.problem, threshold)
    }
}
