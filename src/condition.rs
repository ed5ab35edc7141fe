//! Stopping conditions for iterative drivers.
//!
//! A driver hands its current precision estimate to [`Condition::check`] after
//! every step and stops as soon as it returns `true`.
//!
//! - [`Precision`] : stop once the estimate drops to a threshold
//! - [`Iteration`] : stop after a fixed number of checks
//!
//! Drivers additionally stop after [`GLOBAL_MAX_ITER_FALLBACK`] steps, so a
//! condition that is never satisfied cannot loop forever.

/// Hard cap on the steps of every iterative driver.
pub const GLOBAL_MAX_ITER_FALLBACK: usize = 500;


/// Reasons an iterative driver may terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// the caller's [`Condition`] returned `true`
    ConditionMet,
    /// [`GLOBAL_MAX_ITER_FALLBACK`] steps without the condition holding
    IterationLimit,
    /// the iterate is exact to machine precision, further steps are meaningless
    MachinePrecisionReached,
}

pub trait Condition {
    fn check(&mut self, current: f64) -> bool;
}


/// Satisfied when `current <= threshold`.
#[derive(Debug, Copy, Clone)]
pub struct Precision {
    threshold: f64,
}
impl Precision {
    pub fn new(threshold: f64) -> Self { Self { threshold } }
    pub fn threshold(&self) -> f64 { self.threshold }
}
impl Condition for Precision {
    #[inline]
    fn check(&mut self, current: f64) -> bool {
        current <= self.threshold
    }
}


/// Satisfied on the `limit`-th call, regardless of the value passed in.
#[derive(Debug, Copy, Clone)]
pub struct Iteration {
    limit: usize,
    count: usize,
}
impl Iteration {
    pub fn new(limit: usize) -> Self { Self { limit, count: 0 } }
    pub fn count(&self) -> usize { self.count }
}
impl Condition for Iteration {
    #[inline]
    fn check(&mut self, _current: f64) -> bool {
        self.count += 1;
        self.count >= self.limit
    }
}
