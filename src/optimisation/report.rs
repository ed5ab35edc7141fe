pub use crate::condition::TerminationReason;


/// Final report returned by both optimisation methods.
///
/// - `point`              : extremum estimate
/// - `value`              : `f(point)`
/// - `iterations`         : total iterations
/// - `precision`          : last value handed to the condition
/// - `termination_reason` : why the method stopped
/// - `method_name`        : `"golden_ratio"` or `"newton"`
#[derive(Debug, Copy, Clone)]
pub struct OptimisationReport {
    pub point              : f64,
    pub value              : f64,
    pub iterations         : usize,
    pub precision          : f64,
    pub termination_reason : TerminationReason,
    pub method_name        : &'static str,
}
