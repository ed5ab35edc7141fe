//! Defines the [`RootFindingReport`] struct returned by all
//! root-finding algorithms.

pub use crate::condition::TerminationReason;


/// Final report returned by all root-finding algorithms.
///
/// [`RootFindingReport`]
/// - `root`               : best root estimate
/// - `f_root`             : residual at `root` (`g(root) - root` for fixed point)
/// - `iterations`         : total iterations
/// - `precision`          : the method's precision estimate for `root`
/// - `true_root`          : `precision` below [`super::algorithms::TRUE_ROOT_PRECISION`]
/// - `termination_reason` : why the solver stopped ([`TerminationReason`])
/// - `algorithm_name`     : algorithm name (e.g. `"midpoint"`)
#[derive(Debug, Copy, Clone)]
pub struct RootFindingReport {
    pub root               : f64,
    pub f_root             : f64,
    pub iterations         : usize,
    pub precision          : f64,
    pub true_root          : bool,
    pub termination_reason : TerminationReason,
    pub algorithm_name     : &'static str,
}
