/// Control actions supported by the Lin–Bairstow solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the roots found so far.
    ///
    /// The unfactored part of the polynomial is returned as the solution's
    /// remainder.
    StopEarly,
}
