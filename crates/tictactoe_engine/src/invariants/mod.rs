//! Session invariants.
//!
//! Each invariant is a zero-sized type with a predicate over the session.
//! The session checks [`SessionInvariants`] after every accepted move in
//! debug builds; tests can check any of them directly.

mod alternating_turns;
mod monotonic_board;

pub use alternating_turns::AlternatingTurns;
pub use monotonic_board::MonotonicBoard;

/// A property of `S` that every reachable state satisfies.
pub trait Invariant<S> {
    /// Whether `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// What the property says, for error messages.
    fn description() -> &'static str;

    /// [`Self::holds`] as a `Result`.
    fn check(state: &S) -> Result<(), InvariantViolation> {
        if Self::holds(state) {
            Ok(())
        } else {
            Err(InvariantViolation::new(Self::description()))
        }
    }
}

/// An invariant that did not hold.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// The violated invariant's description.
    pub description: String,
}

impl InvariantViolation {
    /// Wraps an invariant description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Several invariants checked as one. Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks every member, returning all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($name:ident),+) => {
        impl<S, $($name: Invariant<S>),+> InvariantSet<S> for ($($name,)+) {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<_> = [$($name::check(state)),+]
                    .into_iter()
                    .filter_map(Result::err)
                    .collect();
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(A);
impl_invariant_set!(A, B);
impl_invariant_set!(A, B, C);

/// Invariants every session upholds.
pub type SessionInvariants = (MonotonicBoard, AlternatingTurns);
