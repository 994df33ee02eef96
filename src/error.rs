use thiserror::Error;

/// Errors raised by the planner.
///
/// Only contract violations end up here. An empty plan set, a branch cut off by
/// the depth bound or an unreachable location are ordinary planning outcomes and
/// are reported on [`PlanSet`](crate::PlanSet) and [`Plan`](crate::Plan) instead.
///
/// # Examples
///
/// ```
/// use goap_planner::GoapError;
///
/// let error = GoapError::InvalidIncome(0);
/// assert_eq!(format!("{}", error), "Income per work cycle must be positive, got 0");
/// ```
#[derive(Error, Debug)]
pub enum GoapError {
    /// A plan step was reached while one of its preconditions was still unmet
    #[error("Action precondition not met: {0}")]
    PreconditionNotMet(String),

    /// A work action was built with a non-positive per-cycle income
    #[error("Income per work cycle must be positive, got {0}")]
    InvalidIncome(i64),

    /// A money target that has to be earned or stolen was not positive
    #[error("Money amount must be positive, got {0}")]
    InvalidAmount(i64),

    /// The economy catalog reported a negative price
    #[error("Invalid price {price} for item {item}")]
    InvalidPrice { item: String, price: i64 },

    /// Planner configuration was rejected
    #[error("Invalid planner configuration: {0}")]
    InvalidConfig(String),

    /// A wrapper around standard IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, GoapError>;
