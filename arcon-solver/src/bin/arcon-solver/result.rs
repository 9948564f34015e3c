use arcon_solver::problems::ProblemError;
use thiserror::Error;

pub(crate) type ArconResult<T> = Result<T, ArconError>;

#[derive(Error, Debug)]
pub(crate) enum ArconError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Failed to run the problem, more details: {0}")]
    Problem(#[from] ProblemError),
}
