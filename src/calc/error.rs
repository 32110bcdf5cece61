use thiserror::Error;

use super::register::Value;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("illegal register `{0}`, expected an integer or an alphanumeric name")]
    IllegalRegister(String),

    #[error("illegal operation, integer {0} cannot be the target of an operation")]
    LiteralSource(Value),

    #[error("illegal operation, there is a cycle in the evaluation of `{0}`")]
    Cycle(String),
}

impl CalcError {
    /// True for errors raised while checking a command, before anything is
    /// recorded or evaluated.
    pub fn is_validation(&self) -> bool {
        !matches!(self, CalcError::Cycle(_))
    }
}
