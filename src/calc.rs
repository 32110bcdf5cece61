// A calculator over lazily evaluated registers.
//
//     a add 2
//     b add a
//     b multiply 3
//     print b        -> 6
//
// Operations are only recorded; values are computed when printed.

mod error;
mod eval;
mod oplog;
mod parser;
mod register;
mod session;

use log::debug;

pub use error::CalcError;
pub use eval::{evaluate, Evaluator};
pub use oplog::{OperationLog, OperationsFor};
pub use parser::{parse_command, Command};
pub use register::{
    is_alphanumeric, is_integer, is_valid_register, Name, Operation, Operator, Register, Value,
};
pub use session::Session;

/////
///// The calculator
/////

#[derive(Debug, Default)]
pub struct Calculator {
    log: OperationLog,
}

impl Calculator {
    pub fn new() -> Self {
        Calculator {
            log: OperationLog::new(),
        }
    }

    /// Validates and records `term1 operator term2`. A rejected operation
    /// leaves the log as it was.
    pub fn record_operation(
        &mut self,
        term1: &str,
        operator: &str,
        term2: &str,
    ) -> Result<(), CalcError> {
        let op = Operation::new(term1, operator, term2)?;
        debug!("recording `{}`", op);
        self.log.append(op);
        Ok(())
    }

    /// Only a cycle fails a query.
    pub fn query_register(&self, name: &str) -> Result<Value, CalcError> {
        let register = Register::for_query(name);
        evaluate(&register, &self.log)
    }

    pub fn operations(&self) -> &OperationLog {
        &self.log
    }
}
