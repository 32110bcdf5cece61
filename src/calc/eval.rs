use std::collections::{HashMap, HashSet};

use log::{trace, warn};

use super::error::CalcError;
use super::oplog::{OperationLog, OperationsFor};
use super::register::{Name, Operation, Register, Value};

/////
///// Lazy evaluation of registers
/////

// One evaluator serves exactly one query: the memo and the path set are
// dropped with it, so the next query sees the log as it is then.
pub struct Evaluator<'a> {
    log: &'a OperationLog,

    // fully resolved registers
    resolved: HashMap<Name, Value>,

    // registers entered on the current resolution path
    visiting: HashSet<Name>,
}

// A register whose operations are being folded. Frames live on an explicit
// stack, so the depth of a dependency chain is bounded by memory rather than
// by the call stack.
struct Frame<'a> {
    name: &'a str,
    ops: OperationsFor<'a>,
    acc: Value,

    // operation waiting for the value of the frame above
    pending: Option<&'a Operation>,
}

impl<'a> Frame<'a> {
    fn new(name: &'a str, log: &'a OperationLog) -> Self {
        Frame {
            name,
            ops: log.operations_for(name),
            acc: 0,
            pending: None,
        }
    }

    fn resume(&mut self, rhs: Value) {
        if let Some(op) = self.pending.take() {
            self.acc = op.operator().apply(self.acc, rhs);
        }
    }
}

impl<'a> Evaluator<'a> {
    pub fn new(log: &'a OperationLog) -> Self {
        Evaluator {
            log,
            resolved: HashMap::new(),
            visiting: HashSet::new(),
        }
    }

    pub fn eval(&mut self, register: &Register) -> Result<Value, CalcError> {
        let name = match register {
            Register::Literal(v) => return Ok(*v),
            Register::Name(n) => n.as_str(),
        };
        if let Some(v) = self.enter(name)? {
            return Ok(v);
        }

        let log = self.log;
        let mut stack = vec![Frame::new(name, log)];
        let mut value = 0;

        while let Some(frame) = stack.last_mut() {
            match frame.ops.next() {
                Some(op) => {
                    // Skipped operators never touch their operand.
                    if !op.operator().is_supported() {
                        warn!("operator `{}` in `{}` is not supported, it will be ignored", op.operator(), op);
                        continue;
                    }
                    let operand = match op.operand() {
                        Register::Literal(v) => {
                            frame.acc = op.operator().apply(frame.acc, *v);
                            continue;
                        }
                        Register::Name(n) => n.as_str(),
                    };
                    match self.enter(operand)? {
                        Some(v) => frame.acc = op.operator().apply(frame.acc, v),
                        None => {
                            frame.pending = Some(op);
                            stack.push(Frame::new(operand, log));
                        }
                    }
                }
                None => {
                    let (done, acc) = (frame.name, frame.acc);
                    stack.pop();
                    trace!("{} = {}", done, acc);
                    self.resolved.insert(done.to_owned(), acc);
                    match stack.last_mut() {
                        Some(parent) => parent.resume(acc),
                        None => value = acc,
                    }
                }
            }
        }
        Ok(value)
    }

    // The cached value of a finished register, or `None` once `name` has been
    // pushed onto the resolution path.
    fn enter(&mut self, name: &str) -> Result<Option<Value>, CalcError> {
        if let Some(v) = self.resolved.get(name) {
            return Ok(Some(*v));
        }

        // Finished registers are caught by the memo above, so anything still
        // in `visiting` here is an ancestor on the current path.
        if !self.visiting.insert(name.to_owned()) {
            return Err(CalcError::Cycle(name.to_owned()));
        }
        Ok(None)
    }
}

/// Evaluates `register` against `log` with a fresh memo and path set.
pub fn evaluate(register: &Register, log: &OperationLog) -> Result<Value, CalcError> {
    Evaluator::new(log).eval(register)
}
