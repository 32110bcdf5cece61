use std::slice;

use super::register::Operation;

/// Append-only history of every recorded operation, in insertion order.
#[derive(Debug, Default, Clone)]
pub struct OperationLog {
    operations: Vec<Operation>,
}

impl OperationLog {
    pub fn new() -> Self {
        OperationLog {
            operations: Vec::new(),
        }
    }

    pub fn append(&mut self, op: Operation) {
        self.operations.push(op);
    }

    /// Operations targeting `source`, oldest first.
    pub fn operations_for<'a>(&'a self, source: &'a str) -> OperationsFor<'a> {
        OperationsFor {
            ops: self.operations.iter(),
            source,
        }
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// Lazy scan of the log for one source register. Cloning restarts from the
/// clone's position.
#[derive(Debug, Clone)]
pub struct OperationsFor<'a> {
    ops: slice::Iter<'a, Operation>,
    source: &'a str,
}

impl<'a> Iterator for OperationsFor<'a> {
    type Item = &'a Operation;

    fn next(&mut self) -> Option<Self::Item> {
        let source = self.source;
        self.ops.find(|op| op.source() == source)
    }
}
