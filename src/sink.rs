//! Delivery of operation sequences to the presentation layer
use crate::check_index;
use crate::errors::ReconcilerError;
use crate::types::Operation;

/// Receiver for reconciliation output. Calls arrive in the order the operations must be
/// applied.
pub trait OperationSink {
    fn apply_insert(&mut self, index: usize);
    fn apply_remove(&mut self, index: usize);
    fn apply_move(&mut self, from: usize, to: usize);
    fn apply_update(&mut self, index: usize);
}

impl Operation {
    pub fn dispatch_to<S: OperationSink + ?Sized>(&self, sink: &mut S) {
        match *self {
            Operation::Insert { index } => sink.apply_insert(index),
            Operation::Remove { index } => sink.apply_remove(index),
            Operation::Move { from, to } => sink.apply_move(from, to),
            Operation::Update { index } => sink.apply_update(index),
        }
    }
}

pub fn dispatch_all<S: OperationSink + ?Sized>(operations: &[Operation], sink: &mut S) {
    for op in operations {
        op.dispatch_to(sink);
    }
}

#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub operations: Vec<Operation>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<Operation> {
        std::mem::take(&mut self.operations)
    }
}

impl OperationSink for RecordingSink {
    fn apply_insert(&mut self, index: usize) {
        self.operations.push(Operation::Insert { index });
    }

    fn apply_remove(&mut self, index: usize) {
        self.operations.push(Operation::Remove { index });
    }

    fn apply_move(&mut self, from: usize, to: usize) {
        self.operations.push(Operation::Move { from, to });
    }

    fn apply_update(&mut self, index: usize) {
        self.operations.push(Operation::Update { index });
    }
}

/// Applies `operations` to `list`. Inserted and updated rows are taken from `target` at
/// the operation's index, which is the row's final position.
pub fn replay<T: Clone>(
    list: &mut Vec<T>,
    operations: &[Operation],
    target: &[T],
) -> Result<(), ReconcilerError> {
    for op in operations {
        match *op {
            Operation::Insert { index } => {
                check_index!("INSERT", index, list.len() + 1);
                check_index!("INSERT", index, target.len());
                list.insert(index, target[index].clone());
            }
            Operation::Remove { index } => {
                check_index!("REMOVE", index, list.len());
                list.remove(index);
            }
            Operation::Move { from, to } => {
                check_index!("MOVE", from, list.len());
                check_index!("MOVE", to, list.len());
                let row = list.remove(from);
                list.insert(to, row);
            }
            Operation::Update { index } => {
                check_index!("UPDATE", index, list.len());
                check_index!("UPDATE", index, target.len());
                list[index] = target[index].clone();
            }
        }
    }
    Ok(())
}
