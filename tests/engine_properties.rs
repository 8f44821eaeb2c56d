//! Property-based tests for the calculator engine.
//!
//! These use proptest to check the history invariants over
//! randomly generated operation sequences.

use calc_repl::{CalcError, Calculator, HistoryEntry, Operation, OperationKind};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_kind()(variant in 0..4u8) -> OperationKind {
        OperationKind::ALL[variant as usize]
    }
}

prop_compose! {
    fn arbitrary_operation()(
        kind in arbitrary_kind(),
        a in -1.0e6..1.0e6f64,
        b in prop_oneof![Just(0.0), -1.0e6..1.0e6f64],
    ) -> Operation {
        Operation::new(kind, a, b).unwrap()
    }
}

fn expected(op: &Operation) -> Option<f64> {
    let (a, b) = op.operands();
    let value = match op.kind() {
        OperationKind::Add => a + b,
        OperationKind::Subtract => a - b,
        OperationKind::Multiply => a * b,
        OperationKind::Divide if b == 0.0 => return None,
        OperationKind::Divide => a / b,
    };
    Some(value).filter(|v| v.is_finite())
}

proptest! {
    #[test]
    fn perform_grows_history_only_on_success(ops in prop::collection::vec(arbitrary_operation(), 0..40)) {
        let mut calc = Calculator::new();
        for op in ops {
            let before = calc.history().len();
            match (calc.perform(op), expected(&op)) {
                (Ok(result), Some(value)) => {
                    prop_assert_eq!(result, value);
                    prop_assert_eq!(calc.history().len(), before + 1);
                    prop_assert_eq!(calc.history().last(), Some(&HistoryEntry { operation: op, result }));
                }
                (Err(CalcError::DivisionByZero | CalcError::NonFiniteResult { .. }), None) => {
                    prop_assert_eq!(calc.history().len(), before);
                }
                (got, want) => prop_assert!(false, "got {:?}, expected {:?}", got, want),
            }
        }
    }

    #[test]
    fn undo_is_lifo(ops in prop::collection::vec(arbitrary_operation(), 0..40)) {
        let mut calc = Calculator::new();
        for op in &ops {
            let _ = calc.perform(*op);
        }
        let recorded: Vec<HistoryEntry> = calc.history().to_vec();
        for entry in recorded.iter().rev() {
            prop_assert_eq!(calc.undo(), Some(*entry));
        }
        prop_assert!(calc.history().is_empty());
        prop_assert_eq!(calc.undo(), None);
        prop_assert!(calc.history().is_empty());
    }

    #[test]
    fn clear_always_empties(ops in prop::collection::vec(arbitrary_operation(), 0..40)) {
        let mut calc = Calculator::new();
        for op in ops {
            let _ = calc.perform(op);
        }
        calc.clear_history();
        prop_assert!(calc.history().is_empty());
    }

    #[test]
    fn create_accepts_names_in_any_case(kind in arbitrary_kind(), upper in any::<bool>()) {
        let name = if upper { kind.name().to_uppercase() } else { kind.name().to_string() };
        let op = Operation::create(&name, 1.0, 2.0).unwrap();
        prop_assert_eq!(op.kind(), kind);
    }

    #[test]
    fn create_rejects_unrecognized_names(name in "[a-z]{1,10}") {
        prop_assume!(OperationKind::ALL.iter().all(|k| k.name() != name));
        prop_assert_eq!(
            Operation::create(&name, 1.0, 2.0),
            Err(CalcError::UnknownOperation(name.clone()))
        );
    }
}

#[test]
fn bogus_operation_is_unknown() {
    assert_eq!(
        Operation::create("bogus", 1.0, 2.0),
        Err(CalcError::UnknownOperation("bogus".to_string()))
    );
}

#[test]
fn add_then_divide_by_zero_then_undo_twice() {
    let mut calc = Calculator::new();

    let add = Operation::create("add", 2.0, 3.0).unwrap();
    assert_eq!(calc.perform(add), Ok(5.0));
    assert_eq!(calc.history(), &[HistoryEntry { operation: add, result: 5.0 }]);

    let divide = Operation::create("divide", 10.0, 0.0).unwrap();
    assert_eq!(calc.perform(divide), Err(CalcError::DivisionByZero));
    assert_eq!(calc.history().len(), 1);

    assert_eq!(calc.undo(), Some(HistoryEntry { operation: add, result: 5.0 }));
    assert!(calc.history().is_empty());
    assert_eq!(calc.undo(), None);
}
