#![cfg(feature = "effect")]
//! Unit tests for the IO effect.
//!
//! These tests check that side effects are deferred until the action is run,
//! that failures propagate unchanged, and that the recovery combinators and
//! runners behave as documented.

use effectum::effect::{Error, IO};
use rstest::rstest;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn counter() -> (Rc<Cell<usize>>, Rc<Cell<usize>>) {
    let count = Rc::new(Cell::new(0));
    (Rc::clone(&count), count)
}

// =============================================================================
// Basic IO Tests
// =============================================================================

mod basic_operations {
    use super::*;

    #[rstest]
    fn test_io_pure_and_run_unsafe() {
        let io: IO<i32, String> = IO::pure(42);
        assert_eq!(io.run_unsafe(), Ok(42));
    }

    #[rstest]
    fn test_io_new_and_run_unsafe() {
        let io: IO<i32, String> = IO::new(|| 42 + 8);
        assert_eq!(io.run_unsafe(), Ok(50));
    }

    #[rstest]
    fn test_io_raise_error_and_run_unsafe() {
        let io: IO<i32, String> = IO::raise_error("boom".to_string());
        assert_eq!(io.run_unsafe(), Err("boom".to_string()));
    }

    #[rstest]
    fn test_io_concrete_scenario_map_then_flat_map() {
        let io: IO<i32, String> = IO::pure(2).fmap(|x| x * 3).flat_map(|x| IO::pure(x + 1));
        assert_eq!(io.run_unsafe(), Ok(7));
    }

    #[rstest]
    fn test_io_concrete_scenario_error_unchanged_through_map() {
        let io: IO<i32> = IO::raise_error(Error::message("boom")).fmap(|x: i32| x + 1);
        let error = io.run_unsafe().unwrap_err();
        assert!(matches!(error, Error::Message(ref message) if message == "boom"));
    }

    #[rstest]
    fn test_io_then_discards_left_value() {
        let io: IO<&str, String> = IO::pure(10).then(IO::pure("next"));
        assert_eq!(io.run_unsafe(), Ok("next"));
    }

    #[rstest]
    fn test_io_product() {
        let io: IO<(i32, String), ()> = IO::pure(10).product(IO::pure("hello".to_string()));
        assert_eq!(io.run_unsafe(), Ok((10, "hello".to_string())));
    }

    #[rstest]
    #[case(Ok(3), Ok(3))]
    #[case(Err("missing".to_string()), Err("missing".to_string()))]
    fn test_io_from_result(#[case] input: Result<i32, String>, #[case] expected: Result<i32, String>) {
        assert_eq!(IO::from_result(input).run_unsafe(), expected);
    }

    #[rstest]
    fn test_io_delay_completes() {
        let io: IO<(), String> = IO::delay(std::time::Duration::from_millis(1));
        assert_eq!(io.run_unsafe(), Ok(()));
    }
}

// =============================================================================
// Lazy Evaluation Tests (side effects deferred until run)
// =============================================================================

mod lazy_evaluation {
    use super::*;

    #[rstest]
    fn test_io_new_is_lazy() {
        let (count, observed) = counter();
        let io: IO<i32, ()> = IO::new(move || {
            count.set(count.get() + 1);
            42
        });

        assert_eq!(observed.get(), 0, "IO should not execute on creation");
        assert_eq!(io.run_unsafe(), Ok(42));
        assert_eq!(observed.get(), 1, "IO should execute once on run");
    }

    #[rstest]
    fn test_io_composition_is_lazy() {
        let (count, observed) = counter();
        let io: IO<i32, ()> = IO::pure(1)
            .fmap(move |x| {
                count.set(count.get() + 1);
                x + 1
            })
            .flat_map(|x| IO::pure(x * 10))
            .attempt()
            .fmap(|outcome| outcome.unwrap_or(0));

        assert_eq!(observed.get(), 0);
        assert_eq!(io.run_unsafe(), Ok(20));
        assert_eq!(observed.get(), 1);
    }

    #[rstest]
    fn test_io_suspend_defers_construction() {
        let (built, observed) = counter();
        let io: IO<i32, ()> = IO::suspend(move || {
            built.set(built.get() + 1);
            IO::pure(7)
        });

        assert_eq!(observed.get(), 0, "suspend should not build the inner action");
        assert_eq!(io.run_unsafe(), Ok(7));
        assert_eq!(observed.get(), 1);
    }

    #[rstest]
    fn test_io_rebuilt_description_repeats_effect() {
        let (count, observed) = counter();
        let build = move || {
            let count = Rc::clone(&count);
            IO::<(), ()>::new(move || count.set(count.get() + 1))
        };

        build().run_unsafe().unwrap();
        build().run_unsafe().unwrap();
        assert_eq!(observed.get(), 2);
    }

    #[rstest]
    fn test_io_apply_runs_function_side_first() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let function_log = Rc::clone(&log);
        let value_log = Rc::clone(&log);

        let function: IO<Box<dyn FnOnce(i32) -> i32>, ()> = IO::new(move || {
            function_log.borrow_mut().push("function");
            Box::new(|x: i32| x + 1) as Box<dyn FnOnce(i32) -> i32>
        });
        let value: IO<i32, ()> = IO::new(move || {
            value_log.borrow_mut().push("value");
            41
        });

        assert_eq!(function.apply(value).run_unsafe(), Ok(42));
        assert_eq!(*log.borrow(), vec!["function", "value"]);
    }
}

// =============================================================================
// Error Propagation and Recovery
// =============================================================================

mod error_handling {
    use super::*;

    #[rstest]
    fn test_flat_map_after_error_is_never_called() {
        let (count, observed) = counter();
        let io: IO<i32, String> = IO::raise_error("stop".to_string()).flat_map(move |x: i32| {
            count.set(count.get() + 1);
            IO::pure(x)
        });

        assert_eq!(io.run_unsafe(), Err("stop".to_string()));
        assert_eq!(observed.get(), 0);
    }

    #[rstest]
    fn test_error_raised_inside_flat_map_propagates() {
        let io: IO<i32, String> = IO::pure(1)
            .flat_map(|_| IO::<i32, String>::raise_error("inner".to_string()))
            .fmap(|x| x + 1);

        assert_eq!(io.run_unsafe(), Err("inner".to_string()));
    }

    #[rstest]
    #[case(IO::pure(1), Ok(1))]
    #[case(IO::raise_error("e".to_string()), Err("e".to_string()))]
    fn test_attempt_never_fails(#[case] io: IO<i32, String>, #[case] expected: Result<i32, String>) {
        assert_eq!(io.attempt().run_unsafe(), Ok(expected));
    }

    #[rstest]
    fn test_handle_error_with_recovers() {
        let io: IO<usize, String> = IO::raise_error("four".to_string())
            .handle_error_with(|error| IO::pure(error.len()));
        assert_eq!(io.run_unsafe(), Ok(4));
    }

    #[rstest]
    fn test_handle_error_with_skips_handler_on_success() {
        let (count, observed) = counter();
        let io: IO<usize, String> = IO::pure(9).handle_error_with(move |_| {
            count.set(count.get() + 1);
            IO::pure(0)
        });

        assert_eq!(io.run_unsafe(), Ok(9));
        assert_eq!(observed.get(), 0);
    }

    #[rstest]
    fn test_handle_error_with_can_fail_again() {
        let io: IO<i32, String> = IO::raise_error("first".to_string())
            .handle_error_with(|error| IO::raise_error(format!("{error} then second")));
        assert_eq!(io.run_unsafe(), Err("first then second".to_string()));
    }

    #[rstest]
    fn test_map_error_changes_error_type() {
        let io: IO<i32, usize> = IO::<i32, String>::raise_error("abc".to_string())
            .map_error(|error| error.len());
        assert_eq!(io.run_unsafe(), Err(3));
    }

    #[rstest]
    fn test_try_new_lifts_io_error() {
        let io: IO<String> = IO::try_new(|| {
            std::fs::read_to_string("/definitely/not/a/real/path").map_err(Error::from)
        });
        assert!(matches!(io.run_unsafe(), Err(Error::Other(_))));
    }

    #[rstest]
    fn test_catch_panic_converts_panic() {
        let io: IO<i32> = IO::pure(1).fmap(|_| -> i32 { panic!("exploded") }).catch_panic();
        let error = io.run_unsafe().unwrap_err();
        assert!(error.is_panic());
        assert_eq!(error.to_string(), "effect panicked: exploded");
    }
}

// =============================================================================
// Runners
// =============================================================================

mod runners {
    use super::*;

    #[rstest]
    fn test_run_with_callback_delivers_success_once() {
        let calls = RefCell::new(Vec::new());
        IO::<i32, String>::pure(5).run_with_callback(|outcome| calls.borrow_mut().push(outcome));
        assert_eq!(calls.into_inner(), vec![Ok(5)]);
    }

    #[rstest]
    fn test_run_with_callback_delivers_failure_as_value() {
        let mut received = None;
        IO::<i32, String>::raise_error("bad".to_string())
            .run_with_callback(|outcome| received = Some(outcome));
        assert_eq!(received, Some(Err("bad".to_string())));
    }

    #[rstest]
    fn test_run_unsafe_with_tracing_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let io: IO<i32, String> = IO::raise_error("logged".to_string());
            assert_eq!(io.run_unsafe(), Err("logged".to_string()));
        });
    }
}
