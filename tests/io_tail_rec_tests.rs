#![cfg(feature = "effect")]
//! Tests for `IO::tail_rec_m`.
//!
//! The loop must run in bounded stack space however many iterations it takes,
//! and for small iteration counts it must behave exactly like the same loop
//! unrolled into nested `flat_map` calls.

use effectum::control::Either;
use effectum::effect::IO;
use effectum::typeclass::Monad;
use proptest::prelude::*;
use rstest::rstest;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

type TestIO<A> = IO<A, String>;

fn count_up_to(limit: u64) -> TestIO<u64> {
    IO::tail_rec_m(0_u64, move |n| {
        IO::pure(if n < limit {
            Either::Left(n + 1)
        } else {
            Either::Right(n)
        })
    })
}

/// The same loop as `count_up_to`, written as nested `flat_map` calls.
fn count_up_unrolled(n: u64, limit: u64) -> TestIO<u64> {
    if n < limit {
        TestIO::pure(n + 1).flat_map(move |next| count_up_unrolled(next, limit))
    } else {
        TestIO::pure(n)
    }
}

// =============================================================================
// Concrete scenarios
// =============================================================================

#[rstest]
fn test_tail_rec_m_counts_to_three() {
    assert_eq!(count_up_to(3).run_unsafe(), Ok(3));
}

#[rstest]
fn test_tail_rec_m_immediate_right() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);

    let io: TestIO<&str> = IO::tail_rec_m((), move |()| {
        counter.set(counter.get() + 1);
        IO::pure(Either::Right("done"))
    });

    assert_eq!(io.run_unsafe(), Ok("done"));
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn test_tail_rec_m_is_lazy() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);

    let io: TestIO<u32> = IO::tail_rec_m(0_u32, move |n| {
        counter.set(counter.get() + 1);
        IO::pure(if n < 5 { Either::Left(n + 1) } else { Either::Right(n) })
    });

    assert_eq!(calls.get(), 0);
    assert_eq!(io.run_unsafe(), Ok(5));
    assert_eq!(calls.get(), 6);
}

// =============================================================================
// Stack safety
// =============================================================================

#[rstest]
#[case(10_000)]
#[case(100_000)]
#[case(1_000_000)]
fn test_tail_rec_m_deep_loop_does_not_overflow(#[case] limit: u64) {
    assert_eq!(count_up_to(limit).run_unsafe(), Ok(limit));
}

#[rstest]
fn test_tail_rec_m_steps_built_from_flat_map() {
    let io: TestIO<u64> = IO::tail_rec_m((0_u64, 0_u64), |(n, total)| {
        IO::pure(n).flat_map(move |current| {
            if current < 50_000 {
                IO::pure(Either::Left((current + 1, total + current)))
            } else {
                IO::pure(Either::Right(total))
            }
        })
    });

    assert_eq!(io.run_unsafe(), Ok((0..50_000).sum()));
}

#[rstest]
fn test_tail_rec_m_through_monad_trait() {
    let io: TestIO<u64> = <TestIO<()> as Monad>::tail_rec_m(0_u64, |n| {
        IO::pure(if n < 20_000 { Either::Left(n + 1) } else { Either::Right(n) })
    });

    assert_eq!(io.run_unsafe(), Ok(20_000));
}

// =============================================================================
// Failures and effects
// =============================================================================

#[rstest]
fn test_tail_rec_m_stops_at_first_failure() {
    let visited = Rc::new(RefCell::new(Vec::new()));
    let recorder = Rc::clone(&visited);

    let io: TestIO<u32> = IO::tail_rec_m(0_u32, move |n| {
        recorder.borrow_mut().push(n);
        if n == 4 {
            IO::raise_error(format!("stopped at {n}"))
        } else {
            IO::pure(Either::Left(n + 1))
        }
    });

    assert_eq!(io.run_unsafe(), Err("stopped at 4".to_string()));
    assert_eq!(*visited.borrow(), vec![0, 1, 2, 3, 4]);
}

#[rstest]
fn test_tail_rec_m_failure_can_be_recovered() {
    let io: TestIO<u32> = IO::tail_rec_m(0_u32, |n| {
        if n == 2 {
            IO::raise_error("two".to_string())
        } else {
            IO::pure(Either::Left(n + 1))
        }
    })
    .handle_error_with(|error| IO::pure(u32::try_from(error.len()).unwrap_or(u32::MAX)));

    assert_eq!(io.run_unsafe(), Ok(3));
}

#[rstest]
fn test_tail_rec_m_runs_step_effects_in_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let writer = Rc::clone(&log);

    let io: TestIO<()> = IO::tail_rec_m(3_u32, move |n| {
        let writer = Rc::clone(&writer);
        IO::new(move || writer.borrow_mut().push(n)).fmap(move |()| {
            if n == 0 { Either::Right(()) } else { Either::Left(n - 1) }
        })
    });

    assert_eq!(io.run_unsafe(), Ok(()));
    assert_eq!(*log.borrow(), vec![3, 2, 1, 0]);
}

// =============================================================================
// Equivalence with explicit unrolling
// =============================================================================

proptest! {
    #[test]
    fn prop_tail_rec_m_matches_unrolled_loop(limit in 0_u64..=5) {
        let looped = count_up_to(limit);
        let unrolled = count_up_unrolled(0, limit);

        prop_assert!(looped.eqv(unrolled));
    }

    #[test]
    fn prop_tail_rec_m_failure_matches_unrolled_loop(fail_at in 0_u64..=5) {
        let looped: TestIO<u64> = IO::tail_rec_m(0_u64, move |n| {
            if n == fail_at {
                IO::raise_error(format!("failed at {n}"))
            } else {
                IO::pure(Either::Left(n + 1))
            }
        });

        fn unrolled(n: u64, fail_at: u64) -> TestIO<u64> {
            if n == fail_at {
                IO::raise_error(format!("failed at {n}"))
            } else {
                TestIO::pure(n + 1).flat_map(move |next| unrolled(next, fail_at))
            }
        }

        prop_assert!(looped.eqv(unrolled(0, fail_at)));
    }
}
