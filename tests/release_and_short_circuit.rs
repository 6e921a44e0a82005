use seqcomb::SeqError;
use seqcomb::prelude::*;
use seqcomb::repeat::Repeat;
use std::cell::Cell;
use std::rc::Rc;

/// Cursor over a static slice that counts how often it is released
#[derive(Debug, Clone)]
struct Tracked {
    data: &'static [i32],
    position: usize,
    released: Rc<Cell<usize>>,
}

impl Tracked {
    fn adapter(data: &'static [i32]) -> (Adapter<Tracked>, Rc<Cell<usize>>) {
        let released = Rc::new(Cell::new(0));
        let cursor = Tracked {
            data,
            position: 0,
            released: Rc::clone(&released),
        };
        (Adapter::new(cursor), released)
    }
}

impl Cursor for Tracked {
    type Element = i32;

    fn reset(&mut self) {
        self.position = 0;
    }

    fn move_next(&mut self) -> bool {
        if self.position < self.data.len() {
            self.position += 1;
            true
        } else {
            self.position = self.data.len() + 1;
            false
        }
    }

    fn current(&self) -> Option<i32> {
        self.position
            .checked_sub(1)
            .and_then(|index| self.data.get(index))
            .copied()
    }

    fn dispose(&mut self) {
        self.released.set(self.released.get() + 1);
    }
}

fn explode(_: &&i32) -> bool {
    panic!("callback invoked on an empty source")
}

fn explode_group(_: &i32) -> Adapter<Repeat<i32>> {
    panic!("group selector invoked on an empty source")
}

#[test]
fn terminals_never_call_back_on_empty_sources() {
    let empty: Vec<i32> = Vec::new();
    let source = seq(&empty);

    assert_eq!(source.first_where(explode), Err(SeqError::NoMatch));
    assert_eq!(source.last_where(explode), Err(SeqError::NoMatch));
    assert_eq!(source.single_where(explode), Err(SeqError::NoMatch));
    assert!(source.all(explode));
    assert!(!source.any_where(explode));
    assert!(source.none_where(explode));
    assert_eq!(source.count_where(explode), 0);
    assert!(!source.contains_by(&&1, |_, _| panic!("comparer invoked")));
    assert_eq!(
        source.aggregate(0, |_, _: &i32| -> i32 { panic!("accumulator invoked") }),
        0
    );
    assert_eq!(source.mismatch_by(&empty, |_, _| panic!("comparer invoked")), None);
}

#[test]
fn operators_never_call_back_on_empty_sources() {
    let empty: Vec<i32> = Vec::new();
    let source = seq(&empty);

    assert_eq!(source.filter(explode).count(), 0);
    assert_eq!(source.skip_while(explode).count(), 0);
    assert_eq!(source.take_while(explode).count(), 0);
    assert_eq!(
        source
            .select(|_| -> i32 { panic!("selector invoked") })
            .iter()
            .count(),
        0
    );
    assert_eq!(source.select_many(explode_group).count(), 0);
}

#[test]
fn early_exit_from_a_loop_releases_the_cursor() {
    let (adapter, released) = Tracked::adapter(&[1, 2, 3, 4]);
    for value in adapter.filter(|v| *v > 0).iter() {
        if value == 2 {
            break;
        }
    }
    assert_eq!(released.get(), 1);
}

#[test]
fn short_circuiting_terminals_release_the_cursor() {
    let (adapter, released) = Tracked::adapter(&[1, 2, 3, 4]);

    assert_eq!(adapter.first(), Ok(1));
    assert!(adapter.any_where(|v| *v == 3));
    assert!(!adapter.all(|v| *v < 2));
    assert!(adapter.contains(&2));
    assert_eq!(adapter.element_at(1), Ok(2));
    assert_eq!(adapter.single(), Err(SeqError::MoreThanOneElement));
    assert_eq!(released.get(), 6);
}

#[test]
fn error_exit_releases_the_cursor() {
    let (adapter, released) = Tracked::adapter(&[]);
    assert_eq!(adapter.first(), Err(SeqError::NoElements));
    assert_eq!(adapter.max(), Err(SeqError::NoElements));
    assert_eq!(released.get(), 2);
}

#[test]
fn early_exit_inside_pipelines_releases_every_cursor() {
    let (left, left_released) = Tracked::adapter(&[1, 2, 3]);
    let (right, right_released) = Tracked::adapter(&[4, 5]);

    let first = left.clone().concat(right.clone()).take(1).first();
    assert_eq!(first, Ok(1));
    assert_eq!(left_released.get(), 1);
    assert_eq!(right_released.get(), 1);

    let zipped: Vec<(i32, i32)> = left.zip(right).into_iter().collect();
    assert_eq!(zipped, vec![(1, 4), (2, 5)]);
    assert_eq!(left_released.get(), 2);
    assert_eq!(right_released.get(), 2);
}

#[test]
fn unwinding_callback_releases_the_cursor() {
    let (adapter, released) = Tracked::adapter(&[1, 2, 3]);
    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        adapter.any_where(|v| {
            if *v == 2 {
                panic!("callback failure");
            }
            false
        })
    }));
    assert!(outcome.is_err());
    assert_eq!(released.get(), 1);
}
