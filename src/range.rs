use crate::adapter::Adapter;
use crate::cursor::Cursor;
use crate::error::{Result, SeqError, fail};
use crate::step::Step;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    At(usize),
    End,
}

/// Position bookkeeping shared by the generators: `count` slots, visited once
#[derive(Debug, Clone, Copy)]
pub(crate) struct Tally {
    count: usize,
    state: State,
}

impl Tally {
    pub(crate) fn new(count: usize) -> Self {
        Tally {
            count,
            state: State::Start,
        }
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }

    pub(crate) fn reset(&mut self) {
        self.state = State::Start;
    }

    pub(crate) fn advance(&mut self) -> bool {
        self.state = match self.state {
            State::Start if self.count > 0 => State::At(0),
            State::At(position) if position + 1 < self.count => State::At(position + 1),
            _ => State::End,
        };
        self.state != State::End
    }

    pub(crate) fn position(&self) -> Option<usize> {
        match self.state {
            State::At(position) => Some(position),
            State::Start | State::End => None,
        }
    }
}

/// Generator of `count` consecutive integers starting at `start`
#[derive(Debug, Clone, Copy)]
pub struct Range<T> {
    start: T,
    tally: Tally,
}

impl<T: Step> Range<T> {
    /// Fails when the last element would overflow `T`
    pub fn new(start: T, count: usize) -> Result<Self> {
        if count > 0 && start.forward(count - 1).is_none() {
            return fail(
                "range",
                SeqError::ArgumentOutOfRange("start + count - 1 overflows the element type"),
            );
        }
        Ok(Range {
            start,
            tally: Tally::new(count),
        })
    }
}

impl<T: Step> Cursor for Range<T> {
    type Element = T;

    const HAS_COUNT: bool = true;
    const HAS_INDEXER: bool = true;

    fn reset(&mut self) {
        self.tally.reset();
    }

    fn move_next(&mut self) -> bool {
        self.tally.advance()
    }

    fn current(&self) -> Option<T> {
        self.start.forward(self.tally.position()?)
    }

    fn known_len(&self) -> Option<usize> {
        Some(self.tally.count())
    }

    fn known_at(&self, index: usize) -> Option<T> {
        if index < self.tally.count() {
            self.start.forward(index)
        } else {
            None
        }
    }
}

/// Generator of `count` values produced by `generator(start, index)`
///
/// The generator runs once per advance.
#[derive(Clone)]
pub struct RangeWith<T, F, U> {
    start: T,
    generator: F,
    tally: Tally,
    current: Option<U>,
}

impl<T, F, U> RangeWith<T, F, U> {
    pub fn new(start: T, count: usize, generator: F) -> Self {
        RangeWith {
            start,
            generator,
            tally: Tally::new(count),
            current: None,
        }
    }
}

impl<T, F, U> Cursor for RangeWith<T, F, U>
where
    T: Clone,
    F: Fn(T, usize) -> U,
    U: Clone,
{
    type Element = U;

    const HAS_COUNT: bool = true;
    const HAS_INDEXER: bool = true;

    fn reset(&mut self) {
        self.tally.reset();
        self.current = None;
    }

    fn move_next(&mut self) -> bool {
        let moved = self.tally.advance();
        self.current = self
            .tally
            .position()
            .map(|index| (self.generator)(self.start.clone(), index));
        moved
    }

    fn current(&self) -> Option<U> {
        self.current.clone()
    }

    fn known_len(&self) -> Option<usize> {
        Some(self.tally.count())
    }

    fn known_at(&self, index: usize) -> Option<U> {
        if index < self.tally.count() {
            Some((self.generator)(self.start.clone(), index))
        } else {
            None
        }
    }
}

/// `count` consecutive integers from `start`
pub fn range<T: Step>(start: T, count: usize) -> Result<Adapter<Range<T>>> {
    Range::new(start, count).map(Adapter::new)
}

/// `count` values `generator(start, 0)`, `generator(start, 1)`, ...
pub fn range_with<T, F, U>(start: T, count: usize, generator: F) -> Adapter<RangeWith<T, F, U>>
where
    T: Clone,
    F: Fn(T, usize) -> U,
    U: Clone,
{
    Adapter::new(RangeWith::new(start, count, generator))
}
