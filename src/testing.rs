//! Instrumented cursor shared by the unit tests

use crate::cursor::Cursor;
use std::cell::Cell;
use std::rc::Rc;

/// Cursor over a static slice that records advances and disposals
///
/// Clones share their counters, so a recorder handed to an adapter can still be
/// inspected after the adapter's traversals finish.
#[derive(Debug, Clone)]
pub(crate) struct Recorder {
    data: &'static [i32],
    position: usize,
    advances: Rc<Cell<usize>>,
    disposals: Rc<Cell<usize>>,
}

impl Recorder {
    pub(crate) fn new(data: &'static [i32]) -> Self {
        Recorder {
            data,
            position: 0,
            advances: Rc::new(Cell::new(0)),
            disposals: Rc::new(Cell::new(0)),
        }
    }

    pub(crate) fn advances(&self) -> usize {
        self.advances.get()
    }

    pub(crate) fn disposals(&self) -> usize {
        self.disposals.get()
    }
}

impl Cursor for Recorder {
    type Element = i32;

    const HAS_COUNT: bool = true;

    fn reset(&mut self) {
        self.position = 0;
    }

    fn move_next(&mut self) -> bool {
        self.advances.set(self.advances.get() + 1);
        if self.position < self.data.len() {
            self.position += 1;
            true
        } else {
            self.position = self.data.len() + 1;
            false
        }
    }

    fn current(&self) -> Option<i32> {
        match self.position {
            0 => None,
            n => self.data.get(n - 1).copied(),
        }
    }

    fn dispose(&mut self) {
        self.disposals.set(self.disposals.get() + 1);
    }

    fn known_len(&self) -> Option<usize> {
        Some(self.data.len())
    }
}
