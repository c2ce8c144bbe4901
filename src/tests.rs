use std::cell::Cell;
use std::rc::Rc;

mod properties;

/// Shared construction/drop counters for [`Tracked`] values.
#[derive(Debug, Default, Clone)]
pub(crate) struct Counters {
    constructed: Rc<Cell<usize>>,
    dropped: Rc<Cell<usize>>,
}

impl Counters {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn make(&self, id: u32) -> Tracked {
        self.constructed.set(self.constructed.get() + 1);
        Tracked {
            id,
            counters: self.clone(),
        }
    }

    pub(crate) fn constructed(&self) -> usize {
        self.constructed.get()
    }

    pub(crate) fn dropped(&self) -> usize {
        self.dropped.get()
    }

    pub(crate) fn live(&self) -> usize {
        self.constructed() - self.dropped()
    }
}

/// A value that reports every construction and drop to its [`Counters`].
#[derive(Debug)]
pub(crate) struct Tracked {
    pub(crate) id: u32,
    counters: Counters,
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.counters.make(self.id)
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.counters.dropped.set(self.counters.dropped.get() + 1);
    }
}

#[test]
fn tracked_counts_clones_and_drops() {
    let counters = Counters::new();
    let a = counters.make(1);
    let b = a.clone();
    assert_eq!(counters.constructed(), 2);
    drop(a);
    drop(b);
    assert_eq!(counters.dropped(), 2);
    assert_eq!(counters.live(), 0);
}
