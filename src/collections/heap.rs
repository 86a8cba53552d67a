use core::cmp::Ordering;

use grid_util::point::Point;

use super::Sequence;

const INITIAL_HEAP_CAPACITY: usize = 32;

/// A cell in the open set together with its priority (`g + h`) and the cost `g` it was pushed with.
#[derive(Clone, Copy, Debug)]
pub struct PriorityEntry {
    pub point: Point,
    pub priority: f64,
    pub cost: f64,
}

impl PriorityEntry {
    pub fn new(point: Point, priority: f64, cost: f64) -> PriorityEntry {
        PriorityEntry {
            point,
            priority,
            cost,
        }
    }
}

impl PartialEq for PriorityEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PriorityEntry {}

impl PartialOrd for PriorityEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriorityEntry {
    /// Smaller entries are popped first. Orders by priority, then favours the larger cost (the
    /// node deeper into the search), then the lower x and finally the lower y coordinate so that
    /// expansion order never depends on the heap layout.
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| other.cost.total_cmp(&self.cost))
            .then_with(|| self.point.x.cmp(&other.point.x))
            .then_with(|| self.point.y.cmp(&other.point.y))
    }
}

/// Binary min-heap of [PriorityEntry] stored in a [Sequence].
///
/// There is no decrease-key: a cell whose cost improves is simply pushed again and the stale
/// entry is discarded by the search when it is popped after the cell was closed.
#[derive(Clone, Debug)]
pub struct NodeHeap {
    items: Sequence<PriorityEntry>,
}

impl Default for NodeHeap {
    fn default() -> NodeHeap {
        NodeHeap::new()
    }
}

impl NodeHeap {
    pub fn new() -> NodeHeap {
        NodeHeap {
            items: Sequence::with_capacity(INITIAL_HEAP_CAPACITY).unwrap_or_default(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The entry that [pop](Self::pop) would return next.
    pub fn peek(&self) -> Option<&PriorityEntry> {
        self.items.get(0).ok()
    }

    pub fn push(&mut self, entry: PriorityEntry) {
        self.items.push(entry);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes the minimum entry: the root is swapped with the last entry, the last entry is
    /// popped and the new root is sifted down.
    pub fn pop(&mut self) -> Option<PriorityEntry> {
        let last = self.items.len().checked_sub(1)?;
        self.items.swap_slots(0, last);
        let entry = self.items.pop().ok()?;
        self.sift_down(0);
        Some(entry)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.items[i] >= self.items[parent] {
                break;
            }
            self.items.swap_slots(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.items.len();
        loop {
            let mut smallest = i;
            for child in [2 * i + 1, 2 * i + 2] {
                if child < n && self.items[child] < self.items[smallest] {
                    smallest = child;
                }
            }
            if smallest == i {
                return;
            }
            self.items.swap_slots(i, smallest);
            i = smallest;
        }
    }
}
