//! Discovery events written during a search so that a visualiser can replay it afterwards.
use grid_util::point::Point;

use crate::collections::Sequence;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A cell other than the start was opened for the first time.
    Discovered,
    /// A cell was popped from the open set and closed.
    Expanded,
    /// The jump scan of JPS stepped onto a cell.
    Probed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiscoveryEvent {
    pub point: Point,
    pub kind: EventKind,
}

/// Ordered log of events, drained by the consumer with [Sequence::dequeue].
pub type EventLog = Sequence<DiscoveryEvent>;

/// Append-only destination for discovery events. The search only ever writes to it.
pub trait EventSink {
    fn record(&mut self, point: Point, kind: EventKind);
}

impl EventSink for EventLog {
    fn record(&mut self, point: Point, kind: EventKind) {
        self.enqueue(DiscoveryEvent { point, kind });
    }
}

impl EventSink for Vec<DiscoveryEvent> {
    fn record(&mut self, point: Point, kind: EventKind) {
        self.push(DiscoveryEvent { point, kind });
    }
}

/// Discards every event.
impl EventSink for () {
    fn record(&mut self, _: Point, _: EventKind) {}
}
