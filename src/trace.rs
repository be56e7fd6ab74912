//! # Control-Flow Trace
//!
//! A fixed-capacity ring buffer of explicit PC changes (jumps, calls,
//! returns, taken branches, MLI traps and resets). Sequential fall-through is
//! never recorded.
//!
//! Two rules keep the buffer readable:
//!
//! - **Loop compression**: a transition identical to the newest entry bumps
//!   that entry's count instead of taking a new slot
//! - **ROM filter**: transitions with both endpoints at or above the filter
//!   address (the monitor ROM, `$F800` by default) are dropped
//!
//! The trace is diagnostic only and never influences execution.

use std::fmt;

/// One recorded transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceEntry {
    pub from: u16,
    pub to: u16,
    /// Number of consecutive times this transition was taken.
    pub count: u32,
}

/// Loop-compressed ring buffer of control-flow transitions.
///
/// # Examples
///
/// ```
/// use prodos8emu::ControlFlowTrace;
///
/// let mut trace = ControlFlowTrace::new(4, 0xF800);
/// for _ in 0..3 {
///     trace.record(0x2010, 0x2000);
/// }
/// trace.record(0xFA00, 0xFB00); // both in ROM, dropped
///
/// let entries: Vec<_> = trace.iter().collect();
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].count, 3);
/// ```
#[derive(Debug, Clone)]
pub struct ControlFlowTrace {
    entries: Vec<TraceEntry>,
    capacity: usize,
    /// Slot the next new entry goes to.
    next: usize,
    filter_start: u16,
}

impl ControlFlowTrace {
    /// Creates an empty trace holding up to `capacity` entries.
    ///
    /// A capacity of zero disables recording.
    pub fn new(capacity: usize, filter_start: u16) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
            next: 0,
            filter_start,
        }
    }

    /// Records a transition from `from` to `to`.
    pub fn record(&mut self, from: u16, to: u16) {
        if self.capacity == 0 || (from >= self.filter_start && to >= self.filter_start) {
            return;
        }

        if let Some(newest) = self.newest_index() {
            let entry = &mut self.entries[newest];
            if entry.from == from && entry.to == to {
                entry.count = entry.count.saturating_add(1);
                return;
            }
        }

        let entry = TraceEntry { from, to, count: 1 };
        if self.entries.len() < self.capacity {
            self.entries.push(entry);
        } else {
            self.entries[self.next] = entry;
        }
        self.next = (self.next + 1) % self.capacity;
    }

    fn newest_index(&self) -> Option<usize> {
        let len = self.entries.len();
        if len == 0 {
            None
        } else {
            Some((self.next + len - 1) % len)
        }
    }

    /// Most recent entry, if any.
    pub fn last(&self) -> Option<&TraceEntry> {
        self.newest_index().map(|i| &self.entries[i])
    }

    /// Iterates entries from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &TraceEntry> + '_ {
        let len = self.entries.len();
        (0..len).map(move |i| {
            let idx = (self.next + len - 1 - i) % len;
            &self.entries[idx]
        })
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.next = 0;
    }
}

/// Newest first, four entries per line: `$FROM->$TO` with `x<count>` when
/// the transition repeated.
impl fmt::Display for ControlFlowTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "PC ring buffer (last {} explicit PC changes, newest first):",
            self.capacity
        )?;

        if self.is_empty() {
            return writeln!(f, "  (empty)");
        }

        for (i, entry) in self.iter().enumerate() {
            if i % 4 == 0 {
                if i > 0 {
                    writeln!(f)?;
                }
                write!(f, "  ")?;
            } else {
                write!(f, " ")?;
            }
            write!(f, "${:04X}->${:04X}", entry.from, entry.to)?;
            if entry.count > 1 {
                write!(f, "x{}", entry.count)?;
            }
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_transitions_take_slots() {
        let mut trace = ControlFlowTrace::new(8, 0xF800);
        trace.record(0x2000, 0x3000);
        trace.record(0x3005, 0x2003);

        let entries: Vec<_> = trace.iter().copied().collect();
        assert_eq!(
            entries,
            vec![
                TraceEntry { from: 0x3005, to: 0x2003, count: 1 },
                TraceEntry { from: 0x2000, to: 0x3000, count: 1 },
            ]
        );
    }

    #[test]
    fn test_compression_only_against_newest() {
        let mut trace = ControlFlowTrace::new(8, 0xF800);
        trace.record(0x1000, 0x2000);
        trace.record(0x2000, 0x1000);
        trace.record(0x1000, 0x2000);

        assert_eq!(trace.len(), 3);
    }

    #[test]
    fn test_rom_filter_needs_both_endpoints() {
        let mut trace = ControlFlowTrace::new(8, 0xF800);
        trace.record(0xFC00, 0xFD00);
        assert!(trace.is_empty());

        trace.record(0xFC00, 0x0800);
        trace.record(0x0800, 0xFDED);
        assert_eq!(trace.len(), 2);
    }

    #[test]
    fn test_huge_capacity_allocates_lazily() {
        let mut trace = ControlFlowTrace::new(usize::MAX, 0xF800);
        for i in 0..4u16 {
            trace.record(i, i + 0x100);
        }

        assert_eq!(trace.capacity(), usize::MAX);
        assert_eq!(trace.len(), 4);
        let froms: Vec<u16> = trace.iter().map(|e| e.from).collect();
        assert_eq!(froms, vec![3, 2, 1, 0]);
        assert_eq!(trace.last().map(|e| e.from), Some(3));
    }

    #[test]
    fn test_wraps_and_overwrites_oldest() {
        let mut trace = ControlFlowTrace::new(3, 0xF800);
        for i in 0..5u16 {
            trace.record(i, i + 0x100);
        }

        let froms: Vec<u16> = trace.iter().map(|e| e.from).collect();
        assert_eq!(froms, vec![4, 3, 2]);
        assert_eq!(trace.last().map(|e| e.to), Some(0x104));
    }

    #[test]
    fn test_compression_after_wrap() {
        let mut trace = ControlFlowTrace::new(2, 0xF800);
        trace.record(0x10, 0x20);
        trace.record(0x30, 0x40);
        trace.record(0x50, 0x60);
        trace.record(0x50, 0x60);

        assert_eq!(trace.len(), 2);
        assert_eq!(trace.last().map(|e| e.count), Some(2));
    }

    #[test]
    fn test_zero_capacity_records_nothing() {
        let mut trace = ControlFlowTrace::new(0, 0xF800);
        trace.record(0x1000, 0x2000);
        assert!(trace.is_empty());
        assert!(trace.last().is_none());
    }

    #[test]
    fn test_display_format() {
        let mut trace = ControlFlowTrace::new(10, 0xF800);
        for i in 0..5u16 {
            trace.record(0x2000 + i, 0x3000);
        }
        trace.record(0x2004, 0x3000);

        let text = trace.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "  $2004->$3000x2 $2003->$3000 $2002->$3000 $2001->$3000"
        );
        assert_eq!(lines[2], "  $2000->$3000");
    }

    #[test]
    fn test_display_empty() {
        let trace = ControlFlowTrace::new(100, 0xF800);
        assert!(trace.to_string().ends_with("  (empty)\n"));
    }
}
