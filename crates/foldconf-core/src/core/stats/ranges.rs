use std::fmt;

/// A contiguous run of residue indices, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: isize,
    pub end: isize,
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Ordered list of compressed runs built from a set of residue indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeList {
    ranges: Vec<Range>,
}

impl RangeList {
    /// Sorts the indices and greedily merges runs where each value is the previous plus one.
    ///
    /// A repeated index extends the current run instead of breaking it.
    pub fn compress(indices: impl IntoIterator<Item = isize>) -> Self {
        let mut sorted: Vec<isize> = indices.into_iter().collect();
        sorted.sort_unstable();

        let mut ranges: Vec<Range> = Vec::new();
        for index in sorted {
            match ranges.last_mut() {
                Some(run) if index == run.end || index == run.end + 1 => run.end = index,
                _ => ranges.push(Range {
                    start: index,
                    end: index,
                }),
            }
        }
        Self { ranges }
    }

    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Rendered runs, e.g. `["5-7", "10", "12-14"]`.
    pub fn labels(&self) -> Vec<String> {
        self.ranges.iter().map(Range::to_string).collect()
    }

    /// Expands back into the sorted, de-duplicated index set.
    pub fn expand(&self) -> Vec<isize> {
        self.ranges.iter().flat_map(|r| r.start..=r.end).collect()
    }

    /// Renders at most `limit` runs joined by `", "`, plus the number of runs left out.
    pub fn render_truncated(&self, limit: usize) -> (String, usize) {
        let shown = self
            .ranges
            .iter()
            .take(limit)
            .map(Range::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        (shown, self.ranges.len().saturating_sub(limit))
    }
}

impl fmt::Display for RangeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (shown, _) = self.render_truncated(usize::MAX);
        write!(f, "{}", shown)
    }
}
