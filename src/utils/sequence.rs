use log::debug;

use crate::errors::ExerciseError;

/// Value that terminates a stream of reads.
pub const SENTINEL: i64 = 0;

pub fn is_sorted<T: Ord>(seq: &[T]) -> bool {
    seq.windows(2).all(|w| w[0] <= w[1])
}

/// Merge two ascending sequences. On equal heads the element of `a` is
/// emitted first. Unsorted input yields unspecified (but complete) output.
pub fn merge<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);

    while i < a.len() || j < b.len() {
        if i == a.len() {
            out.push(b[j].clone());
            j += 1;
        } else if j == b.len() {
            out.push(a[i].clone());
            i += 1;
        } else if a[i] <= b[j] {
            out.push(a[i].clone());
            i += 1;
        } else {
            out.push(b[j].clone());
            j += 1;
        }
    }
    out
}

/// [`merge`] after verifying both inputs are ascending.
pub fn merge_checked<T: Ord + Clone>(a: &[T], b: &[T]) -> Result<Vec<T>, ExerciseError> {
    for (name, seq) in [("first", a), ("second", b)] {
        if !is_sorted(seq) {
            debug!("rejecting merge: {} sequence is not ascending", name);
            return Err(ExerciseError::invalid(format!(
                "{} sequence is not sorted ascending",
                name
            )));
        }
    }
    Ok(merge(a, b))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtremaReport {
    pub max: Option<i64>,
    /// `None` when fewer than two values were read before the sentinel.
    pub second_max: Option<i64>,
    /// Number of reads including the sentinel.
    pub count: usize,
}

/// Streaming max / second max over reads terminated by [`SENTINEL`].
///
/// Two reads of the same value count as separate observations, so
/// `[9, 9, 0]` reports 9 for both.
#[derive(Debug, Clone, Default)]
pub struct RunningExtrema {
    max: Option<i64>,
    second_max: Option<i64>,
    count: usize,
    finished: bool,
}

impl RunningExtrema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one read. Returns `true` once the sentinel has been seen;
    /// later reads are ignored.
    pub fn push(&mut self, value: i64) -> bool {
        if self.finished {
            return true;
        }
        self.count += 1;
        if value == SENTINEL {
            self.finished = true;
            return true;
        }

        match self.max {
            Some(max) if value <= max => {
                if self.second_max.map_or(true, |second| value > second) {
                    self.second_max = Some(value);
                }
            }
            _ => {
                self.second_max = self.max;
                self.max = Some(value);
            }
        }
        false
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn report(&self) -> Option<ExtremaReport> {
        self.finished.then_some(ExtremaReport {
            max: self.max,
            second_max: self.second_max,
            count: self.count,
        })
    }
}

/// Feed a bounded stream until the sentinel.
pub fn track<I>(values: I) -> Result<ExtremaReport, ExerciseError>
where
    I: IntoIterator<Item = i64>,
{
    let mut tracker = RunningExtrema::new();
    for v in values {
        if tracker.push(v) {
            break;
        }
    }
    tracker.report().ok_or_else(|| {
        ExerciseError::invalid(format!(
            "stream ended after {} reads without sentinel {}",
            tracker.count(),
            SENTINEL
        ))
    })
}
