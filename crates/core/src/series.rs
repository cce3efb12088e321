use std::collections::VecDeque;

/// Fixed-capacity rolling history of samples for one metric.
///
/// A new series starts full of zeros so charts draw a full-width baseline
/// from the first frame. Its length is always exactly `capacity`.
#[derive(Debug, Clone)]
pub struct Series {
    samples:  VecDeque<f64>,
    capacity: usize,
}

impl Series {
    /// Create a zero-filled series holding `capacity` samples.
    ///
    /// A capacity of zero is bumped to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::from(vec![0.0; capacity]),
            capacity,
        }
    }

    /// Push a new sample, evicting the oldest.
    pub fn push(&mut self, value: f64) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }

    /// Copy of the window, oldest first.
    pub fn snapshot(&self) -> Vec<f64> {
        self.samples.iter().copied().collect()
    }

    /// Most recent sample.
    pub fn latest(&self) -> f64 {
        self.samples.back().copied().unwrap_or_default()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Per-core CPU utilisation: one slot per logical core, overwritten each tick.
#[derive(Debug, Clone, PartialEq)]
pub struct CoreLoads {
    loads: Vec<f64>,
}

impl CoreLoads {
    pub fn new(core_count: usize) -> Self {
        Self { loads: vec![0.0; core_count] }
    }

    /// Overwrite every slot from `readings`, ordered by core index.
    ///
    /// The length never changes: missing cores read as zero and surplus
    /// readings are dropped.
    pub fn overwrite<I>(&mut self, readings: I)
    where
        I: IntoIterator<Item = f64>,
    {
        let mut readings = readings.into_iter();
        for slot in &mut self.loads {
            *slot = readings.next().unwrap_or(0.0);
        }
    }

    /// Zero every slot (used when the adapter has no reading this tick).
    pub fn clear(&mut self) {
        self.loads.fill(0.0);
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.loads
    }

    #[inline]
    pub fn core_count(&self) -> usize {
        self.loads.len()
    }
}
