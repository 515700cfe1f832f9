//! Frame timing statistics.

use std::fmt;
use std::time::Duration;

use hdrhistogram::Histogram;

/// Histogram of per-frame render times in milliseconds.
pub struct FrameTimes {
    hist: Histogram<u64>,
}

impl FrameTimes {
    pub fn new() -> Result<FrameTimes, failure::Error> {
        // one hour per frame is far beyond anything this renderer does
        let hist = Histogram::new_with_bounds(1, 3_600_000, 3)?;
        Ok(FrameTimes { hist })
    }

    pub fn record(&mut self, elapsed: Duration) {
        let ms = elapsed.as_millis().min(u128::from(u64::MAX)) as u64;
        self.hist.saturating_record(ms.max(1));
    }

    pub fn count(&self) -> u64 {
        self.hist.len()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            count: self.hist.len(),
            mean: self.hist.mean(),
            p50: self.hist.value_at_quantile(0.5),
            p90: self.hist.value_at_quantile(0.9),
            max: self.hist.max(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Summary {
    pub count: u64,
    pub mean: f64,
    pub p50: u64,
    pub p90: u64,
    pub max: u64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "frames={} mean={:.1}ms p50={}ms p90={}ms max={}ms",
            self.count, self.mean, self.p50, self.p90, self.max
        )
    }
}
