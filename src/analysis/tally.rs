use std::collections::BTreeMap;

use crate::journal::TradeRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: usize,
    pub losses: usize,
}

impl Tally {
    pub fn record(&mut self, win: bool) {
        if win {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.wins + self.losses
    }

    /// Percentage 0-100. `None` for an empty tally.
    pub fn win_rate(&self) -> Option<f64> {
        pct(self.wins, self.total())
    }

    pub fn loss_rate(&self) -> Option<f64> {
        pct(self.losses, self.total())
    }
}

/// Outcome of directional calls for one bias.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PredictionTally {
    pub correct: usize,
    pub incorrect: usize,
    pub partial: usize,
}

impl PredictionTally {
    pub fn total(&self) -> usize {
        self.correct + self.incorrect + self.partial
    }

    pub fn accuracy(&self) -> Option<f64> {
        pct(self.correct, self.total())
    }
}

pub fn pct(part: usize, total: usize) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some((part * 100) as f64 / total as f64)
    }
}

/// Win/loss tally per category. Records whose key is `None` are skipped.
pub fn tally_by<K, F>(records: &[TradeRecord], key: F) -> BTreeMap<K, Tally>
where
    K: Ord,
    F: Fn(&TradeRecord) -> Option<K>,
{
    let mut buckets: BTreeMap<K, Tally> = BTreeMap::new();
    for r in records {
        if let Some(k) = key(r) {
            buckets.entry(k).or_default().record(r.is_win());
        }
    }
    buckets
}

/// A bucket that cleared the sample floor, with the metric it was judged on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Worst<K, T> {
    pub key: K,
    pub tally: T,
    pub metric: f64,
}

/// Which end of the metric counts as worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Worse {
    Lower,
    Higher,
}

/// Pick the worst bucket with at least `min_sample` trades. Equal metrics
/// prefer the larger bucket, then the earlier key.
pub fn worst_bucket<K, T, S, M>(
    buckets: &BTreeMap<K, T>,
    min_sample: usize,
    size: S,
    metric: M,
    worse: Worse,
) -> Option<Worst<K, T>>
where
    K: Copy + Ord,
    T: Copy,
    S: Fn(&T) -> usize,
    M: Fn(&T) -> Option<f64>,
{
    let mut best: Option<Worst<K, T>> = None;
    for (key, tally) in buckets {
        let n = size(tally);
        if n < min_sample.max(1) {
            continue;
        }
        let Some(value) = metric(tally) else {
            continue;
        };
        let replace = match &best {
            None => true,
            Some(current) => {
                let strictly_worse = match worse {
                    Worse::Lower => value < current.metric,
                    Worse::Higher => value > current.metric,
                };
                strictly_worse || (value == current.metric && n > size(&current.tally))
            }
        };
        if replace {
            best = Some(Worst {
                key: *key,
                tally: *tally,
                metric: value,
            });
        }
    }
    best
}

/// Round a 0-100 percentage into a severity score.
pub fn severity(pct: f64) -> u8 {
    pct.round().clamp(0.0, 100.0) as u8
}
