//! Round-robin scheduling: every competitor meets every other exactly once.
//!
//! Two orderings are offered:
//! - [`circle_rounds`] groups pairings into simultaneous rounds (multi-court play).
//! - [`greedy_spacing`] orders pairings for a single court, spacing out repeat appearances.
//!
//! Both are pure and deterministic for a given input order. Competitors are expected to be
//! distinct; fewer than two competitors give an empty schedule (size checks live in assembly).

use crate::models::ScheduleMode;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Last-played step assumed for a competitor that has not been scheduled yet.
const UNSEEN_STEP: i64 = -10;

/// One scheduled contest between two competitors.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pairing<C> {
    pub a: C,
    pub b: C,
    /// Play sequence, starting at 1.
    pub order: u32,
    /// Round number (from 1) for circle-method schedules; None for greedy order.
    pub round: Option<u32>,
}

impl<C: PartialEq> Pairing<C> {
    pub fn involves(&self, competitor: &C) -> bool {
        self.a == *competitor || self.b == *competitor
    }
}

/// Number of pairings in a full round robin of `n` competitors.
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Number of circle-method rounds for `n` competitors (odd counts get a bye slot).
pub fn round_count(n: usize) -> usize {
    if n < 2 {
        return 0;
    }
    n + n % 2 - 1
}

/// Order pairings with the algorithm selected by `mode`.
pub fn schedule<C: Clone>(competitors: &[C], mode: ScheduleMode) -> Vec<Pairing<C>> {
    match mode {
        ScheduleMode::Greedy => greedy_spacing(competitors),
        ScheduleMode::Rounds => circle_rounds(competitors),
    }
}

/// Circle method.
///
/// Odd counts get a bye slot appended. For `n` slots there are `n - 1` rounds; in each round
/// slot `i` meets slot `n - 1 - i`, and pairs involving the bye are skipped. Between rounds
/// every slot except the first rotates one step to the right. Output is round-major.
pub fn circle_rounds<C: Clone>(competitors: &[C]) -> Vec<Pairing<C>> {
    if competitors.len() < 2 {
        return Vec::new();
    }
    let mut slots: Vec<Option<C>> = competitors.iter().cloned().map(Some).collect();
    if slots.len() % 2 != 0 {
        slots.push(None);
    }
    let n = slots.len();
    let mut pairings = Vec::with_capacity(pair_count(competitors.len()));

    for round in 1..n as u32 {
        for i in 0..n / 2 {
            if let (Some(a), Some(b)) = (&slots[i], &slots[n - 1 - i]) {
                let order = pairings.len() as u32 + 1;
                pairings.push(Pairing {
                    a: a.clone(),
                    b: b.clone(),
                    order,
                    round: Some(round),
                });
            }
        }
        slots[1..].rotate_right(1);
    }
    pairings
}

/// Greedy single-court order.
///
/// Starts from all pairs in input order. At each step the pool is stably sorted by the
/// descending sum of both competitors' rest (`step - last_step`), and the first pair is played.
/// The pool keeps the sorted order between steps, so ties fall to whichever pair sorted first.
/// This is a local heuristic, not an optimal spacing.
pub fn greedy_spacing<C: Clone>(competitors: &[C]) -> Vec<Pairing<C>> {
    let n = competitors.len();
    if n < 2 {
        return Vec::new();
    }
    let mut pool: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
        .collect();
    let mut last_step = vec![UNSEEN_STEP; n];
    let mut pairings = Vec::with_capacity(pool.len());
    let mut step: i64 = 0;

    while !pool.is_empty() {
        pool.sort_by_key(|&(x, y)| Reverse((step - last_step[x]) + (step - last_step[y])));
        let (x, y) = pool.remove(0);
        pairings.push(Pairing {
            a: competitors[x].clone(),
            b: competitors[y].clone(),
            order: step as u32 + 1,
            round: None,
        });
        last_step[x] = step;
        last_step[y] = step;
        step += 1;
    }
    pairings
}
