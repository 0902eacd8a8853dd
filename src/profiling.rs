//! Simple profiling counters for understanding evaluation.
//!
//! Counters are process-wide and relaxed; they are meant for eyeballing hot
//! paths and for tests that need to observe how often a rule ran.

use std::sync::atomic::{AtomicU64, Ordering};

pub static TAIL_FORCES: AtomicU64 = AtomicU64::new(0);
pub static RULE_CALLS: AtomicU64 = AtomicU64::new(0);
pub static CYCLE_REVISITS: AtomicU64 = AtomicU64::new(0);
pub static CYCLE_REBUILDS: AtomicU64 = AtomicU64::new(0);
pub static SORT_COMPARES: AtomicU64 = AtomicU64::new(0);
pub static SORT_RUNS: AtomicU64 = AtomicU64::new(0);

/// A deferred tail was read (cached or not).
#[inline]
pub fn tail_force() {
    TAIL_FORCES.fetch_add(1, Ordering::Relaxed);
}

/// A production rule actually ran.
#[inline]
pub fn rule_call() {
    RULE_CALLS.fetch_add(1, Ordering::Relaxed);
}

#[inline]
pub fn cycle_revisit() {
    CYCLE_REVISITS.fetch_add(1, Ordering::Relaxed);
}

#[inline]
pub fn cycle_rebuild() {
    CYCLE_REBUILDS.fetch_add(1, Ordering::Relaxed);
}

#[inline]
pub fn sort_compare() {
    SORT_COMPARES.fetch_add(1, Ordering::Relaxed);
}

#[inline]
pub fn sort_run() {
    SORT_RUNS.fetch_add(1, Ordering::Relaxed);
}

pub fn reset() {
    TAIL_FORCES.store(0, Ordering::Relaxed);
    RULE_CALLS.store(0, Ordering::Relaxed);
    CYCLE_REVISITS.store(0, Ordering::Relaxed);
    CYCLE_REBUILDS.store(0, Ordering::Relaxed);
    SORT_COMPARES.store(0, Ordering::Relaxed);
    SORT_RUNS.store(0, Ordering::Relaxed);
}

pub fn report() -> String {
    let forces = TAIL_FORCES.load(Ordering::Relaxed);
    let rules = RULE_CALLS.load(Ordering::Relaxed);
    let cached = forces.saturating_sub(rules);
    let hit_rate = if forces > 0 { cached as f64 / forces as f64 * 100.0 } else { 0.0 };

    let revisits = CYCLE_REVISITS.load(Ordering::Relaxed);
    let rebuilds = CYCLE_REBUILDS.load(Ordering::Relaxed);
    let compares = SORT_COMPARES.load(Ordering::Relaxed);
    let runs = SORT_RUNS.load(Ordering::Relaxed);

    format!(
        "Forces: {} ({} rules, {:.1}% cached), Cycle: {} revisits ({} rebuilds), Sort: {} compares over {} runs",
        forces, rules, hit_rate, revisits, rebuilds, compares, runs
    )
}
