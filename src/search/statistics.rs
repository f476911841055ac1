use std::time::Instant;
use tracing::info;

/// Counters for one search query, logged through `tracing` periodically while
/// the search runs and once when it finishes.
#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    expanded_nodes: i32,
    /// Number of heuristic evaluations
    evaluated_nodes: i32,
    /// Number of unique nodes generated
    generated_nodes: i32,
    /// Number of open nodes redirected through a cheaper route
    reopened_nodes: i32,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl SearchStatistics {
    pub(crate) fn new() -> Self {
        Self {
            expanded_nodes: 0,
            evaluated_nodes: 0,
            generated_nodes: 0,
            reopened_nodes: 0,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub(crate) fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub(crate) fn increment_evaluated_nodes(&mut self) {
        self.evaluated_nodes += 1;
        self.log_if_needed();
    }

    pub(crate) fn increment_generated_nodes(&mut self) {
        self.generated_nodes += 1;
        self.log_if_needed();
    }

    pub(crate) fn increment_reopened_nodes(&mut self) {
        self.reopened_nodes += 1;
        self.log_if_needed();
    }

    pub fn expanded_nodes(&self) -> i32 {
        self.expanded_nodes
    }

    pub fn evaluated_nodes(&self) -> i32 {
        self.evaluated_nodes
    }

    pub fn generated_nodes(&self) -> i32 {
        self.generated_nodes
    }

    pub fn reopened_nodes(&self) -> i32 {
        self.reopened_nodes
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.log();
        }
    }

    pub fn log(&mut self) {
        self.last_log_time = Instant::now();
        info!(
            expanded_nodes = self.expanded_nodes,
            evaluated_nodes = self.evaluated_nodes,
            generated_nodes = self.generated_nodes,
            reopened_nodes = self.reopened_nodes,
        );
    }

    pub(crate) fn finalise_search(&mut self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            evaluated_nodes = self.evaluated_nodes,
            generated_nodes = self.generated_nodes,
            reopened_nodes = self.reopened_nodes,
            search_duration = self.search_start_time.elapsed().as_secs_f64(),
            "search finished"
        );
    }
}
