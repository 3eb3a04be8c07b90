//! Simulation report generation.

use super::runner::RunStats;
use std::collections::BTreeMap;

/// Score bucket width for the distribution table.
const BUCKET: u32 = 100;

/// Aggregated results from a batch of runs.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_timed_out: u32,
    pub max_ticks: u64,

    pub avg_score: f64,
    pub median_score: u32,
    pub best_score: u32,
    pub worst_score: u32,
    pub avg_ticks: f64,
    pub avg_obstacles_cleared: f64,
    pub avg_final_speed: f64,
    /// Runs that reached the speed cap.
    pub runs_capped: u32,
    /// Runs that lived long enough to see flyers.
    pub runs_with_flyers: u32,

    /// Runs per score bucket, keyed by the bucket's lower bound
    pub score_distribution: BTreeMap<u32, u32>,

    pub run_stats: Vec<RunStats>,
}

fn average(runs: &[RunStats], f: impl Fn(&RunStats) -> f64) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(f).sum::<f64>() / runs.len() as f64
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>, max_ticks: u64, speed_cap: f64) -> Self {
        let num_runs = runs.len() as u32;
        let runs_timed_out = runs.iter().filter(|r| r.timed_out).count() as u32;

        let mut scores: Vec<u32> = runs.iter().map(|r| r.score).collect();
        scores.sort_unstable();
        let median_score = scores.get(scores.len() / 2).copied().unwrap_or(0);
        let best_score = scores.last().copied().unwrap_or(0);
        let worst_score = scores.first().copied().unwrap_or(0);

        let runs_capped = runs.iter().filter(|r| r.final_speed >= speed_cap).count() as u32;

        let mut score_distribution = BTreeMap::new();
        for score in &scores {
            *score_distribution.entry(score / BUCKET * BUCKET).or_insert(0) += 1;
        }

        Self {
            num_runs,
            runs_timed_out,
            max_ticks,
            avg_score: average(&runs, |r| r.score as f64),
            median_score,
            best_score,
            worst_score,
            avg_ticks: average(&runs, |r| r.ticks as f64),
            avg_obstacles_cleared: average(&runs, |r| r.obstacles_cleared as f64),
            avg_final_speed: average(&runs, |r| r.final_speed),
            runs_capped,
            runs_with_flyers: runs.iter().filter(|r| r.flyers_spawned > 0).count() as u32,
            score_distribution,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} timed out at {} ticks\n\n",
            self.num_runs, self.runs_timed_out, self.max_ticks
        ));

        report.push_str("── SCORE ────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Score:          {:.1}\n", self.avg_score));
        report.push_str(&format!("  Median Score:       {}\n", self.median_score));
        report.push_str(&format!(
            "  Best / Worst:       {} / {}\n",
            self.best_score, self.worst_score
        ));
        report.push_str(&format!(
            "  Avg Obstacles:      {:.1}\n\n",
            self.avg_obstacles_cleared
        ));

        report.push_str("── PACE ─────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Ticks Alive:    {:.0}\n", self.avg_ticks));
        report.push_str(&format!("  Avg Final Speed:    {:.2}\n", self.avg_final_speed));
        report.push_str(&format!(
            "  Saw Flyers:         {} of {}\n",
            self.runs_with_flyers, self.num_runs
        ));
        report.push_str(&format!(
            "  Hit Speed Cap:      {} of {}\n\n",
            self.runs_capped, self.num_runs
        ));

        report.push_str("── DISTRIBUTION ─────────────────────────────────────────────────\n");
        for (bucket, count) in &self.score_distribution {
            let pct = *count as f64 / self.num_runs.max(1) as f64 * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!(
                "  {:>5}-{:<5} {:>5.1}% {}\n",
                bucket,
                bucket + BUCKET - 1,
                pct,
                bar
            ));
        }

        report
    }

    /// Single line for `--quiet`.
    pub fn summary_line(&self) -> String {
        format!(
            "runs={} avg={:.1} median={} best={} avg_ticks={:.0} timed_out={}",
            self.num_runs,
            self.avg_score,
            self.median_score,
            self.best_score,
            self.avg_ticks,
            self.runs_timed_out
        )
    }
}
