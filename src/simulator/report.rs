//! Simulation report generation.

use std::collections::HashMap;

use super::config::SimConfig;
use super::runner::RunStats;

const SECS_PER_DAY: f64 = 86_400.0;

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_completed: u32,
    pub runs_timed_out: u32,
    pub target_story: u32,

    // Aggregated stats
    pub avg_days_to_finish: f64,
    pub avg_final_story: f64,
    pub avg_highest_level: f64,
    pub avg_roster_size: f64,
    pub avg_job_xp: f64,
    pub avg_job_coin: f64,
    pub avg_final_coin: f64,
    pub avg_loot_drops: f64,
    pub avg_quests_won: f64,
    pub avg_quests_lost: f64,
    /// Defeats as a share of all quest resolutions.
    pub quest_failure_rate: f64,

    // Distribution data
    pub story_distribution: HashMap<u32, u32>,
    /// Runs that completed at least step i+1.
    pub story_reached: Vec<u32>,
    /// Average simulated day on which step i+1 landed, over the runs
    /// that got there.
    pub avg_story_days: Vec<f64>,

    // Individual run stats for detailed analysis
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, config: &SimConfig) -> Self {
        let num_runs = runs.len() as u32;
        let denom = num_runs.max(1) as f64;
        let runs_completed = runs.iter().filter(|r| r.reached_target).count() as u32;
        let runs_timed_out = num_runs - runs_completed;

        let avg_days_to_finish = runs
            .iter()
            .filter(|r| r.reached_target)
            .map(|r| r.sim_secs as f64 / SECS_PER_DAY)
            .sum::<f64>()
            / runs_completed.max(1) as f64;
        let avg_final_story =
            runs.iter().map(|r| r.final_story as f64).sum::<f64>() / denom;
        let avg_highest_level =
            runs.iter().map(|r| r.highest_level as f64).sum::<f64>() / denom;
        let avg_roster_size =
            runs.iter().map(|r| r.final_roster as f64).sum::<f64>() / denom;
        let avg_job_xp = runs.iter().map(|r| r.job_xp as f64).sum::<f64>() / denom;
        let avg_job_coin = runs.iter().map(|r| r.job_coin as f64).sum::<f64>() / denom;
        let avg_final_coin = runs.iter().map(|r| r.final_coin as f64).sum::<f64>() / denom;
        let avg_loot_drops = runs.iter().map(|r| r.loot_drops as f64).sum::<f64>() / denom;
        let avg_quests_won = runs.iter().map(|r| r.quests_won as f64).sum::<f64>() / denom;
        let avg_quests_lost = runs.iter().map(|r| r.quests_lost as f64).sum::<f64>() / denom;

        let resolutions: u64 = runs
            .iter()
            .map(|r| r.quests_won as u64 + r.quests_lost as u64)
            .sum();
        let defeats: u64 = runs.iter().map(|r| r.quests_lost as u64).sum();
        let quest_failure_rate = if resolutions > 0 {
            defeats as f64 / resolutions as f64
        } else {
            0.0
        };

        let mut story_distribution = HashMap::new();
        for run in &runs {
            *story_distribution.entry(run.final_story).or_insert(0) += 1;
        }

        let steps = config.target_story as usize;
        let mut story_reached = vec![0u32; steps];
        let mut avg_story_days = vec![0.0f64; steps];
        for step in 0..steps {
            let mut total_days = 0.0;
            let mut count = 0u32;
            for run in &runs {
                if let Some(secs) = run.story_secs.get(step) {
                    total_days += *secs as f64 / SECS_PER_DAY;
                    count += 1;
                }
            }
            story_reached[step] = count;
            if count > 0 {
                avg_story_days[step] = total_days / count as f64;
            }
        }

        Self {
            num_runs,
            runs_completed,
            runs_timed_out,
            target_story: config.target_story,
            avg_days_to_finish,
            avg_final_story,
            avg_highest_level,
            avg_roster_size,
            avg_job_xp,
            avg_job_coin,
            avg_final_coin,
            avg_loot_drops,
            avg_quests_won,
            avg_quests_lost,
            quest_failure_rate,
            story_distribution,
            story_reached,
            avg_story_days,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                 GUILDHALL BALANCE REPORT\n");
        report.push_str("            (greedy manager over the live engine)\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} finished the story, {} ran out of days\n\n",
            self.num_runs, self.runs_completed, self.runs_timed_out
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        if self.runs_completed > 0 {
            report.push_str(&format!(
                "  Avg Days to Finish:  {:.1}\n",
                self.avg_days_to_finish
            ));
        }
        report.push_str(&format!(
            "  Avg Story Steps:     {:.1} / {}\n",
            self.avg_final_story, self.target_story
        ));
        report.push_str(&format!(
            "  Avg Highest Level:   {:.1}\n",
            self.avg_highest_level
        ));
        report.push_str(&format!(
            "  Avg Roster Size:     {:.1}\n\n",
            self.avg_roster_size
        ));

        report.push_str("── ECONOMY ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Job XP:          {:.0}\n", self.avg_job_xp));
        report.push_str(&format!("  Avg Job Coin:        {:.0}\n", self.avg_job_coin));
        report.push_str(&format!(
            "  Avg Final Purse:     {:.0}\n",
            self.avg_final_coin
        ));
        report.push_str(&format!(
            "  Avg Loot Drops:      {:.0}\n\n",
            self.avg_loot_drops
        ));

        report.push_str("── QUESTS ───────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Won / Lost:      {:.1} / {:.1}\n",
            self.avg_quests_won, self.avg_quests_lost
        ));
        report.push_str(&format!(
            "  Failure Rate:        {:.1}%\n\n",
            self.quest_failure_rate * 100.0
        ));

        report.push_str("── STORY PACING ─────────────────────────────────────────────────\n");
        for step in 0..self.target_story as usize {
            let reached = self.story_reached.get(step).copied().unwrap_or(0);
            let pct = (reached as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar_len = (pct / 5.0) as usize;
            let bar: String = "█".repeat(bar_len);
            if reached > 0 {
                report.push_str(&format!(
                    "  Step {:2}: {:>5.1}% by day {:>5.2} {}\n",
                    step + 1,
                    pct,
                    self.avg_story_days[step],
                    bar
                ));
            } else {
                report.push_str(&format!("  Step {:2}: {:>5.1}% {}\n", step + 1, pct, bar));
            }
        }
        report.push('\n');

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let completion_rate = (self.runs_completed as f64 / self.num_runs.max(1) as f64) * 100.0;
        let pacing = if self.runs_completed == 0 {
            "UNFINISHED - No run cleared the story in the day budget"
        } else if self.avg_days_to_finish < 2.0 {
            "TOO FAST - The story is over before the idle loop matters"
        } else if self.avg_days_to_finish < 10.0 {
            "GOOD - A story arc over days of casual checking"
        } else {
            "GRINDY - Late steps demand long unattended stretches"
        };

        report.push_str(&format!("  Completion Rate: {:.1}%\n", completion_rate));
        report.push_str(&format!("  Pacing:          {}\n", pacing));

        if self.quest_failure_rate > 0.5 {
            report.push_str("  ⚠️  Parties wipe more often than they win - encounter tuning?\n");
        }
        if self.avg_final_story < 1.0 {
            report.push_str("  ⚠️  Most runs never clear the first quest - opening too hard?\n");
        }
        if self.avg_loot_drops < 1.0 {
            report.push_str("  ⚠️  Loot almost never drops - table chances too low?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// Scalar fields only; per-run detail stays in memory.
impl serde::Serialize for SimReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SimReport", 16)?;
        state.serialize_field("num_runs", &self.num_runs)?;
        state.serialize_field("runs_completed", &self.runs_completed)?;
        state.serialize_field("runs_timed_out", &self.runs_timed_out)?;
        state.serialize_field("target_story", &self.target_story)?;
        state.serialize_field("avg_days_to_finish", &self.avg_days_to_finish)?;
        state.serialize_field("avg_final_story", &self.avg_final_story)?;
        state.serialize_field("avg_highest_level", &self.avg_highest_level)?;
        state.serialize_field("avg_roster_size", &self.avg_roster_size)?;
        state.serialize_field("avg_job_xp", &self.avg_job_xp)?;
        state.serialize_field("avg_job_coin", &self.avg_job_coin)?;
        state.serialize_field("avg_final_coin", &self.avg_final_coin)?;
        state.serialize_field("avg_loot_drops", &self.avg_loot_drops)?;
        state.serialize_field("quest_failure_rate", &self.quest_failure_rate)?;
        state.serialize_field("avg_story_days", &self.avg_story_days)?;
        state.serialize_field("story_reached", &self.story_reached)?;
        state.serialize_field(
            "completion_rate",
            &((self.runs_completed as f64 / self.num_runs.max(1) as f64) * 100.0),
        )?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(final_story: u32, sim_secs: u64, reached: bool, won: u32, lost: u32) -> RunStats {
        RunStats {
            final_story,
            final_roster: 4,
            highest_level: 6,
            final_coin: 300,
            job_xp: 10_000,
            job_coin: 2_500,
            loot_drops: 40,
            quests_won: won,
            quests_lost: lost,
            sim_secs,
            reached_target: reached,
            story_secs: (1..=final_story as u64).map(|i| i * 3_600).collect(),
        }
    }

    #[test]
    fn test_report_aggregates() {
        let config = SimConfig {
            target_story: 2,
            ..Default::default()
        };
        let runs = vec![
            run(2, 7_200, true, 2, 1),
            run(1, 86_400, false, 1, 3),
        ];

        let report = SimReport::from_runs(runs, &config);

        assert_eq!(report.num_runs, 2);
        assert_eq!(report.runs_completed, 1);
        assert_eq!(report.runs_timed_out, 1);
        // Only the finished run counts toward the finish time.
        assert!((report.avg_days_to_finish - 7_200.0 / 86_400.0).abs() < 1e-9);
        assert!((report.avg_final_story - 1.5).abs() < 1e-9);
        // 4 defeats out of 7 resolutions.
        assert!((report.quest_failure_rate - 4.0 / 7.0).abs() < 1e-9);
        // Both runs saw step 1; only one saw step 2.
        assert_eq!(report.story_reached, vec![2, 1]);
    }

    #[test]
    fn test_text_report_has_sections() {
        let config = SimConfig {
            target_story: 1,
            ..Default::default()
        };
        let report = SimReport::from_runs(vec![run(1, 3_600, true, 1, 0)], &config);
        let text = report.to_text();

        assert!(text.contains("PROGRESSION"));
        assert!(text.contains("ECONOMY"));
        assert!(text.contains("STORY PACING"));
        assert!(text.contains("Completion Rate: 100.0%"));
    }

    #[test]
    fn test_json_report_parses() {
        let config = SimConfig {
            target_story: 1,
            ..Default::default()
        };
        let report = SimReport::from_runs(vec![run(1, 3_600, true, 1, 0)], &config);

        let value: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(value["num_runs"], 1);
        assert_eq!(value["completion_rate"], 100.0);
    }
}
