//! Job sequencing with deadlines.
//!
//! Equations:
//!   slots = min(max deadline, |jobs|), slot s covers time (s, s + 1]
//!   consider jobs by profit descending (stable)
//!   place a job in the latest free slot s < deadline, else reject it

use serde::{Deserialize, Serialize};

use crate::error::{add_total, StepResult};
use crate::trace::{Outcome, Trace};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub deadline: usize,
    pub profit: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JobAction {
    Sorted { order: Vec<usize> },
    Schedule { job: usize, slot: usize },
    Reject { job: usize },
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStep {
    pub action: JobAction,
    /// Job index occupying each slot.
    pub slots: Vec<Option<usize>>,
    pub profit: i64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSchedule {
    /// Job id per slot, `None` for idle slots.
    pub slots: Vec<Option<String>>,
    /// Ids in the order they were accepted.
    pub scheduled: Vec<String>,
    pub total_profit: i64,
}

/// Fails only when the accepted profits overflow i64.
pub fn job_sequencing(jobs: &[Job]) -> StepResult<Outcome<JobStep, JobSchedule>> {
    let horizon = jobs.iter().map(|j| j.deadline).max().unwrap_or(0).min(jobs.len());
    tracing::debug!(jobs = jobs.len(), horizon, "job sequencing");

    let mut order: Vec<usize> = (0..jobs.len()).collect();
    order.sort_by(|&a, &b| jobs[b].profit.cmp(&jobs[a].profit));

    let mut slots: Vec<Option<usize>> = vec![None; horizon];
    let mut profit = 0i64;
    let mut scheduled = Vec::new();
    let mut steps = Trace::new();
    steps.push(JobStep {
        action: JobAction::Sorted { order: order.clone() },
        slots: slots.clone(),
        profit,
        description: "Sort jobs by profit, highest first".to_string(),
    });

    for i in order {
        let job = &jobs[i];
        let latest = job.deadline.min(horizon);
        match (0..latest).rev().find(|&s| slots[s].is_none()) {
            Some(slot) => {
                slots[slot] = Some(i);
                profit = add_total("job sequencing", profit, job.profit)?;
                scheduled.push(job.id.clone());
                steps.push(JobStep {
                    action: JobAction::Schedule { job: i, slot },
                    slots: slots.clone(),
                    profit,
                    description: format!("Job {} takes slot {}", job.id, slot + 1),
                });
            }
            None => {
                steps.push(JobStep {
                    action: JobAction::Reject { job: i },
                    slots: slots.clone(),
                    profit,
                    description: format!("No free slot before deadline {} for job {}", job.deadline, job.id),
                });
            }
        }
    }

    steps.push(JobStep {
        action: JobAction::Done,
        slots: slots.clone(),
        profit,
        description: format!("Total profit {profit}"),
    });
    let slots = slots.into_iter().map(|s| s.map(|i| jobs[i].id.clone())).collect();
    Ok(Outcome::new(steps, JobSchedule { slots, scheduled, total_profit: profit }))
}
