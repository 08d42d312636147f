//! Branch and bound steppers plus the deadline scheduler that shares the page.

pub mod job_sequencing;
pub mod tsp;

pub use job_sequencing::{job_sequencing, Job, JobAction, JobSchedule, JobStep};
pub use tsp::{tsp, Tour, TspAction, TspStep};
