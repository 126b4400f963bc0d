// Application layer - Upsert use cases over the QuickSight port
pub mod dashboard_service;
pub mod deployment_service;
pub mod quicksight_client;
pub mod template_service;

#[cfg(test)]
pub mod fake_client;

/// Which side of the Absent -> Present transition an upsert took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Updated,
    Created,
}
