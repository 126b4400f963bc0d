// Domain layer - Deployment inputs and the documents sent to QuickSight
pub mod dashboard;
pub mod environment;
pub mod template;
