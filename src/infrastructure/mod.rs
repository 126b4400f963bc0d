// Infrastructure layer - Local files, settings and the QuickSight REST adapter
pub mod config;
pub mod quicksight_http;
