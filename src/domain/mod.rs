// Domain layer - dashboard data model and pure transitions
pub mod category;
pub mod command;
pub mod dashboard;
pub mod error;
pub mod id;
pub mod widget;
