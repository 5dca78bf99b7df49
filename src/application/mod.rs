//! Application layer - Use cases and orchestration

pub mod employee_details;
pub mod generate_demo;
pub mod init;
pub mod manage_config;
pub mod timeline;

pub use employee_details::{employee_details, EmployeeDetails};
pub use generate_demo::{DemoData, DemoGenerator};
pub use manage_config::ConfigService;
pub use timeline::{TimelineOptions, TimelineService, TimelineView};
