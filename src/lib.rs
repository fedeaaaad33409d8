pub mod choice;
pub mod edit;
pub mod framework;
pub mod materialize;
pub mod render;
pub mod report;
pub mod runner;
pub mod transform;
pub mod utils;
