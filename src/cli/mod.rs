pub mod orchestration;

pub use orchestration::{compute_tags, run_tag_workflow, TagWorkflowArgs, WorkflowResult};
