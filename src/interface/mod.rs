pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_history_csv;
pub use prompts::{collect_inputs, prompt_diet_profile, prompt_yes_no};
pub use render::{display_history, display_progress, display_record, display_recommendations};
