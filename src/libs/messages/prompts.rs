// Task prompts
pub const PROMPT_CONFIRM_DELETE: &str = "Delete the selected task(s)?";

// Configuration prompts
pub const PROMPT_SORT_KEY: &str = "Default sort field";
pub const PROMPT_SORT_DIRECTION: &str = "Default sort direction";
