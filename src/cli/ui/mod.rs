pub mod display;
pub mod prompts;
pub mod test_mode;
