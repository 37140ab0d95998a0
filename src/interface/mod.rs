pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_action, prompt_line_choice, prompt_new_quantity, prompt_replacement,
    prompt_target_calories, prompt_yes_no, SwapAction,
};
pub use render::{
    describe_food_line, display_document, display_food_list, display_substitution, display_totals,
};
