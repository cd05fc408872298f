pub mod names;
pub mod prompt;

pub use names::{
    ask_policy, attach_stickers, collect_names, SizePolicy, ANOTHER_QUESTION, NAME_QUESTION,
    STANDARD_PACK_SIZE, STANDARD_QUESTION,
};
pub use prompt::Prompter;
