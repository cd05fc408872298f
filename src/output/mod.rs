pub mod prune;
pub mod writer_json;

pub use prune::prune_nulls;
pub use writer_json::{pack_to_value, to_pretty_json, write_pack_json};
