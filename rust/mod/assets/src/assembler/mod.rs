//! Pure mappings between wire resources and entities. No network access.

pub mod machine;
pub mod plant;
pub mod production_line;
