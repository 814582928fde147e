// Boundaries the wizard talks to outside its in-memory state.

pub mod dictionary;
pub mod feedback;
