pub mod feedback;
pub mod fixtures;
pub mod state;
pub mod updates;
pub mod wizard_data;
