pub mod alert;
pub mod feedback;
pub mod form;
pub mod strength;
