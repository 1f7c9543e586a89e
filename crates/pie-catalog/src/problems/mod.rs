pub mod diabetes;
pub mod first_aid;
pub mod medication;
pub mod other;
pub mod shared;
