pub mod field;
pub mod header;
pub mod spinner;

pub use field::Field;
pub use header::Header;
pub use spinner::LoadingSpinner;
