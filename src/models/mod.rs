pub mod admission;
pub mod course;
pub mod material;
pub mod announcement;

pub use admission::{AdmissionApplication, Board};
pub use course::Course;
pub use material::Material;
pub use announcement::Announcement;
