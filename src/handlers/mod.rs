pub mod admission;
pub mod pages;
