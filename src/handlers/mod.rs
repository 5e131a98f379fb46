pub mod contact;
pub mod pages;
