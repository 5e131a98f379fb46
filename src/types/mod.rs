pub mod submission;

pub use submission::{ContactForm, FormResponse, Submission};
