pub mod contact;

pub use contact::{
    ContactRejection, ContactResponse, ContactSubmission, ValidatedContact, CHALLENGE_OPTIONS,
};
