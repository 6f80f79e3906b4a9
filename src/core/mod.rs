pub mod context;
pub mod credential;
pub mod error;
pub mod metadata;
pub mod object;
pub mod rules;
pub mod verifiers;
