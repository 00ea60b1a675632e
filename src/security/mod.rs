pub mod credentials;
pub mod extractor;
