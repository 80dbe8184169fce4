pub mod connectivity;
pub mod envelope;
pub mod list;
pub mod wish;
