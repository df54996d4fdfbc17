mod common;
mod decisions;
mod request;
mod scoring;
