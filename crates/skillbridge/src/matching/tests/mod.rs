mod common;

mod scoring;
