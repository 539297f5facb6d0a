pub mod conventions;
pub mod convert;
pub mod input_loader;
pub mod report;

#[cfg(test)]
mod report_tests;
