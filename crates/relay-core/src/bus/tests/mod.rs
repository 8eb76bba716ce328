// Dispatch engine test module
#[cfg(test)]
mod builder_tests;
