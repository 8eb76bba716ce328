// Event trait test module
#[cfg(test)]
mod event_tests;
