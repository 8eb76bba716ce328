#[cfg(test)]
mod direct_tests;
