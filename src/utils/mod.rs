pub mod log_err;
#[cfg(test)]
pub mod test_upstream;
