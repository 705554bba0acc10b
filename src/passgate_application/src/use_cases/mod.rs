pub mod login;
pub mod register;

#[cfg(test)]
pub(crate) mod test_support;
