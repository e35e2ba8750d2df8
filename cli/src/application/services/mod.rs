//! Application services: one `docker-machine` call per operation, plus the
//! list+inspect aggregation.

pub mod list;
pub mod machine;

#[cfg(test)]
pub(crate) mod test_support;
