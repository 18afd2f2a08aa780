mod catalog;
mod errors;
pub mod guards;
mod method;
mod resolver;
mod result;
mod values;

pub use catalog::*;
pub use errors::*;
pub use method::*;
pub use resolver::*;
pub use result::*;
pub use values::*;

#[cfg(test)]
mod resolver_tests;
#[cfg(test)]
mod values_tests;
