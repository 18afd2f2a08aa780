mod scheduler;
mod simulator;

pub use scheduler::*;
pub use simulator::*;

#[cfg(test)]
mod scheduler_tests;
