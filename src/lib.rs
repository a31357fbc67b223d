/// Environment
pub mod env;

/// Testing environments
pub mod gym;

/// Terminal visualisation
#[cfg(feature = "viz")]
pub mod viz;
