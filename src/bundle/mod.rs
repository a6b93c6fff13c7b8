//! Writers for the artifacts placed into the site root.

pub mod registration;
pub mod site;
pub mod worker;
