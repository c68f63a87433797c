//! Interface layers over the domain. REST is the only one.

pub mod rest;
