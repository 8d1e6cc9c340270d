// Shared helpers for integration tests. Not every test binary uses every
// helper, so dead_code is allowed for the whole module.
#![allow(dead_code)]

pub mod harness;
