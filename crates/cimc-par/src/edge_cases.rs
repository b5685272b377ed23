//! Edge case tests for cimc-par.
