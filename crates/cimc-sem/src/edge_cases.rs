//! Edge case tests for cimc-sem: the two passes run back to back.
