// Test modules for symantec-ssl crate
//
// Each source module has a corresponding test file that focuses on the
// behaviour callers depend on.

// Test helper utilities (fixtures and canned vendor envelopes)
pub mod helpers;
