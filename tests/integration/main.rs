//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises one behaviour of the
//! decision loop against the mock robot.  All tests run on the host with no
//! real hardware required.

mod mock_hw;
mod shutdown_tests;
