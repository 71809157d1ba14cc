//! Configuration unit tests, run as one test binary.

mod unit;
