//! Integration tests for the public seqscan API.

mod samples;
mod selection;
