//! Resolver scenario tests

mod scenarios;
