#![allow(dead_code)]

pub mod factories;
pub mod helpers;

pub use factories::CandidateFactory;
pub use helpers::{build_resolver, build_resolver_with, StubSearch};
