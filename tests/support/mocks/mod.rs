// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod time;
pub mod util;

pub use article_repos::{FailingArticleRepo, FailureMode};
pub use time::{SteppingClock, fixed_now};
pub use util::{BlankIds, FixedClock, SequentialIds};
