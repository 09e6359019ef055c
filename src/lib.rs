// fieldbook - Species capture logbook client core
// Author: kelexine (https://github.com/kelexine)

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod media;
pub mod ratelimit;
pub mod resolver;
pub mod storage;
pub mod utils;
