use std::sync::LazyLock;

use chrono::{DateTime, Utc};

pub mod contact;

pub const CLIENT_KEY1: &str = "203.0.113.7";
pub const CLIENT_KEY2: &str = "198.51.100.2";

/// 15 Jan 2025, 09:05 UTC
pub static SUBMITTED_AT: LazyLock<DateTime<Utc>> =
    LazyLock::new(|| DateTime::from_timestamp(1_736_931_900, 0).unwrap());
