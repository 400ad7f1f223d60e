pub mod istates;
pub mod ievents;
pub mod inotification;

pub use istates::*;
pub use ievents::*;
pub use inotification::*;

use chrono::{Local, NaiveDateTime};

pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}
