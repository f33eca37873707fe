#![allow(unused)]

use chrono::{Datelike,Timelike};
use quicklook_common::datetime::{utc_from_yo_hour, utc_from_yo_hms_tenths};

#[test]
fn test_utc_from_yo_hour() {
    let dt = utc_from_yo_hour( 2020, 146, 0).unwrap();
    assert_eq!( dt.year(), 2020);
    assert_eq!( (dt.month(), dt.day()), (5, 25)); // 2020 is a leap year
    assert_eq!( dt.hour(), 0);

    assert!( utc_from_yo_hour( 2021, 365, 23).is_some());
    assert!( utc_from_yo_hour( 2021, 366, 0).is_none()); // not a leap year
    assert!( utc_from_yo_hour( 2020, 146, 24).is_none());
}

#[test]
fn test_utc_from_yo_hms_tenths() {
    let dt = utc_from_yo_hms_tenths( 2020, 146, 0, 1, 15, 0).unwrap();
    assert_eq!( dt.ordinal(), 146);
    assert_eq!( (dt.hour(), dt.minute(), dt.second()), (0, 1, 15));

    assert!( utc_from_yo_hms_tenths( 2020, 146, 0, 60, 0, 0).is_none());
}
