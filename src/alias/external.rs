//! Modules generated from `CSV_COMPAT_EXTERNAL` sources.

include!(concat!(env!("OUT_DIR"), "/external.rs"));
