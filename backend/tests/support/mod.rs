#![allow(dead_code)]

use std::env;
use std::ffi::OsString;
use std::io::Write;
use std::sync::Mutex;

use launch_dash::dataset::DATA_PATH_ENV;
use launch_dash::models::{LaunchRecord, Outcome};
use tempfile::NamedTempFile;

static DATA_ENV_LOCK: Mutex<()> = Mutex::new(());

/// Run `f` with `LAUNCH_DASH_DATA` set to `value` (or unset for `None`).
///
/// Tests in one binary share the process environment, so callers are
/// serialized. The previous value comes back when `f` returns or panics.
pub fn with_data_path_env<R>(value: Option<&str>, f: impl FnOnce() -> R) -> R {
    let _serial = DATA_ENV_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let _restore = DataPathRestore::apply(value);
    f()
}

/// Puts the data path variable back on drop.
struct DataPathRestore {
    previous: Option<OsString>,
}

impl DataPathRestore {
    fn apply(value: Option<&str>) -> Self {
        let previous = env::var_os(DATA_PATH_ENV);
        match value {
            Some(path) => env::set_var(DATA_PATH_ENV, path),
            None => env::remove_var(DATA_PATH_ENV),
        }
        Self { previous }
    }
}

impl Drop for DataPathRestore {
    fn drop(&mut self) {
        match self.previous.take() {
            Some(path) => env::set_var(DATA_PATH_ENV, path),
            None => env::remove_var(DATA_PATH_ENV),
        }
    }
}

pub const CSV_HEADER: &str =
    "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category";

/// A slice of the real launch table: 4 sites, first-occurrence order
/// CCAFS LC-40, VAFB SLC-4E, KSC LC-39A, CCAFS SLC-40.
pub const SAMPLE_ROWS: &[&str] = &[
    "1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0",
    "2,CCAFS LC-40,0,0.0,F9 v1.0  B0004,v1.0",
    "3,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0",
    "4,CCAFS LC-40,0,500.0,F9 v1.0  B0006,v1.0",
    "5,CCAFS LC-40,0,677.0,F9 v1.0  B0007,v1.0",
    "6,VAFB SLC-4E,0,500.0,F9 v1.1  B1003,v1.1",
    "7,CCAFS LC-40,0,3170.0,F9 v1.1,v1.1",
    "8,CCAFS LC-40,0,3325.0,F9 v1.1,v1.1",
    "9,CCAFS LC-40,0,2296.0,F9 v1.1,v1.1",
    "10,CCAFS LC-40,0,1316.0,F9 v1.1,v1.1",
    "11,CCAFS LC-40,0,4535.0,F9 v1.1,v1.1",
    "12,CCAFS LC-40,0,4428.0,F9 v1.1 B1011,v1.1",
    "13,CCAFS LC-40,0,2216.0,F9 v1.1 B1010,v1.1",
    "14,CCAFS LC-40,0,2395.0,F9 v1.1 B1012,v1.1",
    "15,CCAFS LC-40,0,570.0,F9 v1.1 B1013,v1.1",
    "16,VAFB SLC-4E,0,4159.0,F9 v1.1 B1017,v1.1",
    "17,CCAFS LC-40,1,1898.0,F9 v1.1 B1018,v1.1",
    "18,CCAFS LC-40,1,2034.0,F9 FT B1019,FT",
    "19,VAFB SLC-4E,0,553.0,F9 v1.1 B1003,v1.1",
    "20,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT",
    "21,KSC LC-39A,0,5600.0,F9 FT B1030,FT",
    "22,KSC LC-39A,1,5300.0,F9 FT B1021.2,FT",
    "23,VAFB SLC-4E,1,9600.0,F9 FT B1029.1,FT",
    "24,KSC LC-39A,1,3600.0,F9 FT B1032.1,FT",
    "25,CCAFS SLC-40,1,3669.0,F9 FT B1035.1,FT",
    "26,CCAFS SLC-40,1,6460.0,F9 B4 B1039.1,B4",
    "27,CCAFS SLC-40,0,4230.0,F9 B4 B1040.2,B4",
];

pub fn sample_csv() -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');
    for row in SAMPLE_ROWS {
        csv.push_str(row);
        csv.push('\n');
    }
    csv
}

/// Write `content` to a temp file with the given suffix.
pub fn temp_file(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    write!(file, "{}", content).expect("write temp file");
    file
}

pub fn launch(site: &str, payload: f64, success: bool) -> LaunchRecord {
    let outcome = if success {
        Outcome::Success
    } else {
        Outcome::Failure
    };
    LaunchRecord::new(site, payload, "F9 FT", outcome)
}
