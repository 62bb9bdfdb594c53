//! Test helpers for staging request files in temporary directories.

use camino::{Utf8Path, Utf8PathBuf};
use fleetroute_core::PlanRequest;
use fleetroute_core::test_support::{NAIROBI_DEPOT, nairobi_shops};
use tempfile::TempDir;

pub(super) fn temp_root() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

pub(super) fn nairobi_request() -> PlanRequest {
    PlanRequest {
        start: NAIROBI_DEPOT,
        waypoints: nairobi_shops(),
    }
}

pub(super) fn write_request(path: &Utf8Path, request: &PlanRequest) {
    let payload = serde_json::to_string_pretty(request).expect("serialize request");
    write_utf8(path, payload.as_bytes());
}
