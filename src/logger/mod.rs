//! Logger module
//!
//! Startup banner on stdout, errors and warnings on stderr. Requests themselves are
//! not logged.

/// Page suggested in the banner
const UI_TESTS_PATH: &str = "/Tests/UI/index.html";

/// Lines printed once the listener is bound
pub fn startup_banner(port: u16) -> [String; 2] {
    [
        format!("Server has started at port {port}"),
        format!("If you want to open UI tests, go to http://localhost:{port}{UI_TESTS_PATH}"),
    ]
}

pub fn log_server_start(port: u16) {
    for line in startup_banner(port) {
        println!("{line}");
    }
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
