// Server module entry point
// Listener creation, connection handling and the accept loop

pub mod connection;
pub mod listener;

// Rust does not allow `loop` as a module name (keyword), so it is exposed as server_loop
#[path = "loop.rs"]
pub mod server_loop;

pub use listener::create_listener;
pub use server_loop::start_server_loop;
