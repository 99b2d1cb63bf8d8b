/// Ends the process after a fatal log call.
///
/// `Logger::fatal` goes through this trait instead of calling
/// `std::process::exit` directly so tests can observe the request.
pub trait Terminate: Send + Sync {
    fn terminate(&self, status: i32);
}

/// Exits the current process with the requested status. Never returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExit;

impl Terminate for ProcessExit {
    fn terminate(&self, status: i32) {
        std::process::exit(status)
    }
}
