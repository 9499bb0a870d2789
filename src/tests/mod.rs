
mod driver;

/// Makes the driver's log output visible when running the tests with `RUST_LOG` set.
/// 
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
