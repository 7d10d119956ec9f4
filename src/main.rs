//! build_ios - builds the tuner native library for iOS.
//!
//! Regenerates the Dart/C bridge, compiles `tuner-rs` into a universal static
//! library and installs it into the Xcode runner project.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let exit_code = tuner_ios_build::cli::run().await;

    process::exit(exit_code);
}
