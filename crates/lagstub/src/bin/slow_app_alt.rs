//! `slow_app_alt`: the `slow_app` routes on port 8080.

use lagstub_core::VariantConfig;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    lagstub::init_logging();
    lagstub::run(VariantConfig::slow_app_alt()).await
}
