//! `slow_app`: port 9797, `/okay` (immediate) and `/slow` (100-399ms).

use lagstub_core::VariantConfig;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    lagstub::init_logging();
    lagstub::run(VariantConfig::slow_app()).await
}
