//! `proxy`: port 8080, every request to `/` delayed 100-399ms.

use lagstub_core::VariantConfig;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    lagstub::init_logging();
    lagstub::run(VariantConfig::proxy()).await
}
