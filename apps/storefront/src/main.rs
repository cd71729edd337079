//! # Aurum Storefront Entry Point
//!
//! ```text
//! aurum-storefront show                  print the saved cart and wishlist
//! aurum-storefront dispatch '<json>'     apply one action and save
//! aurum-storefront clear                 empty both and save
//! aurum-storefront theme                 print design tokens for the screen
//! ```
//!
//! The actual setup is in lib.rs for testability.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match aurum_storefront::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
