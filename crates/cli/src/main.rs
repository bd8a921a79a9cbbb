// Copyright 2025 benchtrack Contributors
// SPDX-License-Identifier: Apache-2.0

//! benchtrack CLI entry point.

#[tokio::main]
async fn main() {
    if let Err(e) = benchtrack_cli::run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
