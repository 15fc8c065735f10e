#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod assets;
mod capability;
mod content;
mod locale;
mod state;
mod tilt;
mod visibility;

#[cfg(not(target_arch = "wasm32"))]
mod config;
#[cfg(target_arch = "wasm32")]
mod frontend;
#[cfg(not(target_arch = "wasm32"))]
mod server;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    server::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
