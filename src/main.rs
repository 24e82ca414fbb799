#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod anchor;
mod config;
mod contact;
mod error;
mod logging;
mod nav;
mod pointer;
mod reveal;
mod scroll;
mod theme;
mod timer;
mod typing;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
