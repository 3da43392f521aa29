//! Binary wrapper so the app can be served with `trunk serve`.

#[cfg(target_arch = "wasm32")]
fn main() {
    taskrate_frontend::boot();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("taskrate-frontend targets wasm32; build it with trunk or wasm-pack.");
}
