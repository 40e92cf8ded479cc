#[cfg(not(target_arch = "wasm32"))]
use kotoba_quiz::HomeApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Kotoba Quiz",
        options,
        Box::new(|cc| Ok(Box::new(HomeApp::new(cc)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // En la web la app arranca desde el runner WASM del crate (cdylib).
}
