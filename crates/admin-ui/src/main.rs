#[cfg(target_arch = "wasm32")]
fn main() {
    dioxus::launch(eca_admin_ui::App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("eca-admin-ui runs in the browser; build it with `dx serve --platform web`");
}
