use dioxus::logger::tracing::Level;

fn main() {
    dioxus::logger::init(Level::DEBUG).expect("failed to initialize logger");

    #[cfg(any(feature = "desktop", feature = "web"))]
    dioxus::launch(rerender_lab::App);

    #[cfg(not(any(feature = "desktop", feature = "web")))]
    rerender_lab::harness::walkthrough();
}
