use activity_board::components::{App, AppProps};
use activity_board::BoardConfig;
use wasm_bindgen_futures::spawn_local;

fn main() {
    // Config file is optional; render once it has been tried.
    spawn_local(async {
        let config = BoardConfig::load().await;
        yew::Renderer::<App>::with_props(AppProps { config }).render();
    });
}
