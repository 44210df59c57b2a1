use dioxus::logger::tracing::{info, Level};

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to initialize logger");
    info!("starting food delivery storefront");
    dioxus::launch(food_delivery_site::App);
}
