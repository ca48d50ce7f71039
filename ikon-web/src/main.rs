fn main() {
    dioxus::launch(ikon_web::App);
}
