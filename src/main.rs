fn main() {
    #[cfg(feature = "csr")]
    item_browser::mount();
}
