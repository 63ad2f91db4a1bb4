pub mod cart {
    pub mod store;
}
