pub mod db;
pub mod errors;
pub mod cart {
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod sale {
    pub mod entity;
    pub mod repository;
}
