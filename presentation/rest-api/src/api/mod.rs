pub mod error;
pub mod tags;
pub mod cart {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod dashboard {
    pub mod dto;
    pub mod routes;
}
pub mod health {
    pub mod routes;
}
pub mod product {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod sale {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
