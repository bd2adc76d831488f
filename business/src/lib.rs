pub mod application {
    pub mod cart {
        pub mod add_entry;
        pub mod checkout;
        pub mod create;
        pub mod get_by_id;
        pub mod remove_entry;
    }
    pub mod metrics {
        pub mod get_dashboard;
    }
    pub mod product {
        pub mod get_all;
    }
    pub mod sale {
        pub mod fulfill;
        pub mod get_all;
        pub mod get_by_id;
        pub mod submit;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_entry;
            pub mod checkout;
            pub mod create;
            pub mod get_by_id;
            pub mod remove_entry;
        }
    }
    pub mod metrics {
        pub mod calculator;
        pub mod model;
        pub mod use_cases {
            pub mod get_dashboard;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
        }
    }
    pub mod sale {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod fulfill;
            pub mod get_all;
            pub mod get_by_id;
            pub mod submit;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
