pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod check_health;
        pub mod empty_cart;
        pub mod get_cart;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod store;
        pub mod use_cases {
            pub mod add_item;
            pub mod check_health;
            pub mod empty_cart;
            pub mod get_cart;
        }
    }
}

#[cfg(any(test, feature = "contract-tests"))]
pub mod contract;
