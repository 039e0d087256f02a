pub mod application {
    pub mod settings {
        pub mod load;
    }
}

pub mod domain {
    pub mod logger;
    pub mod settings {
        pub mod errors;
        pub mod keys;
        pub mod model;
        pub mod source;
        pub mod use_cases {
            pub mod load;
        }
    }
}
