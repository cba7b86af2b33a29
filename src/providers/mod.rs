pub mod awesome_api;
