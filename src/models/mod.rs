pub mod route;
pub mod stop;
