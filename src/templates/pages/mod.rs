pub mod home;
pub mod results;

pub use home::{home_page, HomeVm};
pub use results::results_page;
