pub mod ballistics;
pub mod clock;
pub mod scenario;
pub mod window;
