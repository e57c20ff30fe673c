// routes/mod.rs
// Public re-exports of all route handlers.

pub mod decrypt;
pub mod generate;
pub mod qrcode;
pub mod setup;
pub mod verify;

pub use decrypt::decrypt_seed;
pub use generate::generate_2fa;
pub use qrcode::qrcode;
pub use setup::setup;
pub use verify::verify_2fa;
