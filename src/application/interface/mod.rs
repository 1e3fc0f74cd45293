pub mod clock;
pub mod crypto;
pub mod db;
pub mod gateway;
