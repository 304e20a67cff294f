pub mod mac;
pub mod netbios;
