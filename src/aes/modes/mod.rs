mod ecb;
pub(crate) mod util;

pub use ecb::{
    decrypt_ecb_serial, encrypt_ecb_parallel, encrypt_ecb_partitioned, encrypt_ecb_serial,
};
