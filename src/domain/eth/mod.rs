mod address;

pub use self::address::{
    ADDRESS_LEN,
    Address,
    InvalidAddress,
    Reason,
    less_than,
    sort_unique,
    validate,
};
