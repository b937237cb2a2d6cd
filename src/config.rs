use crate::models::SnifferConfig;
use lazy_static::lazy_static;

lazy_static! {
    /// The configuration used by `find_largest_number`.
    pub static ref DEFAULT_SNIFFER_CONFIG: SnifferConfig = SnifferConfig::default();
}
