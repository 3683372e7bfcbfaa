pub mod csv;
pub mod delimited;
pub mod structured;
