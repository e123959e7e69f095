pub mod constants;
pub mod corpus;
pub mod csv;
