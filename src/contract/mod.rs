pub mod clients;
pub mod istatusfetcher;
pub mod lib;
