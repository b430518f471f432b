pub mod diagnose_request;
pub mod diagnose_route;
