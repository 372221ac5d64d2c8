pub mod candidate_routes;
pub mod docs;
pub mod health;
