pub mod assessment;
pub mod dashboard;
pub mod document;
pub mod recommendation;
