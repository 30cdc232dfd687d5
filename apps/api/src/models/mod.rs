pub mod roadmap;
pub mod skill_gap;
