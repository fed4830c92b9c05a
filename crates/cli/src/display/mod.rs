//! Affichage des résultats dans le terminal

pub mod stats;
pub mod visualizer;
