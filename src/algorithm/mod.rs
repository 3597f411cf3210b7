/// Constrained color assignment over subdivided cells
pub mod coloring;
/// End-to-end picture generation and policy configuration
pub mod generator;
/// Line layout generation with spacing and distribution constraints
pub mod lines;
/// Seeded randomness for reproducible generation
pub mod random;
/// Canvas subdivision by iterative cropping
pub mod subdivision;
