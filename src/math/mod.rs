/// Binomial coefficients and subset enumeration
pub mod combinatorics;
/// Seeded random selection
pub mod random;
