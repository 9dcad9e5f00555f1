pub mod check;
pub mod current;
pub mod reset;
pub mod steps;
