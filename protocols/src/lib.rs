pub mod nbns;
