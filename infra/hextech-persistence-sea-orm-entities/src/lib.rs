pub mod champion;
