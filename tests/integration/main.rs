// tests/integration/main.rs

mod cli_run;
mod error_handling;
mod rendering;
