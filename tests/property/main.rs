// tests/property/main.rs
