/// Table bootstrap tests
pub mod schema_tests;
