mod error_tests;
mod request_tests;
